use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders admin screens only with an admin token present.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_admin.get() {
            // UX-only guard; real access control must live on the API.
            navigate("/admin/login", Default::default());
        }
    });

    view! {
        <Show when=move || auth.is_admin.get()>
            {children()}
        </Show>
    }
}
