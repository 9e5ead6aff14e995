//! Landing page for the OAuth handoff. The backend redirects here with either
//! `token`/`refreshToken` or `error` in the query string.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::oauth::session_from_callback;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use tracing::warn;

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let (error, set_error) = signal::<Option<String>>(None);

    let outcome = query.with_untracked(|params| {
        session_from_callback(
            params.get("token"),
            params.get("refreshToken"),
            params.get("error"),
        )
    });

    let signed_in = match outcome.and_then(|response| {
        auth.store()
            .store_user(&response)
            .map_err(|err| err.user_message())
    }) {
        Ok(_) => {
            auth.reload();
            true
        }
        Err(message) => {
            warn!("oauth sign-in did not complete");
            set_error.set(Some(message));
            false
        }
    };

    Effect::new(move |_| {
        if signed_in {
            // Replace so the tokens do not stay in browser history.
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-6">
                {move || match error.get() {
                    Some(message) => {
                        view! {
                            <div class="space-y-4">
                                <Alert kind=AlertKind::Error message=message />
                                <A href="/login" {..} class=Theme::LINK>"Back to sign in"</A>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <div class="flex justify-center py-8">
                                <Spinner />
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </AppShell>
    }
}
