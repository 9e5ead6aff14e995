use crate::features::auth::RequireAdmin;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

const SIDEBAR_LINK: &str = "flex items-center gap-2 rounded-lg px-3 py-2 text-sm text-gray-700 hover:bg-gray-100 dark:text-gray-200 dark:hover:bg-gray-700";

/// Layout wrapper for the admin subtree. Without an admin token the visitor
/// is sent to the admin sign-in page.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let sign_out = move |_| {
        auth.sign_out_admin();
        navigate("/admin/login", Default::default());
    };

    view! {
        <RequireAdmin>
            <div class="min-h-screen flex bg-gray-50 dark:bg-gray-900">
                <aside class="w-60 shrink-0 border-r border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800">
                    <p class="mb-6 text-lg font-semibold text-gray-900 dark:text-white">"Admin"</p>
                    <nav class="space-y-1">
                        <A href="/admin" {..} class=SIDEBAR_LINK>
                            <span class="material-symbols-outlined text-base">"dashboard"</span>
                            "Dashboard"
                        </A>
                        <A href="/admin/blogs" {..} class=SIDEBAR_LINK>
                            <span class="material-symbols-outlined text-base">"article"</span>
                            "Blog posts"
                        </A>
                        <A href="/admin/products" {..} class=SIDEBAR_LINK>
                            <span class="material-symbols-outlined text-base">"inventory_2"</span>
                            "Products"
                        </A>
                        <A href="/admin/settings" {..} class=SIDEBAR_LINK>
                            <span class="material-symbols-outlined text-base">"settings"</span>
                            "Settings"
                        </A>
                        <A href="/" {..} class=SIDEBAR_LINK>
                            <span class="material-symbols-outlined text-base">"public"</span>
                            "View site"
                        </A>
                        <button type="button" class=SIDEBAR_LINK on:click=sign_out.clone()>
                            <span class="material-symbols-outlined text-base">"logout"</span>
                            "Sign out"
                        </button>
                    </nav>
                </aside>
                <main class="flex-1 p-6">
                    <Outlet />
                </main>
            </div>
        </RequireAdmin>
    }
}
