//! Shared layout wrapper with navigation, content container, and footer. It
//! centralizes header markup and the mobile menu toggle so routes can focus on
//! content. Navigation remains client-side; the API must enforce access control.

use crate::app_lib::config::AppConfig;
use crate::components::layout::FloatingMenu;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps public routes with a header, footer, and the floating action menu.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    let site_name = config.site_name.clone();
    let contact_email = config.contact_email.clone();
    let year = js_sys::Date::new_0().get_full_year();

    let nav_link = move |href: &'static str, label: &'static str| {
        view! {
            <li>
                <A href=href {..} class=NAV_LINK on:click=move |_| set_menu_open.set(false)>
                    {label}
                </A>
            </li>
        }
    };

    view! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-gray-900">
            <header class="border-b border-gray-200 dark:border-gray-800 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/logo.svg" class="h-8" alt=site_name.clone() />
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            {site_name.clone()}
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            {nav_link("/services", "Services")}
                            {nav_link("/blog", "Blog")}
                            {nav_link("/contact", "Contact")}
                            <Show
                                when=move || auth.is_user.get()
                                fallback=move || nav_link("/login", "Sign In")
                            >
                                <li>
                                    <button
                                        type="button"
                                        class=NAV_LINK
                                        on:click=move |_| {
                                            auth.sign_out_user();
                                            set_menu_open.set(false);
                                        }
                                    >
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="border-t border-gray-200 dark:border-gray-800">
                <div class="max-w-screen-xl mx-auto flex flex-col gap-2 p-4 text-sm text-gray-500 dark:text-gray-400 md:flex-row md:justify-between">
                    <span>{format!("© {year} {site_name}")}</span>
                    <div class="flex gap-4">
                        <A href="/privacy">"Privacy"</A>
                        <A href="/terms">"Terms"</A>
                        <a href=format!("mailto:{contact_email}")>{contact_email.clone()}</a>
                    </div>
                </div>
            </footer>
            <FloatingMenu />
        </div>
    }
}
