//! 404 page for unknown routes and missing posts.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <NotFoundContent />
        </AppShell>
    }
}

/// Inner 404 content without AppShell, for pages that already render the shell.
#[component]
pub fn NotFoundContent() -> impl IntoView {
    let go_back = move |_| {
        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
            let _ = history.back();
        }
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">"404"</h1>
            <p class="text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</p>
            <div class="mt-6 flex flex-col sm:flex-row items-center justify-center gap-4">
                <A
                    href="/"
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
                >
                    <span class="material-symbols-outlined mr-2 text-base">"home"</span>
                    "Go Home"
                </A>
                <button
                    type="button"
                    on:click=go_back
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700"
                >
                    <span class="material-symbols-outlined mr-2 text-base">"arrow_back"</span>
                    "Go Back"
                </button>
            </div>
        </div>
    }
}
