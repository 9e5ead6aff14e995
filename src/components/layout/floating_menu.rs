//! Floating action button that expands into the menu built by
//! `features::menu`. It also owns the persisted light/dark theme.

use crate::app_lib::session::BrowserStorage;
use crate::app_lib::theme::{ThemeMode, ThemeStore};
use crate::features::auth::state::use_auth;
use crate::features::menu::{MenuAction, MenuContext, MenuEntry, build_menu};
use leptos::prelude::*;
use leptos_router::components::A;
use tracing::debug;

const ENTRY: &str = "flex w-full items-center gap-3 px-4 py-2 text-sm text-gray-700 hover:bg-gray-100 dark:text-gray-200 dark:hover:bg-gray-700";

fn apply_theme(mode: ThemeMode) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = match mode {
            ThemeMode::Dark => classes.add_1("dark"),
            ThemeMode::Light => classes.remove_1("dark"),
        };
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
pub fn FloatingMenu() -> impl IntoView {
    let auth = use_auth();
    let (open, set_open) = signal(false);
    let theme = RwSignal::new(ThemeStore::new(BrowserStorage).load());

    Effect::new(move |_| {
        let mode = theme.get();
        apply_theme(mode);
        if let Err(err) = ThemeStore::new(BrowserStorage).save(mode) {
            debug!(%err, "theme preference not persisted");
        }
    });

    let entries = Memo::new(move |_| {
        build_menu(MenuContext {
            theme: theme.get(),
            is_authenticated: auth.is_user.get(),
            is_admin: auth.is_admin.get(),
        })
    });

    let run = move |action: MenuAction| {
        match action {
            MenuAction::ToggleTheme => theme.update(|mode| *mode = mode.toggled()),
            MenuAction::ScrollToTop => scroll_to_top(),
            MenuAction::SignOutUser => auth.sign_out_user(),
            MenuAction::SignOutAdmin => auth.sign_out_admin(),
        }
        set_open.set(false);
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-3">
            <Show when=move || open.get()>
                <div class="w-56 overflow-hidden rounded-lg border border-gray-200 bg-white py-1 shadow-lg dark:border-gray-700 dark:bg-gray-800">
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .map(|entry| match entry {
                                MenuEntry::Link { label, href, icon } => {
                                    view! {
                                        <A href=href {..} class=ENTRY on:click=move |_| set_open.set(false)>
                                            <span class="material-symbols-outlined text-base">{icon}</span>
                                            {label}
                                        </A>
                                    }
                                        .into_any()
                                }
                                MenuEntry::Action { label, icon, action } => {
                                    view! {
                                        <button type="button" class=ENTRY on:click=move |_| run(action)>
                                            <span class="material-symbols-outlined text-base">{icon}</span>
                                            {label}
                                        </button>
                                    }
                                        .into_any()
                                }
                                MenuEntry::Divider => {
                                    view! { <hr class="my-1 border-gray-200 dark:border-gray-700" /> }
                                        .into_any()
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
            <button
                type="button"
                class="flex h-14 w-14 items-center justify-center rounded-full bg-blue-700 text-white shadow-lg hover:bg-blue-800 focus:outline-none focus:ring-4 focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700"
                aria-label="Open quick actions"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|value| *value = !*value)
            >
                <span class="material-symbols-outlined">
                    {move || if open.get() { "close" } else { "more_horiz" }}
                </span>
            </button>
        </div>
    }
}
