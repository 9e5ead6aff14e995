//! Build and configuration summary for deployment checks. Shows only public
//! values.

use crate::app_lib::GIT_COMMIT_HASH;
use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    let api = if config.api_base_url.is_empty() {
        "same origin".to_string()
    } else {
        config.api_base_url.clone()
    };
    let rows = [
        ("Version", env!("CARGO_PKG_VERSION").to_string()),
        ("Commit", GIT_COMMIT_HASH.to_string()),
        ("API", api),
        ("Log level", config.log_level.to_string()),
    ];

    view! {
        <AppShell>
            <div class="mx-auto max-w-lg">
                <div class=Theme::CARD>
                    <h1 class="mb-4 font-semibold text-gray-900 dark:text-white">"Build"</h1>
                    <dl class="grid grid-cols-3 gap-y-2 text-sm">
                        {rows
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <dt class="text-gray-500 dark:text-gray-400">{label}</dt>
                                    <dd class="col-span-2 font-mono text-gray-900 dark:text-white">{value}</dd>
                                }
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        </AppShell>
    }
}
