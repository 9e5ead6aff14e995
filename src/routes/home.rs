use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use crate::features::settings::client::get_settings;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    let fallback_name = config.site_name.clone();
    let settings = LocalResource::new(get_settings);

    let heading = move || {
        settings
            .get()
            .and_then(Result::ok)
            .map(|settings| settings.site_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| fallback_name.clone())
    };
    let tagline = move || {
        settings
            .get()
            .and_then(Result::ok)
            .and_then(|settings| settings.tagline)
            .unwrap_or_else(|| "Design and engineering for ambitious teams.".to_string())
    };
    let social = move || {
        settings
            .get()
            .and_then(Result::ok)
            .map(|settings| {
                settings
                    .social
                    .entries()
                    .into_iter()
                    .map(|(label, url)| {
                        view! {
                            <a href=url.to_string() class=Theme::LINK target="_blank" rel="noopener noreferrer">
                                {label}
                            </a>
                        }
                    })
                    .collect_view()
            })
    };

    view! {
        <AppShell>
            <section class="py-16 text-center space-y-6">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white md:text-5xl">{heading}</h1>
                <p class="mx-auto max-w-2xl text-lg text-gray-600 dark:text-gray-300">{tagline}</p>
                <div class="flex justify-center gap-4">
                    <A
                        href="/services"
                        {..}
                        class="rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                    >
                        "Our services"
                    </A>
                    <A
                        href="/contact"
                        {..}
                        class="rounded-lg border border-gray-300 px-5 py-2.5 text-sm font-medium text-gray-900 hover:bg-gray-100 dark:border-gray-600 dark:text-white dark:hover:bg-gray-700"
                    >
                        "Get in touch"
                    </A>
                </div>
                <div class="flex justify-center gap-6 text-sm">{social}</div>
            </section>
        </AppShell>
    }
}
