use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
fn LegalPage(title: &'static str, sections: Vec<(&'static str, String)>) -> impl IntoView {
    view! {
        <AppShell>
            <article class="mx-auto max-w-3xl space-y-6 text-gray-700 dark:text-gray-200">
                <h1 class=Theme::HEADING>{title}</h1>
                {sections
                    .into_iter()
                    .map(|(heading, body)| {
                        view! {
                            <section class="space-y-2">
                                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{heading}</h2>
                                <p>{body}</p>
                            </section>
                        }
                    })
                    .collect_view()}
            </article>
        </AppShell>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    let sections = vec![
        (
            "What we collect",
            "Contact form submissions and, if you create an account, your name and email address."
                .to_string(),
        ),
        (
            "Local storage",
            "Sign-in tokens and your theme preference are kept in your browser's local storage until you sign out."
                .to_string(),
        ),
        (
            "Contact",
            format!("Questions about your data can be sent to {}.", config.contact_email),
        ),
    ];

    view! { <LegalPage title="Privacy policy" sections=sections /> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    let sections = vec![
        (
            "Use of the site",
            format!("By using {} you agree to these terms.", config.site_name),
        ),
        (
            "Accounts",
            "You are responsible for keeping your password confidential. Reset links expire after one hour."
                .to_string(),
        ),
        (
            "Services",
            "Prices and availability of listed services may change without notice.".to_string(),
        ),
    ];

    view! { <LegalPage title="Terms of service" sections=sections /> }
}
