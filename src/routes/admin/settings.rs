use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, FieldError, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::forms::FieldErrors;
use crate::features::settings::client::{get_settings, update_settings};
use crate::features::settings::types::{SiteSettings, normalize_settings};
use crate::routes::admin::admin_error;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Text input bound to one field of the settings signal.
fn text_field(
    settings: RwSignal<SiteSettings>,
    field_errors: ReadSignal<FieldErrors>,
    id: &'static str,
    label: &'static str,
    read: fn(&SiteSettings) -> String,
    write: fn(&mut SiteSettings, String),
) -> impl IntoView {
    view! {
        <div>
            <label class=Theme::LABEL for=id>{label}</label>
            <input
                id=id
                class=Theme::INPUT
                prop:value=move || settings.with(read)
                on:input=move |event| settings.update(|settings| write(settings, event_target_value(&event)))
            />
            <FieldError errors=field_errors field=id />
        </div>
    }
}

fn optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let settings = RwSignal::new(SiteSettings::default());
    let (loading, set_loading) = signal(true);
    let (field_errors, set_field_errors) = signal(FieldErrors::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saved, set_saved) = signal(false);

    spawn_local(async move {
        match get_settings().await {
            Ok(current) => settings.set(current),
            Err(err) => set_error.set(Some(err.user_message())),
        }
        set_loading.set(false);
    });

    let save_action = Action::new_local(move |input: &SiteSettings| {
        let input = input.clone();
        let headers = auth.admin_headers();
        async move { update_settings(&input, &headers).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(updated) => {
                    settings.set(updated);
                    set_saved.set(true);
                }
                Err(err) => set_error.set(Some(admin_error(auth, &err))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_saved.set(false);
        match settings.with_untracked(normalize_settings) {
            Ok(normalized) => {
                set_field_errors.set(FieldErrors::new());
                save_action.dispatch(normalized);
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    let field = move |id: &'static str,
                      label: &'static str,
                      read: fn(&SiteSettings) -> String,
                      write: fn(&mut SiteSettings, String)| {
        text_field(settings, field_errors, id, label, read, write)
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
            <form class="max-w-3xl space-y-8" on:submit=on_submit novalidate>
                <h1 class=Theme::HEADING>"Site settings"</h1>
                <section class="space-y-4">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"General"</h2>
                    {field("site_name", "Site name", |s| s.site_name.clone(), |s, v| s.site_name = v)}
                    {field("tagline", "Tagline", |s| optional(&s.tagline), |s, v| s.tagline = Some(v))}
                    {field(
                        "contact_email",
                        "Contact email",
                        |s| optional(&s.contact_email),
                        |s, v| s.contact_email = Some(v),
                    )}
                    {field(
                        "contact_phone",
                        "Contact phone",
                        |s| optional(&s.contact_phone),
                        |s, v| s.contact_phone = Some(v),
                    )}
                    {field("address", "Address", |s| optional(&s.address), |s, v| s.address = Some(v))}
                    <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                        <input
                            type="checkbox"
                            prop:checked=move || settings.with(|s| s.maintenance_mode)
                            on:change=move |event| {
                                settings.update(|s| s.maintenance_mode = event_target_checked(&event))
                            }
                        />
                        "Maintenance mode"
                    </label>
                </section>
                <section class="space-y-4">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Social links"</h2>
                    {field(
                        "twitter",
                        "Twitter",
                        |s| optional(&s.social.twitter),
                        |s, v| s.social.twitter = Some(v),
                    )}
                    {field(
                        "linkedin",
                        "LinkedIn",
                        |s| optional(&s.social.linkedin),
                        |s, v| s.social.linkedin = Some(v),
                    )}
                    {field(
                        "github",
                        "GitHub",
                        |s| optional(&s.social.github),
                        |s, v| s.social.github = Some(v),
                    )}
                    {field(
                        "instagram",
                        "Instagram",
                        |s| optional(&s.social.instagram),
                        |s, v| s.social.instagram = Some(v),
                    )}
                </section>
                <section class="space-y-4">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Payments"</h2>
                    {field(
                        "currency",
                        "Currency",
                        |s| s.payments.currency.clone(),
                        |s, v| s.payments.currency = v,
                    )}
                    <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                        <input
                            type="checkbox"
                            prop:checked=move || settings.with(|s| s.payments.stripe.enabled)
                            on:change=move |event| {
                                settings.update(|s| s.payments.stripe.enabled = event_target_checked(&event))
                            }
                        />
                        "Stripe"
                    </label>
                    {field(
                        "stripe_key",
                        "Stripe publishable key",
                        |s| s.payments.stripe.publishable_key.clone(),
                        |s, v| s.payments.stripe.publishable_key = v,
                    )}
                    <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                        <input
                            type="checkbox"
                            prop:checked=move || settings.with(|s| s.payments.razorpay.enabled)
                            on:change=move |event| {
                                settings.update(|s| s.payments.razorpay.enabled = event_target_checked(&event))
                            }
                        />
                        "Razorpay"
                    </label>
                    {field(
                        "razorpay_key",
                        "Razorpay key id",
                        |s| s.payments.razorpay.key_id.clone(),
                        |s, v| s.payments.razorpay.key_id = v,
                    )}
                </section>
                <Button button_type="submit" disabled=save_action.pending()>
                    "Save settings"
                </Button>
                <Show when=move || saved.get()>
                    <Alert kind=AlertKind::Success message="Settings saved.".to_string() />
                </Show>
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <Alert
                                    kind=AlertKind::Error
                                    message=message
                                    on_dismiss=move |()| set_error.set(None)
                                />
                            }
                        })
                }}
            </form>
        </Show>
    }
}
