//! Resend page for the email verification link. Responses never reveal
//! whether the address is registered.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button};
use crate::features::auth::client::HttpAuthApi;
use crate::features::auth::verification::{
    RESEND_CONFIRMATION, ResendVerificationError, resend_verification,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use super::resend_ticker::ResendTicker;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let initial_email = query
        .with_untracked(|params| params.get("email"))
        .unwrap_or_default();
    let (email, set_email) = signal(initial_email);
    let (field_error, set_field_error) = signal::<Option<&'static str>>(None);
    let (sent, set_sent) = signal(false);
    let ticker = ResendTicker::new();

    let resend_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        let current = ticker.current();
        async move { resend_verification(&HttpAuthApi, &email, current).await }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(next) => {
                    ticker.start(next);
                    set_sent.set(true);
                }
                Err(ResendVerificationError::Invalid(message)) => {
                    set_field_error.set(Some(message));
                }
                Err(ResendVerificationError::CoolingDown(_)) => {}
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_field_error.set(None);
        resend_action.dispatch(email.get_untracked());
    };

    let disabled =
        Signal::derive(move || ticker.cooldown().is_active() || resend_action.pending().get());

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-6">
                <h1 class=Theme::HEADING>"Verify your email"</h1>
                <p class="text-sm text-gray-600 dark:text-gray-300">
                    "Follow the link we emailed you to activate your account. Need a new one?"
                </p>
                <form class="space-y-5" on:submit=on_submit novalidate>
                    <div>
                        <label class=Theme::LABEL for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            class=Theme::INPUT
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                        {move || {
                            field_error
                                .get()
                                .map(|message| view! { <p class=Theme::FIELD_ERROR>{message}</p> })
                        }}
                    </div>
                    <Button button_type="submit" disabled=disabled>
                        {move || {
                            let cooldown = ticker.cooldown();
                            if cooldown.is_active() {
                                format!("Resend in {}s", cooldown.remaining())
                            } else {
                                "Send verification email".to_string()
                            }
                        }}
                    </Button>
                </form>
                <Show when=move || sent.get()>
                    <Alert kind=AlertKind::Success message=RESEND_CONFIRMATION.to_string() />
                </Show>
                <A href="/login" {..} class=Theme::LINK>"Back to sign in"</A>
            </div>
        </AppShell>
    }
}
