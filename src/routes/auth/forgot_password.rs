//! "Forgot password" page. Known and unknown addresses land on the same
//! confirmation screen; the resend button is rate-limited by a 60 second
//! cooldown.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client::{AccountScope, HttpAuthApi};
use crate::features::auth::cooldown::ResendCooldown;
use crate::features::auth::reset::{RequestResetError, request_reset, resend_reset};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use super::resend_ticker::ResendTicker;

const CHECK_INBOX: &str =
    "If an account exists for that address, a reset link is on its way. The link expires in one hour.";

#[component]
pub fn ForgotPasswordPage(scope: AccountScope) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (field_error, set_field_error) = signal::<Option<&'static str>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (sent_to, set_sent_to) = signal::<Option<String>>(None);
    let ticker = ResendTicker::new();

    let request_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move { request_reset(&HttpAuthApi, scope, &email).await }
    });

    Effect::new(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(email) => {
                    ticker.start(ResendCooldown::started());
                    set_sent_to.set(Some(email));
                }
                Err(RequestResetError::Invalid(message)) => set_field_error.set(Some(message)),
                Err(RequestResetError::Failed(err)) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let resend_action = Action::new_local(move |_: &()| {
        let email = sent_to.get_untracked().unwrap_or_default();
        let current = ticker.current();
        async move { resend_reset(&HttpAuthApi, scope, &email, current).await }
    });

    Effect::new(move |_| {
        if let Some(Some(next)) = resend_action.value().get() {
            ticker.start(next);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_field_error.set(None);
        request_action.dispatch(email.get_untracked());
    };

    let resend_disabled =
        Signal::derive(move || !ticker.cooldown().can_resend() || resend_action.pending().get());

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-6">
                <h1 class=Theme::HEADING>"Reset your password"</h1>
                <Show
                    when=move || sent_to.get().is_some()
                    fallback=move || {
                        view! {
                            <form class="space-y-5" on:submit=on_submit novalidate>
                                <p class="text-sm text-gray-600 dark:text-gray-300">
                                    "Enter the email you signed up with and we'll send you a reset link."
                                </p>
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
                                <Button button_type="submit" disabled=request_action.pending()>
                                    "Send reset link"
                                </Button>
                                {move || {
                                    request_action
                                        .pending()
                                        .get()
                                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                                }}
                            </form>
                        }
                    }
                >
                    <div class="space-y-4">
                        <Alert kind=AlertKind::Success message=CHECK_INBOX.to_string() />
                        <Button
                            disabled=resend_disabled
                            on_click=move |()| {
                                resend_action.dispatch(());
                            }
                        >
                            {move || {
                                let cooldown = ticker.cooldown();
                                if cooldown.is_active() {
                                    format!("Resend in {}s", cooldown.remaining())
                                } else {
                                    "Resend email".to_string()
                                }
                            }}
                        </Button>
                    </div>
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
                <A href=scope.login_route() {..} class=Theme::LINK>
                    "Back to sign in"
                </A>
            </div>
        </AppShell>
    }
}
