//! Reset page reached from the emailed link. The token is pre-checked once on
//! mount and the form is shown unless the link is missing; an expiry reported
//! at submit switches the page to the invalid-link screen instead of showing an
//! error on the form.

use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, FieldError, PasswordStrength, Spinner};
use crate::features::auth::client::{AccountScope, HttpAuthApi};
use crate::features::auth::reset::{ResetPhase, SubmitOutcome, check_token, submit_new_password};
use crate::features::forms::FieldErrors;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use secrecy::SecretString;

#[derive(Clone)]
struct NewPassword {
    token: String,
    password: String,
    confirm: String,
}

#[component]
pub fn ResetPasswordPage(scope: AccountScope) -> impl IntoView {
    let query = use_query_map();
    let phase = RwSignal::new(ResetPhase::CheckingToken);
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let token = query.with_untracked(|params| params.get("token"));
    spawn_local(async move {
        phase.set(check_token(&HttpAuthApi, scope, token).await);
    });

    let submit_action = Action::new_local(move |input: &NewPassword| {
        let input = input.clone();
        async move {
            let password = SecretString::from(input.password);
            let confirm = SecretString::from(input.confirm);
            submit_new_password(&HttpAuthApi, scope, &input.token, &password, &confirm).await
        }
    });

    Effect::new(move |_| {
        if let Some(outcome) = submit_action.value().get() {
            match &outcome {
                SubmitOutcome::Rejected(errors) => set_field_errors.set(errors.clone()),
                SubmitOutcome::Failed(err) => set_error.set(Some(err.user_message())),
                SubmitOutcome::Done | SubmitOutcome::TokenInvalid => {
                    set_password.set(String::new());
                    set_confirm.set(String::new());
                }
            }
            phase.update(|phase| *phase = phase.clone().after_submit(&outcome));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_field_errors.set(FieldErrors::new());

        let Some(token) = phase.with_untracked(|phase| phase.token().map(str::to_string)) else {
            return;
        };
        submit_action.dispatch(NewPassword {
            token,
            password: password.get_untracked(),
            confirm: confirm.get_untracked(),
        });
    };

    let policy = scope.password_policy();

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-6">
                <h1 class=Theme::HEADING>"Choose a new password"</h1>
                {move || match phase.get() {
                    ResetPhase::CheckingToken => {
                        view! {
                            <div class="flex justify-center py-8">
                                <Spinner label="Checking your reset link..." />
                            </div>
                        }
                            .into_any()
                    }
                    ResetPhase::TokenInvalid => {
                        view! {
                            <div class="space-y-4">
                                <Alert
                                    kind=AlertKind::Error
                                    message="This reset link is invalid or has expired.".to_string()
                                />
                                <A href=scope.forgot_password_route() {..} class=Theme::LINK>
                                    "Request a new link"
                                </A>
                            </div>
                        }
                            .into_any()
                    }
                    ResetPhase::Done => {
                        view! {
                            <div class="space-y-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Your password has been updated.".to_string()
                                />
                                <A href=scope.login_route() {..} class=Theme::LINK>
                                    "Continue to sign in"
                                </A>
                            </div>
                        }
                            .into_any()
                    }
                    ResetPhase::FormReady { .. } => {
                        view! {
                            <form class="space-y-5" on:submit=on_submit novalidate>
                                <div>
                                    <label class=Theme::LABEL for="password">"New password"</label>
                                    <input
                                        id="password"
                                        type="password"
                                        class=Theme::INPUT
                                        autocomplete="new-password"
                                        prop:value=move || password.get()
                                        on:input=move |event| set_password.set(event_target_value(&event))
                                    />
                                    <PasswordStrength password=password policy=policy />
                                    <FieldError errors=field_errors field="password" />
                                </div>
                                <div>
                                    <label class=Theme::LABEL for="confirm_password">
                                        "Confirm password"
                                    </label>
                                    <input
                                        id="confirm_password"
                                        type="password"
                                        class=Theme::INPUT
                                        autocomplete="new-password"
                                        prop:value=move || confirm.get()
                                        on:input=move |event| set_confirm.set(event_target_value(&event))
                                    />
                                    <FieldError errors=field_errors field="confirm_password" />
                                </div>
                                <Button button_type="submit" disabled=submit_action.pending()>
                                    "Update password"
                                </Button>
                                {move || {
                                    submit_action
                                        .pending()
                                        .get()
                                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                                }}
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
                        }
                            .into_any()
                    }
                }}
            </div>
        </AppShell>
    }
}
