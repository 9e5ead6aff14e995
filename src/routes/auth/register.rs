use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, FieldError, PasswordStrength, Spinner};
use crate::features::auth::client::{AccountScope, HttpAuthApi};
use crate::features::auth::register::{RegisterFailure, RegisterInput, register};
use crate::features::forms::FieldErrors;
use crate::routes::auth::login::encode_query;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use secrecy::SecretString;

#[derive(Clone)]
struct RegisterForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    accepted_terms: bool,
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (accepted_terms, set_accepted_terms) = signal(false);
    let (field_errors, set_field_errors) = signal(FieldErrors::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (registered, set_registered) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |form: &RegisterForm| {
        let form = form.clone();
        async move {
            let input = RegisterInput {
                name: form.name,
                email: form.email,
                password: SecretString::from(form.password),
                confirm_password: SecretString::from(form.confirm_password),
                accepted_terms: form.accepted_terms,
            };
            register(&HttpAuthApi, &input).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(email) => {
                    set_password.set(String::new());
                    set_confirm.set(String::new());
                    set_registered.set(Some(email));
                }
                Err(RegisterFailure::Invalid(errors)) => set_field_errors.set(errors),
                Err(RegisterFailure::Failed(err)) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_field_errors.set(FieldErrors::new());
        register_action.dispatch(RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            accepted_terms: accepted_terms.get_untracked(),
        });
    };

    let text_input = move |id: &'static str,
                           label: &'static str,
                           input_type: &'static str,
                           autocomplete: &'static str,
                           value: ReadSignal<String>,
                           set_value: WriteSignal<String>| {
        view! {
            <div>
                <label class=Theme::LABEL for=id>{label}</label>
                <input
                    id=id
                    type=input_type
                    class=Theme::INPUT
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |event| set_value.set(event_target_value(&event))
                />
                <FieldError errors=field_errors field=id />
            </div>
        }
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-6">
                <h1 class=Theme::HEADING>"Create an account"</h1>
                <Show
                    when=move || registered.get().is_some()
                    fallback=move || {
                        view! {
                            <form class="space-y-5" on:submit=on_submit novalidate>
                                {text_input("name", "Name", "text", "name", name, set_name)}
                                {text_input("email", "Email", "email", "email", email, set_email)}
                                <div>
                                    {text_input(
                                        "password",
                                        "Password",
                                        "password",
                                        "new-password",
                                        password,
                                        set_password,
                                    )}
                                    <PasswordStrength
                                        password=password
                                        policy=AccountScope::User.password_policy()
                                    />
                                </div>
                                {text_input(
                                    "confirm_password",
                                    "Confirm password",
                                    "password",
                                    "new-password",
                                    confirm,
                                    set_confirm,
                                )}
                                <div>
                                    <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || accepted_terms.get()
                                            on:change=move |event| {
                                                set_accepted_terms.set(event_target_checked(&event))
                                            }
                                        />
                                        "I accept the "
                                        <A href="/terms" {..} class=Theme::LINK>"terms"</A>
                                        " and "
                                        <A href="/privacy" {..} class=Theme::LINK>"privacy policy"</A>
                                    </label>
                                    <FieldError errors=field_errors field="terms" />
                                </div>
                                <Button button_type="submit" disabled=register_action.pending()>
                                    "Create account"
                                </Button>
                                {move || {
                                    register_action
                                        .pending()
                                        .get()
                                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                                }}
                            </form>
                        }
                    }
                >
                    {move || {
                        registered
                            .get()
                            .map(|email| {
                                let href = format!("/verify-email?email={}", encode_query(&email));
                                view! {
                                    <div class="space-y-4">
                                        <Alert
                                            kind=AlertKind::Success
                                            message="Account created. Check your inbox to verify your email before signing in."
                                                .to_string()
                                        />
                                        <A href=href {..} class=Theme::LINK>
                                            "Didn't get the email?"
                                        </A>
                                    </div>
                                }
                            })
                    }}
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
                <p class="text-sm text-gray-600 dark:text-gray-300">
                    "Already have an account? "
                    <A href="/login" {..} class=Theme::LINK>"Sign in"</A>
                </p>
            </div>
        </AppShell>
    }
}
