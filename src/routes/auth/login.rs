use crate::app_lib::config::AppConfig;
use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, FieldError, Spinner};
use crate::features::auth::client::{AccountScope, HttpAuthApi};
use crate::features::auth::login::{LoginFailure, SignedIn, login};
use crate::features::auth::oauth::OAuthProvider;
use crate::features::auth::state::use_auth;
use crate::features::forms::FieldErrors;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use secrecy::SecretString;

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage(scope: AccountScope) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (unverified_email, set_unverified_email) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let password = SecretString::from(input.password);
            login(&HttpAuthApi, &auth.store(), scope, &input.email, &password).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(signed_in) => {
                    auth.reload();
                    let target = match signed_in {
                        SignedIn::Admin => "/admin",
                        SignedIn::User(_) => "/",
                    };
                    navigate(target, Default::default());
                }
                Err(LoginFailure::Invalid(errors)) => set_field_errors.set(errors),
                Err(failure) => {
                    if let LoginFailure::EmailNotVerified { email } = &failure {
                        set_unverified_email.set(Some(email.clone()));
                    }
                    set_error.set(failure.message());
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_unverified_email.set(None);
        set_field_errors.set(FieldErrors::new());

        login_action.dispatch(LoginInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    let title = match scope {
        AccountScope::Admin => "Admin sign in",
        AccountScope::User => "Sign in",
    };
    let providers: Vec<OAuthProvider> = match scope {
        AccountScope::Admin => Vec::new(),
        AccountScope::User => OAuthProvider::ALL
            .into_iter()
            .filter(|provider| config.oauth_enabled(*provider))
            .collect(),
    };
    let api_base_url = config.api_base_url.clone();

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto space-y-6">
                <h1 class=Theme::HEADING>{title}</h1>
                <form class="space-y-5" on:submit=on_submit novalidate>
                    <div>
                        <label class=Theme::LABEL for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            class=Theme::INPUT
                            autocomplete="email"
                            placeholder="name@example.com"
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                        <FieldError errors=field_errors field="email" />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="current-password"
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                        <FieldError errors=field_errors field="password" />
                    </div>
                    <div class="flex items-center justify-between">
                        <Button button_type="submit" disabled=login_action.pending()>
                            "Sign in"
                        </Button>
                        <A href=scope.forgot_password_route() {..} class=Theme::LINK>
                            "Forgot password?"
                        </A>
                    </div>
                    {move || {
                        login_action
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
                    {move || {
                        unverified_email
                            .get()
                            .map(|email| {
                                let href = format!("/verify-email?email={}", encode_query(&email));
                                view! {
                                    <A href=href {..} class=Theme::LINK>
                                        "Resend the verification email"
                                    </A>
                                }
                            })
                    }}
                </form>
                {(scope == AccountScope::User)
                    .then(|| {
                        view! {
                            <div class="space-y-3">
                                {providers
                                    .into_iter()
                                    .map(|provider| {
                                        view! {
                                            <a
                                                href=provider.authorize_url(&api_base_url)
                                                class="flex w-full items-center justify-center rounded-lg border border-gray-300 px-5 py-2.5 text-sm font-medium text-gray-900 hover:bg-gray-100 dark:border-gray-600 dark:text-white dark:hover:bg-gray-700"
                                            >
                                                {provider.label()}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                                <p class="text-sm text-gray-600 dark:text-gray-300">
                                    "New here? "
                                    <A href="/register" {..} class=Theme::LINK>
                                        "Create an account"
                                    </A>
                                </p>
                            </div>
                        }
                    })}
            </div>
        </AppShell>
    }
}

/// Percent-encodes a query value.
pub(crate) fn encode_query(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}
