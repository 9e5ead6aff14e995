use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Button, FieldError, Spinner};
use crate::features::contact::client::send_message;
use crate::features::contact::types::{
    CONTACT_CONFIRMATION, ContactForm, ContactMessage, MESSAGE_MAX_CHARS, validate_contact,
};
use crate::features::forms::FieldErrors;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (sent, set_sent) = signal(false);

    let send_action = Action::new_local(move |message: &ContactMessage| {
        let message = message.clone();
        async move { send_message(&message).await }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(()) => {
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                    set_sent.set(true);
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_sent.set(false);

        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        match validate_contact(&form) {
            Ok(message) => {
                set_field_errors.set(FieldErrors::new());
                send_action.dispatch(message);
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    view! {
        <AppShell>
            <div class="mx-auto max-w-xl space-y-6">
                <h1 class=Theme::HEADING>"Contact us"</h1>
                <form class="space-y-5" on:submit=on_submit novalidate>
                    <div>
                        <label class=Theme::LABEL for="name">"Name"</label>
                        <input
                            id="name"
                            class=Theme::INPUT
                            autocomplete="name"
                            prop:value=move || name.get()
                            on:input=move |event| set_name.set(event_target_value(&event))
                        />
                        <FieldError errors=field_errors field="name" />
                    </div>
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
                        <FieldError errors=field_errors field="email" />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="subject">"Subject"</label>
                        <input
                            id="subject"
                            class=Theme::INPUT
                            prop:value=move || subject.get()
                            on:input=move |event| set_subject.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="message">"Message"</label>
                        <textarea
                            id="message"
                            rows="6"
                            class=Theme::INPUT
                            prop:value=move || message.get()
                            on:input=move |event| set_message.set(event_target_value(&event))
                        ></textarea>
                        <p class="mt-1 text-right text-xs text-gray-500 dark:text-gray-400">
                            {move || {
                                format!(
                                    "{} / {MESSAGE_MAX_CHARS}",
                                    message.with(|message| message.chars().count()),
                                )
                            }}
                        </p>
                        <FieldError errors=field_errors field="message" />
                    </div>
                    <Button button_type="submit" disabled=send_action.pending()>
                        "Send message"
                    </Button>
                    {move || {
                        send_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                </form>
                <Show when=move || sent.get()>
                    <Alert kind=AlertKind::Success message=CONTACT_CONFIRMATION.to_string() />
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
            </div>
        </AppShell>
    }
}
