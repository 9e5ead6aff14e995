use crate::app_lib::theme::Theme;
use crate::features::forms::FieldErrors;
use leptos::prelude::*;

/// Inline message for one field of a form's `FieldErrors`.
#[component]
pub fn FieldError(errors: ReadSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|errors| {
            errors
                .get(field)
                .map(|message| view! { <p class=Theme::FIELD_ERROR>{message.to_string()}</p> })
        })
    }
}
