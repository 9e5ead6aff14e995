use crate::features::forms::{FieldErrors, check_email};
use serde::Serialize;

pub const MESSAGE_MAX_CHARS: usize = 5000;
pub const CONTACT_CONFIRMATION: &str = "Thanks for reaching out. We'll get back to you soon.";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub fn validate_contact(form: &ContactForm) -> Result<ContactMessage, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.insert("name", "Name is required");
    }

    let email = check_email(&form.email).unwrap_or_else(|message| {
        errors.insert("email", message);
        String::new()
    });

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert("message", "Message is required");
    } else if message.chars().count() > MESSAGE_MAX_CHARS {
        errors.insert(
            "message",
            format!("Message must be at most {MESSAGE_MAX_CHARS} characters"),
        );
    }

    errors.into_result(ContactMessage {
        name: name.to_string(),
        email,
        subject: crate::features::forms::optional_text(&form.subject),
        message: message.to_string(),
    })
}
