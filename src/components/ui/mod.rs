mod alert;
mod button;
mod field_error;
mod password_strength;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use field_error::FieldError;
pub(crate) use password_strength::PasswordStrength;
pub(crate) use spinner::Spinner;
