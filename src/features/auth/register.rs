//! User registration. Uses the user password policy and ends on a "check your
//! email" screen; the account cannot sign in until the address is verified.

use crate::app_lib::AppError;
use crate::features::auth::client::AuthApi;
use crate::features::auth::policy::PasswordPolicy;
use crate::features::auth::types::RegisterRequest;
use crate::features::forms::{FieldErrors, check_email};
use secrecy::{ExposeSecret, SecretString};

const MAX_NAME_CHARS: usize = 80;

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub accepted_terms: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RegisterFailure {
    Invalid(FieldErrors),
    Failed(AppError),
}

pub fn validate_registration(input: &RegisterInput) -> Result<RegisterRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = input.name.trim();
    if name.is_empty() {
        errors.insert("name", "Name is required");
    } else if name.chars().count() > MAX_NAME_CHARS {
        errors.insert("name", format!("Name must be at most {MAX_NAME_CHARS} characters"));
    }

    let email = check_email(&input.email).unwrap_or_else(|message| {
        errors.insert("email", message);
        String::new()
    });

    if let Err(password_errors) = PasswordPolicy::USER.check_new_password(
        input.password.expose_secret(),
        input.confirm_password.expose_secret(),
    ) {
        for field in ["password", "confirm_password"] {
            if let Some(message) = password_errors.get(field) {
                errors.insert(field, message.to_string());
            }
        }
    }

    if !input.accepted_terms {
        errors.insert("terms", "You must accept the terms of service");
    }

    errors.into_result(RegisterRequest {
        name: name.to_string(),
        email,
        password: input.password.expose_secret().to_string(),
    })
}

/// Creates the account and returns the address the verification mail went to.
pub async fn register<A: AuthApi>(api: &A, input: &RegisterInput) -> Result<String, RegisterFailure> {
    let request = validate_registration(input).map_err(RegisterFailure::Invalid)?;
    api.register(&request)
        .await
        .map_err(RegisterFailure::Failed)?;
    Ok(request.email)
}

#[cfg(test)]
mod tests {
    use super::{RegisterFailure, RegisterInput, register, validate_registration};
    use crate::features::auth::testing::{Call, FakeAuthApi, http_error};
    use secrecy::SecretString;

    fn input(name: &str, email: &str, password: &str, confirm: &str, terms: bool) -> RegisterInput {
        RegisterInput {
            name: name.to_string(),
            email: email.to_string(),
            password: SecretString::from(password.to_string()),
            confirm_password: SecretString::from(confirm.to_string()),
            accepted_terms: terms,
        }
    }

    #[test]
    fn collects_every_field_error() {
        let Err(errors) = validate_registration(&input(" ", "bad", "short", "other", false)) else {
            panic!("expected errors");
        };
        for field in ["name", "email", "password", "confirm_password", "terms"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn long_names_are_rejected() {
        let name = "x".repeat(81);
        let result = validate_registration(&input(&name, "a@b.co", "Passw0rd", "Passw0rd", true));
        assert!(result.is_err_and(|errors| errors.get("name").is_some()));
    }

    #[tokio::test]
    async fn valid_registration_is_sent_once() {
        let api = FakeAuthApi::default();
        let result = register(&api, &input(" Ada ", "Ada@Example.com", "Passw0rd", "Passw0rd", true)).await;
        assert_eq!(result, Ok("ada@example.com".to_string()));
        assert_eq!(
            api.calls(),
            vec![Call::Register {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn server_conflict_is_surfaced() {
        let api = FakeAuthApi {
            register: Err(http_error(409, "Email already registered")),
            ..FakeAuthApi::default()
        };
        let result = register(&api, &input("Ada", "ada@example.com", "Passw0rd", "Passw0rd", true)).await;
        assert!(matches!(result, Err(RegisterFailure::Failed(err)) if err.status() == Some(409)));
    }
}
