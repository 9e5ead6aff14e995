//! Sign-in for admin and user accounts. The backend reports lockout with 423,
//! unverified email with 403 + `EMAIL_NOT_VERIFIED`, and bad credentials with
//! 401 plus an optional remaining-attempts hint; each maps to its own
//! `LoginFailure` so the page can offer the right follow-up.

use crate::app_lib::AppError;
use crate::app_lib::errors::ErrorCode;
use crate::app_lib::session::{KeyValueStore, SessionStore, UserSession};
use crate::features::auth::client::{AccountScope, AuthApi};
use crate::features::auth::types::LoginRequest;
use crate::features::forms::{FieldErrors, check_email};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub enum LoginFailure {
    Invalid(FieldErrors),
    Locked { message: String },
    EmailNotVerified { email: String },
    InvalidCredentials { message: String, attempts_remaining: Option<u32> },
    Other(AppError),
}

impl LoginFailure {
    /// Text for the page-level alert; field errors render inline instead.
    pub fn message(&self) -> Option<String> {
        match self {
            LoginFailure::Invalid(_) => None,
            LoginFailure::Locked { message } => Some(message.clone()),
            LoginFailure::EmailNotVerified { .. } => {
                Some("Please verify your email before signing in.".to_string())
            }
            LoginFailure::InvalidCredentials {
                message,
                attempts_remaining: Some(attempts),
            } => Some(format!(
                "{message} {attempts} attempt{} remaining.",
                if *attempts == 1 { "" } else { "s" }
            )),
            LoginFailure::InvalidCredentials { message, .. } => Some(message.clone()),
            LoginFailure::Other(err) => Some(err.user_message()),
        }
    }
}

/// Who ended up signed in.
#[derive(Clone)]
pub enum SignedIn {
    Admin,
    User(UserSession),
}

pub fn validate_login(email: &str, password: &SecretString) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();
    let email = match check_email(email) {
        Ok(email) => email,
        Err(message) => {
            errors.insert("email", message);
            String::new()
        }
    };
    if password.expose_secret().trim().is_empty() {
        errors.insert("password", "Password is required");
    }
    errors.into_result(email)
}

pub fn classify_login_error(err: AppError, email: &str) -> LoginFailure {
    let Some(failure) = err.http() else {
        return LoginFailure::Other(err);
    };

    match (failure.status, failure.code) {
        (423, _) | (_, Some(ErrorCode::AccountLocked)) => LoginFailure::Locked {
            message: failure.message.clone(),
        },
        (403, Some(ErrorCode::EmailNotVerified)) => LoginFailure::EmailNotVerified {
            email: email.to_string(),
        },
        (401, _) | (_, Some(ErrorCode::InvalidCredentials)) => LoginFailure::InvalidCredentials {
            message: failure.message.clone(),
            attempts_remaining: failure.attempts_remaining,
        },
        _ => LoginFailure::Other(err),
    }
}

/// Validates, signs in, and persists the returned session.
pub async fn login<A: AuthApi, S: KeyValueStore>(
    api: &A,
    session: &SessionStore<S>,
    scope: AccountScope,
    email: &str,
    password: &SecretString,
) -> Result<SignedIn, LoginFailure> {
    let email = validate_login(email, password).map_err(LoginFailure::Invalid)?;
    let request = LoginRequest {
        email: email.clone(),
        password: password.expose_secret().to_string(),
    };

    let response = api
        .login(scope, &request)
        .await
        .map_err(|err| classify_login_error(err, &email))?;
    debug!(?scope, "signed in");

    match scope {
        AccountScope::Admin => {
            session
                .store_admin(&response.token)
                .map_err(LoginFailure::Other)?;
            Ok(SignedIn::Admin)
        }
        AccountScope::User => session
            .store_user(&response)
            .map(SignedIn::User)
            .map_err(LoginFailure::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginFailure, SignedIn, classify_login_error, login};
    use crate::app_lib::AppError;
    use crate::app_lib::errors::{ApiFailure, ErrorCode};
    use crate::app_lib::session::{MemoryStorage, SessionStore};
    use crate::features::auth::client::AccountScope;
    use crate::features::auth::testing::{Call, FakeAuthApi, http_error};
    use secrecy::SecretString;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[test]
    fn locked_account_is_reported() {
        let failure = classify_login_error(http_error(423, "Too many attempts"), "a@b.co");
        assert_eq!(
            failure,
            LoginFailure::Locked {
                message: "Too many attempts".to_string()
            }
        );
    }

    #[test]
    fn unverified_email_needs_code() {
        let coded = AppError::Http(
            ApiFailure::new(403, "Verify first").with_code(ErrorCode::EmailNotVerified),
        );
        assert_eq!(
            classify_login_error(coded, "a@b.co"),
            LoginFailure::EmailNotVerified {
                email: "a@b.co".to_string()
            }
        );

        let plain_forbidden = classify_login_error(http_error(403, "Forbidden"), "a@b.co");
        assert!(matches!(plain_forbidden, LoginFailure::Other(_)));
    }

    #[test]
    fn bad_credentials_carry_attempt_hint() {
        let err = AppError::Http(ApiFailure::new(401, "Invalid credentials.").with_attempts_remaining(2));
        let failure = classify_login_error(err, "a@b.co");
        assert_eq!(
            failure.message().as_deref(),
            Some("Invalid credentials. 2 attempts remaining.")
        );
    }

    #[test]
    fn transport_errors_pass_through() {
        let failure = classify_login_error(AppError::Network("offline".to_string()), "a@b.co");
        assert_eq!(failure, LoginFailure::Other(AppError::Network("offline".to_string())));
    }

    #[tokio::test]
    async fn invalid_input_skips_network() {
        let api = FakeAuthApi::default();
        let store = SessionStore::new(MemoryStorage::default());
        let result = login(&api, &store, AccountScope::User, "nope", &secret("")).await;

        let Err(LoginFailure::Invalid(errors)) = result else {
            panic!("expected field errors");
        };
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn admin_login_persists_admin_token_only() {
        let api = FakeAuthApi::default();
        let store = SessionStore::new(MemoryStorage::default());

        let result = login(&api, &store, AccountScope::Admin, "Root@Folio.studio", &secret("pw")).await;

        assert!(matches!(result, Ok(SignedIn::Admin)));
        assert_eq!(store.admin_token().as_deref(), Some("session-token"));
        assert_eq!(store.user_token(), None);
        assert_eq!(
            api.calls(),
            vec![Call::Login {
                scope: AccountScope::Admin,
                email: "root@folio.studio".to_string(),
                password: "pw".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn user_login_persists_user_session() {
        let api = FakeAuthApi::default();
        let store = SessionStore::new(MemoryStorage::default());

        let result = login(&api, &store, AccountScope::User, "ada@example.com", &secret("pw")).await;

        assert!(matches!(result, Ok(SignedIn::User(ref user)) if user.token == "session-token"));
        assert!(store.init().is_user());
        assert_eq!(store.admin_token(), None);
    }
}
