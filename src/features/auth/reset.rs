//! Password reset flow shared by admin and user accounts.
//!
//! Flow Overview: the visitor requests a link for an email address, the
//! backend mails a single-use `token`, the reset page pre-checks the token and
//! then posts the new password with it. The client never creates or stores the
//! token; it only relays it from the URL to the final call.
//!
//! Two properties hold throughout:
//! - Responses never reveal whether an email is registered. A 404 from
//!   `forgot-password` is reported exactly like a success, and resend failures
//!   are silent.
//! - Expiry is a state transition (`TokenInvalid`), never a field error.

use crate::app_lib::AppError;
use crate::features::auth::client::{AccountScope, AuthApi};
use crate::features::auth::cooldown::ResendCooldown;
use crate::features::auth::types::{
    ForgotPasswordRequest, ResetPasswordRequest, ValidateResetTokenRequest,
};
use crate::features::forms::{FieldErrors, check_email};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

/// Why a reset request did not reach the confirmation screen.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestResetError {
    /// Rejected locally; nothing was sent.
    Invalid(&'static str),
    /// The backend failed in a way that is not enumeration sensitive.
    Failed(AppError),
}

/// Asks the backend to mail a reset link.
///
/// Returns the normalized address on success; the caller shows the neutral
/// "check your inbox" screen and starts a `ResendCooldown`.
pub async fn request_reset<A: AuthApi>(
    api: &A,
    scope: AccountScope,
    email: &str,
) -> Result<String, RequestResetError> {
    let email = check_email(email).map_err(RequestResetError::Invalid)?;
    let request = ForgotPasswordRequest {
        email: email.clone(),
    };

    match api.forgot_password(scope, &request).await {
        Ok(()) => Ok(email),
        Err(err) if err.status() == Some(404) => Ok(email),
        Err(err) => Err(RequestResetError::Failed(err)),
    }
}

/// Re-sends the reset email when the cooldown allows it.
///
/// Returns the restarted cooldown, or `None` when the cooldown was still
/// running and nothing was sent. The outcome of the request itself is never
/// surfaced.
pub async fn resend_reset<A: AuthApi>(
    api: &A,
    scope: AccountScope,
    email: &str,
    cooldown: ResendCooldown,
) -> Option<ResendCooldown> {
    if cooldown.is_active() {
        return None;
    }

    let request = ForgotPasswordRequest {
        email: email.to_string(),
    };
    if let Err(err) = api.forgot_password(scope, &request).await {
        debug!(status = err.status(), "resend of reset email failed");
    }

    Some(ResendCooldown::started())
}

/// Screens of the reset page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetPhase {
    CheckingToken,
    /// Missing or expired link. Terminal apart from the link back to the
    /// request page.
    TokenInvalid,
    /// `degraded` is set when the pre-check failed or rejected the token and
    /// the real verdict is left to the final submit.
    FormReady { token: String, degraded: bool },
    Done,
}

impl ResetPhase {
    pub fn token(&self) -> Option<&str> {
        match self {
            ResetPhase::FormReady { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Applies the outcome of a submit to the current phase.
    #[must_use]
    pub fn after_submit(self, outcome: &SubmitOutcome) -> Self {
        match (self, outcome) {
            (ResetPhase::FormReady { .. }, SubmitOutcome::Done) => ResetPhase::Done,
            (ResetPhase::FormReady { .. }, SubmitOutcome::TokenInvalid) => {
                ResetPhase::TokenInvalid
            }
            (phase, _) => phase,
        }
    }
}

/// Pre-checks the token taken from the `token` query parameter.
pub async fn check_token<A: AuthApi>(
    api: &A,
    scope: AccountScope,
    token: Option<String>,
) -> ResetPhase {
    let Some(token) = token
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
    else {
        return ResetPhase::TokenInvalid;
    };

    let request = ValidateResetTokenRequest {
        token: token.clone(),
    };

    // The pre-check only decides whether the form is shown normally. Any
    // rejection is deferred to the submit, which is authoritative.
    match api.validate_reset_token(scope, &request).await {
        Ok(response) if response.valid != Some(false) => ResetPhase::FormReady {
            token,
            degraded: false,
        },
        Ok(_) => {
            warn!("reset token pre-check reported the link as unusable, deferring to submit");
            ResetPhase::FormReady {
                token,
                degraded: true,
            }
        }
        Err(err) => {
            warn!(
                status = err.status(),
                "reset token pre-check failed, deferring to submit"
            );
            ResetPhase::FormReady {
                token,
                degraded: true,
            }
        }
    }
}

/// Result of submitting the new password.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Done,
    TokenInvalid,
    /// Local validation failed; nothing was sent.
    Rejected(FieldErrors),
    Failed(AppError),
}

/// Validates the new password locally and, when it passes, finalizes the reset.
pub async fn submit_new_password<A: AuthApi>(
    api: &A,
    scope: AccountScope,
    token: &str,
    password: &SecretString,
    confirm: &SecretString,
) -> SubmitOutcome {
    let policy = scope.password_policy();
    if let Err(errors) =
        policy.check_new_password(password.expose_secret(), confirm.expose_secret())
    {
        return SubmitOutcome::Rejected(errors);
    }

    let request = ResetPasswordRequest {
        token: token.to_string(),
        new_password: password.expose_secret().to_string(),
    };

    match api.reset_password(scope, &request).await {
        Ok(()) => SubmitOutcome::Done,
        Err(AppError::Http(failure)) if failure.signals_token_expiry() => {
            SubmitOutcome::TokenInvalid
        }
        Err(err) => SubmitOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        RequestResetError, ResetPhase, SubmitOutcome, check_token, request_reset, resend_reset,
        submit_new_password,
    };
    use crate::app_lib::AppError;
    use crate::app_lib::errors::{ApiFailure, ErrorCode};
    use crate::features::auth::client::AccountScope;
    use crate::features::auth::cooldown::ResendCooldown;
    use crate::features::auth::testing::{Call, FakeAuthApi, http_error};
    use crate::features::auth::types::ValidateResetTokenResponse;
    use crate::features::forms::EMAIL_INVALID;
    use secrecy::SecretString;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    /// Runs the page's sequence: pre-check the token, submit with the token
    /// the form holds, then apply the outcome to the phase.
    async fn reset_with(
        api: &FakeAuthApi,
        scope: AccountScope,
        token: Option<&str>,
        password: &str,
        confirm: &str,
    ) -> (ResetPhase, Option<SubmitOutcome>) {
        let phase = check_token(api, scope, token.map(str::to_string)).await;
        let Some(token) = phase.token().map(str::to_string) else {
            return (phase, None);
        };
        let outcome =
            submit_new_password(api, scope, &token, &secret(password), &secret(confirm)).await;
        (phase.after_submit(&outcome), Some(outcome))
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_without_network() {
        let api = FakeAuthApi::default();
        let result = request_reset(&api, AccountScope::Admin, "not-an-email").await;
        assert_eq!(result, Err(RequestResetError::Invalid(EMAIL_INVALID)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_and_known_email_look_the_same() {
        let known = FakeAuthApi::default();
        let unknown = FakeAuthApi {
            forgot: Err(http_error(404, "No account with that email")),
            ..FakeAuthApi::default()
        };

        let known_result = request_reset(&known, AccountScope::User, "Ada@Example.com").await;
        let unknown_result = request_reset(&unknown, AccountScope::User, "Ada@Example.com").await;

        assert_eq!(known_result, Ok("ada@example.com".to_string()));
        assert_eq!(known_result, unknown_result);
        assert_eq!(
            unknown.calls(),
            vec![Call::ForgotPassword {
                scope: AccountScope::User,
                email: "ada@example.com".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn server_errors_surface_as_generic_failure() {
        let api = FakeAuthApi {
            forgot: Err(http_error(500, "boom")),
            ..FakeAuthApi::default()
        };
        let result = request_reset(&api, AccountScope::Admin, "root@folio.studio").await;
        assert!(matches!(result, Err(RequestResetError::Failed(err)) if err.status() == Some(500)));
    }

    #[tokio::test]
    async fn resend_is_blocked_during_cooldown() {
        let api = FakeAuthApi::default();
        let blocked = resend_reset(&api, AccountScope::User, "ada@example.com", ResendCooldown::started()).await;
        assert_eq!(blocked, None);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn resend_restarts_cooldown_even_on_failure() {
        let api = FakeAuthApi {
            forgot: Err(AppError::Network("offline".to_string())),
            ..FakeAuthApi::default()
        };
        let restarted = resend_reset(&api, AccountScope::User, "ada@example.com", ResendCooldown::idle()).await;
        assert_eq!(restarted.map(|c| c.remaining()), Some(60));
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn missing_token_is_invalid_without_network() {
        let api = FakeAuthApi::default();
        assert_eq!(check_token(&api, AccountScope::User, None).await, ResetPhase::TokenInvalid);
        assert_eq!(
            check_token(&api, AccountScope::User, Some("  ".to_string())).await,
            ResetPhase::TokenInvalid
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn valid_token_shows_form() {
        let api = FakeAuthApi::default();
        let phase = check_token(&api, AccountScope::Admin, Some("abc123".to_string())).await;
        assert_eq!(
            phase,
            ResetPhase::FormReady {
                token: "abc123".to_string(),
                degraded: false
            }
        );
    }

    #[tokio::test]
    async fn unreachable_validator_still_shows_form() {
        let api = FakeAuthApi {
            validate: Err(AppError::Network("Unable to reach the server".to_string())),
            ..FakeAuthApi::default()
        };
        let phase = check_token(&api, AccountScope::Admin, Some("abc123".to_string())).await;
        assert_eq!(
            phase,
            ResetPhase::FormReady {
                token: "abc123".to_string(),
                degraded: true
            }
        );
    }

    #[tokio::test]
    async fn unstructured_rejection_defers_to_submit() {
        let api = FakeAuthApi {
            validate: Err(http_error(400, "Invalid or expired token")),
            ..FakeAuthApi::default()
        };
        let phase = check_token(&api, AccountScope::User, Some("abc123".to_string())).await;
        assert!(matches!(phase, ResetPhase::FormReady { degraded: true, .. }));
    }

    #[tokio::test]
    async fn structured_rejection_defers_to_submit() {
        let coded = FakeAuthApi {
            validate: Err(AppError::Http(
                ApiFailure::new(400, "Bad token").with_code(ErrorCode::TokenExpired),
            )),
            ..FakeAuthApi::default()
        };
        let flagged = FakeAuthApi {
            validate: Ok(ValidateResetTokenResponse { valid: Some(false) }),
            ..FakeAuthApi::default()
        };

        for api in [coded, flagged] {
            let phase = check_token(&api, AccountScope::User, Some("abc123".to_string())).await;
            assert_eq!(
                phase,
                ResetPhase::FormReady {
                    token: "abc123".to_string(),
                    degraded: true
                }
            );
        }
    }

    #[tokio::test]
    async fn admin_reset_posts_token_and_password() {
        let api = FakeAuthApi::default();

        let (phase, outcome) =
            reset_with(&api, AccountScope::Admin, Some("abc123"), "Sh1vam!Test", "Sh1vam!Test").await;

        assert_eq!(outcome, Some(SubmitOutcome::Done));
        assert_eq!(phase, ResetPhase::Done);
        assert_eq!(
            api.calls().last(),
            Some(&Call::ResetPassword {
                scope: AccountScope::Admin,
                token: "abc123".to_string(),
                new_password: "Sh1vam!Test".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn mismatched_confirmation_never_hits_network() {
        let api = FakeAuthApi::default();

        let (phase, outcome) =
            reset_with(&api, AccountScope::Admin, Some("abc123"), "Sh1vam!Test", "Sh1vam!Tess").await;

        assert!(matches!(outcome, Some(SubmitOutcome::Rejected(ref errors)) if errors.get("confirm_password").is_some()));
        assert!(matches!(phase, ResetPhase::FormReady { .. }));
        assert!(!api.calls().iter().any(|call| matches!(call, Call::ResetPassword { .. })));
    }

    #[tokio::test]
    async fn weak_password_is_rejected_locally() {
        let api = FakeAuthApi::default();
        let (_, outcome) =
            reset_with(&api, AccountScope::Admin, Some("abc123"), "password1", "password1").await;
        assert!(matches!(outcome, Some(SubmitOutcome::Rejected(_))));
        assert!(!api.calls().iter().any(|call| matches!(call, Call::ResetPassword { .. })));
    }

    #[tokio::test]
    async fn expiry_message_moves_to_invalid_state() {
        for message in ["Reset token has expired", "TOKEN EXPIRED", "Link Expirou"] {
            let api = FakeAuthApi {
                reset: Err(http_error(400, message)),
                ..FakeAuthApi::default()
            };

            let (phase, outcome) =
                reset_with(&api, AccountScope::User, Some("abc123"), "Passw0rd", "Passw0rd").await;

            assert_eq!(outcome, Some(SubmitOutcome::TokenInvalid));
            assert_eq!(phase, ResetPhase::TokenInvalid);
        }
    }

    #[tokio::test]
    async fn rejected_precheck_then_expired_submit_ends_invalid() {
        let api = FakeAuthApi {
            validate: Err(AppError::Http(
                ApiFailure::new(400, "Bad token").with_code(ErrorCode::TokenExpired),
            )),
            reset: Err(AppError::Http(
                ApiFailure::new(400, "Bad token").with_code(ErrorCode::TokenExpired),
            )),
            ..FakeAuthApi::default()
        };

        let (phase, outcome) =
            reset_with(&api, AccountScope::User, Some("abc123"), "Passw0rd", "Passw0rd").await;

        assert_eq!(outcome, Some(SubmitOutcome::TokenInvalid));
        assert_eq!(phase, ResetPhase::TokenInvalid);
    }

    #[tokio::test]
    async fn expiry_code_moves_to_invalid_state() {
        let api = FakeAuthApi {
            reset: Err(AppError::Http(
                ApiFailure::new(410, "Gone").with_code(ErrorCode::TokenExpired),
            )),
            ..FakeAuthApi::default()
        };
        let (phase, outcome) =
            reset_with(&api, AccountScope::User, Some("abc123"), "Passw0rd", "Passw0rd").await;
        assert_eq!(outcome, Some(SubmitOutcome::TokenInvalid));
        assert_eq!(phase, ResetPhase::TokenInvalid);
    }

    #[tokio::test]
    async fn invalid_token_code_at_submit_is_a_dismissible_error() {
        let api = FakeAuthApi {
            reset: Err(AppError::Http(
                ApiFailure::new(400, "Token is not valid").with_code(ErrorCode::TokenInvalid),
            )),
            ..FakeAuthApi::default()
        };
        let (phase, outcome) =
            reset_with(&api, AccountScope::User, Some("abc123"), "Passw0rd", "Passw0rd").await;
        assert!(matches!(outcome, Some(SubmitOutcome::Failed(_))));
        assert!(matches!(phase, ResetPhase::FormReady { .. }));
    }

    #[tokio::test]
    async fn other_failures_keep_form_editable() {
        let api = FakeAuthApi {
            reset: Err(http_error(500, "Internal error")),
            ..FakeAuthApi::default()
        };

        let (phase, outcome) =
            reset_with(&api, AccountScope::User, Some("abc123"), "Passw0rd", "Passw0rd").await;

        assert!(matches!(outcome, Some(SubmitOutcome::Failed(_))));
        assert!(matches!(phase, ResetPhase::FormReady { .. }));
    }

    #[tokio::test]
    async fn missing_token_never_reaches_submit() {
        let api = FakeAuthApi::default();

        let (phase, outcome) = reset_with(&api, AccountScope::User, None, "Passw0rd", "Passw0rd").await;

        assert_eq!(outcome, None);
        assert_eq!(phase, ResetPhase::TokenInvalid);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn outcomes_only_move_a_ready_form() {
        let ready = ResetPhase::FormReady {
            token: "abc123".to_string(),
            degraded: false,
        };
        assert_eq!(ready.clone().after_submit(&SubmitOutcome::Done), ResetPhase::Done);
        assert_eq!(
            ready.clone().after_submit(&SubmitOutcome::Failed(AppError::Network("offline".to_string()))),
            ready
        );
        assert_eq!(
            ResetPhase::TokenInvalid.after_submit(&SubmitOutcome::Done),
            ResetPhase::TokenInvalid
        );
    }
}
