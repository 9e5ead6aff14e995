//! Resending the email-verification link. Shares the resend cooldown with
//! the password reset flow and, like it, never reveals whether the address
//! belongs to an account.

use crate::features::auth::client::AuthApi;
use crate::features::auth::cooldown::ResendCooldown;
use crate::features::auth::types::ResendVerificationRequest;
use crate::features::forms::check_email;
use tracing::debug;

pub const RESEND_CONFIRMATION: &str = "If that email is registered and unverified, a new link is on the way.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResendVerificationError {
    Invalid(&'static str),
    CoolingDown(u32),
}

/// Validates the address and requests a new verification email.
/// Returns the restarted cooldown.
pub async fn resend_verification<A: AuthApi>(
    api: &A,
    email: &str,
    cooldown: ResendCooldown,
) -> Result<ResendCooldown, ResendVerificationError> {
    let email = check_email(email).map_err(ResendVerificationError::Invalid)?;
    if cooldown.is_active() {
        return Err(ResendVerificationError::CoolingDown(cooldown.remaining()));
    }

    let request = ResendVerificationRequest { email };
    if let Err(err) = api.resend_verification(&request).await {
        debug!(status = err.status(), "resend verification failed");
    }

    Ok(ResendCooldown::started())
}

#[cfg(test)]
mod tests {
    use super::{ResendVerificationError, resend_verification};
    use crate::features::auth::cooldown::ResendCooldown;
    use crate::features::auth::testing::{Call, FakeAuthApi, http_error};
    use crate::features::forms::EMAIL_REQUIRED;

    #[tokio::test]
    async fn sends_and_starts_cooldown() {
        let api = FakeAuthApi::default();
        let result = resend_verification(&api, "Ada@Example.com", ResendCooldown::idle()).await;
        assert_eq!(result.map(|c| c.remaining()), Ok(60));
        assert_eq!(
            api.calls(),
            vec![Call::ResendVerification {
                email: "ada@example.com".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn failure_is_indistinguishable_from_success() {
        let api = FakeAuthApi {
            resend: Err(http_error(404, "User not found")),
            ..FakeAuthApi::default()
        };
        let result = resend_verification(&api, "ghost@example.com", ResendCooldown::idle()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn cooldown_and_validation_block_the_request() {
        let api = FakeAuthApi::default();
        assert_eq!(
            resend_verification(&api, "", ResendCooldown::idle()).await,
            Err(ResendVerificationError::Invalid(EMAIL_REQUIRED))
        );
        assert_eq!(
            resend_verification(&api, "ada@example.com", ResendCooldown::started()).await,
            Err(ResendVerificationError::CoolingDown(60))
        );
        assert!(api.calls().is_empty());
    }
}
