//! OAuth handoff. The backend owns the provider dance; the client only
//! redirects to `/api/users/{provider}` and later reads the session the
//! backend appends to the callback URL.

use crate::app_lib::api::build_url_with_base;
use crate::features::auth::client::AccountScope;
use crate::features::auth::types::LoginResponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 2] = [OAuthProvider::Google, OAuthProvider::GitHub];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "google" => Some(OAuthProvider::Google),
            "github" => Some(OAuthProvider::GitHub),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OAuthProvider::Google => "Continue with Google",
            OAuthProvider::GitHub => "Continue with GitHub",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::GitHub => "github",
        }
    }

    /// Full URL the browser navigates to in order to start the handoff.
    pub fn authorize_url(self, api_base_url: &str) -> String {
        build_url_with_base(api_base_url, &AccountScope::User.endpoint(self.slug()))
    }
}

/// Parameters the backend appends to `/oauth/callback`.
pub fn session_from_callback(
    token: Option<String>,
    refresh_token: Option<String>,
    error: Option<String>,
) -> Result<LoginResponse, String> {
    if let Some(error) = error.filter(|error| !error.trim().is_empty()) {
        return Err(error.trim().to_string());
    }

    let token = token
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| "Sign-in was cancelled or did not complete.".to_string())?;

    Ok(LoginResponse {
        token,
        refresh_token: refresh_token.filter(|value| !value.trim().is_empty()),
        user: None,
    })
}

#[cfg(test)]
mod tests {
    use super::{OAuthProvider, session_from_callback};

    #[test]
    fn authorize_url_targets_user_endpoint() {
        assert_eq!(
            OAuthProvider::Google.authorize_url("https://api.folio.studio/"),
            "https://api.folio.studio/api/users/google"
        );
        assert_eq!(OAuthProvider::GitHub.authorize_url(""), "/api/users/github");
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(OAuthProvider::from_name(" GitHub "), Some(OAuthProvider::GitHub));
        assert_eq!(OAuthProvider::from_name("facebook"), None);
    }

    #[test]
    fn callback_error_wins_over_token() {
        let result = session_from_callback(
            Some("t".to_string()),
            None,
            Some("access_denied".to_string()),
        );
        assert_eq!(result.err().as_deref(), Some("access_denied"));
    }

    #[test]
    fn callback_requires_token() {
        assert!(session_from_callback(None, None, None).is_err());
        let session = session_from_callback(Some(" t ".to_string()), Some(" ".to_string()), None);
        let session = session.ok();
        assert_eq!(session.as_ref().map(|s| s.token.as_str()), Some("t"));
        assert_eq!(session.and_then(|s| s.refresh_token), None);
    }
}
