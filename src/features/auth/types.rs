//! Request and response types for account API calls. These payloads carry
//! passwords, reset tokens, and session tokens, so they must never be logged;
//! the types holding secrets deliberately do not implement `Debug`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Serialize)]
pub struct ValidateResetTokenRequest {
    pub token: String,
}

/// Body of a successful token check. A missing `valid` flag means the backend
/// only signals validity through the status code.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ValidateResetTokenResponse {
    #[serde(default)]
    pub valid: Option<bool>,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session issued by `/login` or the OAuth callback. Admin logins answer with
/// an `admin` object instead of `user`.
#[derive(Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default, alias = "admin")]
    pub user: Option<UserProfile>,
}

#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Public profile cached in the `user` storage key for display purposes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::{LoginResponse, ResetPasswordRequest, UserProfile};

    #[test]
    fn reset_password_request_uses_camel_case() {
        let request = ResetPasswordRequest {
            token: "abc123".to_string(),
            new_password: "Sh1vam!Test".to_string(),
        };
        let json = serde_json::to_value(&request).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({ "token": "abc123", "newPassword": "Sh1vam!Test" }))
        );
    }

    #[test]
    fn login_response_accepts_admin_alias() {
        let body = r#"{"token":"t","admin":{"_id":"1","email":"root@folio.studio"}}"#;
        let parsed: Option<LoginResponse> = serde_json::from_str(body).ok();
        let user = parsed.and_then(|login| login.user);
        assert_eq!(user.map(|profile| profile.email), Some("root@folio.studio".to_string()));
    }

    #[test]
    fn user_profile_reads_mongo_id_and_flags() {
        let body = r#"{"_id":"64f","name":"Ada","email":"ada@example.com","isVerified":true}"#;
        let profile: Option<UserProfile> = serde_json::from_str(body).ok();
        assert_eq!(profile.as_ref().map(|p| p.id.as_str()), Some("64f"));
        assert_eq!(profile.map(|p| p.is_verified), Some(true));
    }
}
