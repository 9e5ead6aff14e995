//! Error types shared by every API client and form. HTTP failures keep the
//! status, a sanitized message, and the structured `code` the backend sends so
//! flows can branch on error kind instead of message text.

use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("{0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({}): {}", .0.status, .0.message)]
    Http(ApiFailure),
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Returns the HTTP failure details when the server answered with an error.
    pub fn http(&self) -> Option<&ApiFailure> {
        match self {
            AppError::Http(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.http().map(|failure| failure.status)
    }

    /// Message safe to show in an alert. Validation and HTTP messages are
    /// already user-facing; everything else keeps its category prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message) | AppError::Config(message) => message.clone(),
            AppError::Http(failure) => failure.message.clone(),
            _ => self.to_string(),
        }
    }
}

/// Error codes the backend attaches to failure bodies.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    TokenExpired,
    TokenInvalid,
    EmailNotVerified,
    AccountLocked,
    InvalidCredentials,
    #[serde(other)]
    Unknown,
}

/// Details of a non-success HTTP response.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiFailure {
    pub status: u16,
    pub message: String,
    pub code: Option<ErrorCode>,
    pub attempts_remaining: Option<u32>,
}

impl ApiFailure {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
            attempts_remaining: None,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_attempts_remaining(mut self, attempts: u32) -> Self {
        self.attempts_remaining = Some(attempts);
        self
    }

    /// Token expiry signal. The structured code wins; the message is only
    /// consulted when the backend did not send a code at all.
    pub fn signals_token_expiry(&self) -> bool {
        match self.code {
            Some(ErrorCode::TokenExpired) => true,
            Some(_) => false,
            None => self.message.to_lowercase().contains("expir"),
        }
    }
}

impl From<ApiFailure> for AppError {
    fn from(failure: ApiFailure) -> Self {
        AppError::Http(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiFailure, AppError, ErrorCode};

    #[test]
    fn http_error_display_includes_status_and_message() {
        let err = AppError::Http(ApiFailure::new(500, "boom"));
        assert_eq!(err.to_string(), "Request failed (500): boom");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn expiry_prefers_structured_code() {
        let coded = ApiFailure::new(400, "Bad request").with_code(ErrorCode::TokenExpired);
        assert!(coded.signals_token_expiry());

        let other_code = ApiFailure::new(400, "Token expired").with_code(ErrorCode::Unknown);
        assert!(!other_code.signals_token_expiry());

        let invalid = ApiFailure::new(400, "Token expired").with_code(ErrorCode::TokenInvalid);
        assert!(!invalid.signals_token_expiry());
    }

    #[test]
    fn expiry_falls_back_to_message_without_code() {
        assert!(ApiFailure::new(400, "Reset link EXPIRED").signals_token_expiry());
        assert!(ApiFailure::new(400, "token has expired").signals_token_expiry());
        assert!(!ApiFailure::new(400, "Password too weak").signals_token_expiry());
    }

    #[test]
    fn unknown_codes_deserialize_to_unknown() {
        let code: ErrorCode = serde_json::from_str("\"SOMETHING_NEW\"").unwrap_or(ErrorCode::TokenExpired);
        assert_eq!(code, ErrorCode::Unknown);
        let code: Result<ErrorCode, _> = serde_json::from_str("\"EMAIL_NOT_VERIFIED\"");
        assert_eq!(code.ok(), Some(ErrorCode::EmailNotVerified));
    }

    #[test]
    fn user_message_hides_category_for_validation() {
        let err = AppError::Validation("Enter a valid email address".to_string());
        assert_eq!(err.user_message(), "Enter a valid email address");
        let err = AppError::Network("offline".to_string());
        assert_eq!(err.user_message(), "Network error: offline");
    }
}
