//! Client wrappers for the account API. Admin and user accounts expose the
//! same endpoints under different prefixes, so every call takes an
//! `AccountScope`. Flows depend on the `AuthApi` trait rather than on the
//! transport so their state handling can be exercised without a browser.

use crate::app_lib::AppError;
use crate::features::auth::policy::PasswordPolicy;
use crate::features::auth::types::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
    ResendVerificationRequest, ResetPasswordRequest, ValidateResetTokenRequest,
    ValidateResetTokenResponse,
};

/// Which account domain a flow operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountScope {
    Admin,
    User,
}

impl AccountScope {
    pub fn api_prefix(self) -> &'static str {
        match self {
            AccountScope::Admin => "/api/admin",
            AccountScope::User => "/api/users",
        }
    }

    pub fn endpoint(self, name: &str) -> String {
        format!("{}/{}", self.api_prefix(), name.trim_start_matches('/'))
    }

    pub fn password_policy(self) -> PasswordPolicy {
        match self {
            AccountScope::Admin => PasswordPolicy::ADMIN,
            AccountScope::User => PasswordPolicy::USER,
        }
    }

    /// Route of the sign-in page for this scope.
    pub fn login_route(self) -> &'static str {
        match self {
            AccountScope::Admin => "/admin/login",
            AccountScope::User => "/login",
        }
    }

    /// Route of the "request a reset link" page for this scope.
    pub fn forgot_password_route(self) -> &'static str {
        match self {
            AccountScope::Admin => "/admin/forgot-password",
            AccountScope::User => "/forgot-password",
        }
    }
}

/// Account endpoints used by the auth flows.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /api/{scope}/forgot-password`
    async fn forgot_password(
        &self,
        scope: AccountScope,
        request: &ForgotPasswordRequest,
    ) -> Result<(), AppError>;

    /// `POST /api/{scope}/validate-reset-token`
    async fn validate_reset_token(
        &self,
        scope: AccountScope,
        request: &ValidateResetTokenRequest,
    ) -> Result<ValidateResetTokenResponse, AppError>;

    /// `POST /api/{scope}/reset-password`
    async fn reset_password(
        &self,
        scope: AccountScope,
        request: &ResetPasswordRequest,
    ) -> Result<(), AppError>;

    /// `POST /api/users/resend-verification`
    async fn resend_verification(&self, request: &ResendVerificationRequest)
    -> Result<(), AppError>;

    /// `POST /api/{scope}/login`
    async fn login(
        &self,
        scope: AccountScope,
        request: &LoginRequest,
    ) -> Result<LoginResponse, AppError>;

    /// `POST /api/users/register`
    async fn register(&self, request: &RegisterRequest) -> Result<(), AppError>;
}

/// Browser implementation backed by the shared HTTP helpers.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct HttpAuthApi;

#[cfg(target_arch = "wasm32")]
impl AuthApi for HttpAuthApi {
    async fn forgot_password(
        &self,
        scope: AccountScope,
        request: &ForgotPasswordRequest,
    ) -> Result<(), AppError> {
        crate::app_lib::post_json(&scope.endpoint("forgot-password"), request, &[]).await
    }

    async fn validate_reset_token(
        &self,
        scope: AccountScope,
        request: &ValidateResetTokenRequest,
    ) -> Result<ValidateResetTokenResponse, AppError> {
        let path = scope.endpoint("validate-reset-token");
        match crate::app_lib::post_json_response(&path, request, &[]).await {
            // A 2xx with an empty or non-JSON body still means "valid".
            Err(AppError::Parse(_)) => Ok(ValidateResetTokenResponse::default()),
            other => other,
        }
    }

    async fn reset_password(
        &self,
        scope: AccountScope,
        request: &ResetPasswordRequest,
    ) -> Result<(), AppError> {
        crate::app_lib::post_json(&scope.endpoint("reset-password"), request, &[]).await
    }

    async fn resend_verification(
        &self,
        request: &ResendVerificationRequest,
    ) -> Result<(), AppError> {
        let path = AccountScope::User.endpoint("resend-verification");
        crate::app_lib::post_json(&path, request, &[]).await
    }

    async fn login(
        &self,
        scope: AccountScope,
        request: &LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        crate::app_lib::post_json_response(&scope.endpoint("login"), request, &[]).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AppError> {
        let path = AccountScope::User.endpoint("register");
        crate::app_lib::post_json(&path, request, &[]).await
    }
}
