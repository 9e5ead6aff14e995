//! In-memory `AuthApi` for flow tests. Every call is recorded so tests can
//! assert on what reached the network (and what did not).

use crate::app_lib::AppError;
use crate::app_lib::errors::ApiFailure;
use crate::features::auth::client::{AccountScope, AuthApi};
use crate::features::auth::types::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
    ResendVerificationRequest, ResetPasswordRequest, ValidateResetTokenRequest,
    ValidateResetTokenResponse,
};
use std::cell::RefCell;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ForgotPassword { scope: AccountScope, email: String },
    ValidateResetToken { scope: AccountScope, token: String },
    ResetPassword { scope: AccountScope, token: String, new_password: String },
    ResendVerification { email: String },
    Login { scope: AccountScope, email: String, password: String },
    Register { name: String, email: String },
}

pub struct FakeAuthApi {
    pub(crate) calls: RefCell<Vec<Call>>,
    pub forgot: Result<(), AppError>,
    pub validate: Result<ValidateResetTokenResponse, AppError>,
    pub reset: Result<(), AppError>,
    pub resend: Result<(), AppError>,
    pub login: Result<LoginResponse, AppError>,
    pub register: Result<(), AppError>,
}

impl Default for FakeAuthApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            forgot: Ok(()),
            validate: Ok(ValidateResetTokenResponse::default()),
            reset: Ok(()),
            resend: Ok(()),
            login: Ok(LoginResponse {
                token: "session-token".to_string(),
                refresh_token: None,
                user: None,
            }),
            register: Ok(()),
        }
    }
}

impl FakeAuthApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

pub fn http_error(status: u16, message: &str) -> AppError {
    AppError::Http(ApiFailure::new(status, message))
}

impl AuthApi for FakeAuthApi {
    async fn forgot_password(
        &self,
        scope: AccountScope,
        request: &ForgotPasswordRequest,
    ) -> Result<(), AppError> {
        self.record(Call::ForgotPassword {
            scope,
            email: request.email.clone(),
        });
        self.forgot.clone()
    }

    async fn validate_reset_token(
        &self,
        scope: AccountScope,
        request: &ValidateResetTokenRequest,
    ) -> Result<ValidateResetTokenResponse, AppError> {
        self.record(Call::ValidateResetToken {
            scope,
            token: request.token.clone(),
        });
        self.validate.clone()
    }

    async fn reset_password(
        &self,
        scope: AccountScope,
        request: &ResetPasswordRequest,
    ) -> Result<(), AppError> {
        self.record(Call::ResetPassword {
            scope,
            token: request.token.clone(),
            new_password: request.new_password.clone(),
        });
        self.reset.clone()
    }

    async fn resend_verification(
        &self,
        request: &ResendVerificationRequest,
    ) -> Result<(), AppError> {
        self.record(Call::ResendVerification {
            email: request.email.clone(),
        });
        self.resend.clone()
    }

    async fn login(
        &self,
        scope: AccountScope,
        request: &LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        self.record(Call::Login {
            scope,
            email: request.email.clone(),
            password: request.password.clone(),
        });
        self.login.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AppError> {
        self.record(Call::Register {
            name: request.name.clone(),
            email: request.email.clone(),
        });
        self.register.clone()
    }
}
