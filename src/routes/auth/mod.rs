//! Account pages. Each page is parameterized by `AccountScope` where the admin
//! and user variants differ only in endpoints, policy, and links.

mod forgot_password;
mod login;
mod oauth_callback;
mod register;
mod resend_ticker;
mod reset_password;
mod verify_email;

pub(crate) use forgot_password::ForgotPasswordPage;
pub(crate) use login::LoginPage;
pub(crate) use oauth_callback::OAuthCallbackPage;
pub(crate) use register::RegisterPage;
pub(crate) use reset_password::ResetPasswordPage;
pub(crate) use verify_email::VerifyEmailPage;
