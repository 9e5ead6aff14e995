//! Account feature module: password reset, sign-in, registration, email
//! verification resend, and OAuth handoff for both admin and user accounts.
//! It keeps account logic out of the UI and must stay aligned with backend
//! expectations. This module touches security boundaries and must avoid
//! logging secrets, tokens, or email addresses.
//!
//! Flow Overview: reset requests and resends are enumeration neutral; the reset
//! page pre-checks its token and treats expiry as a state change; sign-in
//! persists tokens through the session store.

pub(crate) mod client;
pub(crate) mod cooldown;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod login;
pub(crate) mod oauth;
pub(crate) mod policy;
pub(crate) mod register;
pub(crate) mod reset;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
#[cfg(test)]
pub(crate) mod testing;
pub(crate) mod types;
pub(crate) mod verification;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireAdmin;
