//! Shared frontend utilities for API access, configuration, errors, session
//! persistence, logging, and build metadata.
//!
//! ## Core Account Flows
//!
//! ### Password Reset (admin and user)
//!
//! 1. **Request:** The visitor submits an email to `/api/{scope}/forgot-password`.
//!    Known and unknown addresses produce the same confirmation screen.
//! 2. **Link:** The backend emails a single-use link carrying `?token=...`.
//! 3. **Check:** The reset page pre-validates the token via
//!    `/api/{scope}/validate-reset-token`; endpoint outages fall back to the form.
//! 4. **Finish:** The new password is posted with the token to
//!    `/api/{scope}/reset-password`. Expiry moves the page to the invalid-link state.
//!
//! ### Sign-in
//!
//! Login responses carry bearer tokens that the `session` module persists to
//! `localStorage`. Admin routes attach `adminToken` as `Authorization: Bearer`.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids duplicated
//! logic in routes and features. Callers must still avoid logging sensitive data.

pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;
pub(crate) mod session;
pub(crate) mod theme;

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    delete_with_headers, get_json, get_json_with_headers, post_json, post_json_response,
    put_json_response,
};
pub(crate) use errors::AppError;
