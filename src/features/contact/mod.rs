//! Contact form. Messages are validated locally and posted to the backend,
//! which handles delivery.

pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
