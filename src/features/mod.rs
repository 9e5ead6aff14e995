//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while keeping validation, session, and
//! API handling in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod blog;
pub(crate) mod contact;
pub(crate) mod forms;
pub(crate) mod menu;
pub(crate) mod products;
pub(crate) mod settings;
