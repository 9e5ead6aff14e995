//! Product catalogue shown on the services page and managed from the admin
//! back-office. Prices travel as integer minor units.

pub(crate) mod client;
pub(crate) mod types;
