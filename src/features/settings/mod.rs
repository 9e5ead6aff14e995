//! Site-wide settings: branding, contact details, social links, and payment
//! provider keys. Publicly readable; only admins may update them.

pub(crate) mod client;
pub(crate) mod types;
