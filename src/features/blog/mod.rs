//! Blog posts: public listing and reading, plus admin authoring. Drafts are
//! validated locally before anything is sent; writes need the admin token.

pub(crate) mod client;
pub(crate) mod types;
