//! Command handlers grouped by resource.

pub(crate) mod api_keys;
pub(crate) mod config;
pub(crate) mod docs;
pub(crate) mod domains;
pub(crate) mod invites;
pub(crate) mod login;
pub(crate) mod organizations;
pub(crate) mod users;
pub(crate) mod version;
