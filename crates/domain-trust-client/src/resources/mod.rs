//! Typed operations grouped by resource.
//!
//! Each operation wraps its payload in the object the service expects
//! (`{"domains": [...]}`, `{"user": {...}}`) and unwraps the matching field
//! of the response.

pub mod api_keys;
pub mod auth;
pub mod domains;
pub mod invites;
pub mod organizations;
pub mod users;
pub mod version;

use crate::error::{ClientError, ClientResult};

/// Unwrap a single-record response field.
pub(crate) fn require<T>(
    value: Option<T>,
    operation: &'static str,
    field: &'static str,
) -> ClientResult<T> {
    value.ok_or(ClientError::MissingPayload { operation, field })
}
