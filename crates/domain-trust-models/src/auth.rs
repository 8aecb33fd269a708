//! Authentication payloads.

use serde::{Deserialize, Serialize};

/// Credentials exchanged for an API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}
