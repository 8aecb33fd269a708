//! User accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metadata::MetadataFilter;
use crate::query::{QueryEntry, QueryFilter};

/// Accepted values for [`User::role`].
pub mod role {
    /// Full administrative access.
    pub const ADMIN: &str = "admin";
    /// Regular organization member.
    pub const MEMBER: &str = "member";
    /// Time-limited trial account.
    pub const TRIAL: &str = "trial";
}

/// A user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// Creation time.
    #[serde(with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Identifier.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Owning organization.
    #[serde(rename = "organizationID")]
    pub organization_id: String,
    /// Password, only ever sent on creation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// See [`role`].
    pub role: String,
}

/// Partial update for a user; only present fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// New email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserUpdate {
    /// Whether the update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.password.is_none()
            && self.role.is_none()
    }
}

/// Filter for user searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Paging and creation window.
    pub metadata: MetadataFilter,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Owning organization.
    pub organization_id: String,
    /// Role.
    pub role: String,
}

impl QueryFilter for UserFilter {
    fn query_entries(&self) -> Vec<QueryEntry<'_>> {
        vec![
            QueryEntry::embedded(&self.metadata),
            QueryEntry::omit_empty("email", &self.email),
            QueryEntry::omit_empty("firstName", &self.first_name),
            QueryEntry::omit_empty("lastName", &self.last_name),
            QueryEntry::omit_empty("organizationID", &self.organization_id),
            QueryEntry::omit_empty("role", &self.role),
        ]
    }
}
