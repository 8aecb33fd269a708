//! Reporting organizations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metadata::MetadataFilter;
use crate::query::{QueryEntry, QueryFilter};

/// Accepted values for [`Organization::rating`].
pub mod rating {
    /// Law enforcement or judicial provider.
    pub const HIGH_CONFIDENCE: &str = "high-confidence";
    /// Large-scale security operations provider.
    pub const MED_CONFIDENCE: &str = "med-confidence";
    /// Aggregated or automated feed.
    pub const LOW_CONFIDENCE: &str = "low-confidence";
    /// Predictive intelligence provider.
    pub const PREDICTIVE: &str = "predictive";
    /// Trial organization.
    pub const TRIAL: &str = "trial";
}

/// Accepted values for [`Organization::role`].
pub mod role {
    /// ICANN.
    pub const ICANN: &str = "icann";
    /// Anything else.
    pub const OTHER: &str = "other";
    /// Registrar.
    pub const REGISTRAR: &str = "registrar";
    /// Registry operator.
    pub const REGISTRY: &str = "registry";
    /// Reseller.
    pub const RESELLER: &str = "reseller";
}

/// Accepted values for [`Organization::status`].
pub mod status {
    /// Active.
    pub const ACTIVE: &str = "active";
    /// Deactivated.
    pub const DEACTIVATED: &str = "deactivated";
}

/// An organization that reports domains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    /// Creation time.
    #[serde(with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Identifier.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// See [`rating`].
    pub rating: String,
    /// See [`role`].
    pub role: String,
    /// See [`status`].
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    /// Maximum number of users.
    #[serde(skip_serializing_if = "is_zero")]
    pub user_quota: i8,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(value: &i8) -> bool {
    *value == 0
}

/// Partial update for an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUpdate {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// New role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New user quota.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_quota: Option<i8>,
}

/// Filter for organization searches.
///
/// Unlike the other filters, every field is sent even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationFilter {
    /// Paging and creation window.
    pub metadata: MetadataFilter,
    /// Name.
    pub name: String,
    /// Rating.
    pub rating: String,
    /// Role.
    pub role: String,
    /// Status.
    pub status: String,
}

impl QueryFilter for OrganizationFilter {
    fn query_entries(&self) -> Vec<QueryEntry<'_>> {
        vec![
            QueryEntry::embedded(&self.metadata),
            QueryEntry::param("name", &self.name),
            QueryEntry::param("rating", &self.rating),
            QueryEntry::param("role", &self.role),
            QueryEntry::param("status", &self.status),
        ]
    }
}
