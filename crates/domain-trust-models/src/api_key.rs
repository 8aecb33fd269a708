//! API keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metadata::MetadataFilter;
use crate::query::{QueryEntry, QueryFilter};

/// A bearer credential issued to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiKey {
    /// Creation time.
    #[serde(with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Identifier.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Secret value; only returned when the key is issued.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Expiry, if any.
    #[serde(with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    /// Owning user.
    #[serde(rename = "userID", skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    /// Deployment the key is valid for.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub environment: String,
}

/// Filter for API key searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeyFilter {
    /// Paging and creation window.
    pub metadata: MetadataFilter,
    /// Deployment.
    pub environment: String,
    /// Expiring after this instant.
    pub expiry_after: Option<DateTime<Utc>>,
    /// Expiring before this instant.
    pub expiry_before: Option<DateTime<Utc>>,
    /// Owning user.
    pub user_id: String,
}

impl QueryFilter for ApiKeyFilter {
    fn query_entries(&self) -> Vec<QueryEntry<'_>> {
        vec![
            QueryEntry::embedded(&self.metadata),
            QueryEntry::omit_empty("environment", &self.environment),
            QueryEntry::omit_empty("expiryAfter", &self.expiry_after),
            QueryEntry::omit_empty("expiryBefore", &self.expiry_before),
            QueryEntry::omit_empty("userID", &self.user_id),
        ]
    }
}
