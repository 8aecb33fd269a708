//! List metadata shared by every filter.

use chrono::{DateTime, Utc};

use crate::query::{QueryEntry, QueryFilter};

/// Page size used when walking every page of a search.
pub const MAX_METADATA_LIMIT: u64 = 1000;

/// Paging and creation-window parameters embedded in every filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataFilter {
    /// Maximum number of records per page (`0` lets the service decide).
    pub limit: u64,
    /// Only records created after this instant.
    pub created_after: Option<DateTime<Utc>>,
    /// Only records created before this instant.
    pub created_before: Option<DateTime<Utc>>,
}

impl QueryFilter for MetadataFilter {
    fn query_entries(&self) -> Vec<QueryEntry<'_>> {
        vec![
            QueryEntry::omit_empty("limit", self.limit),
            QueryEntry::omit_empty("createdAfter", &self.created_after),
            QueryEntry::omit_empty("createdBefore", &self.created_before),
        ]
    }
}
