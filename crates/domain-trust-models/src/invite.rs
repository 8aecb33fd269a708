//! Pending user invitations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metadata::MetadataFilter;
use crate::query::{QueryEntry, QueryFilter};

/// An invitation for a prospective user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Invite {
    /// Creation time.
    #[serde(with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Identifier.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Redemption token, assigned by the service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    /// Invitee email.
    pub user_email: String,
    /// Invitee given name.
    pub user_first_name: String,
    /// Invitee family name.
    pub user_last_name: String,
    /// Organization the invitee joins.
    #[serde(rename = "userOrganizationID", skip_serializing_if = "String::is_empty")]
    pub user_organization_id: String,
    /// Role granted on redemption.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_role: String,
}

/// Filter for invite searches.
///
/// Older service releases ignored any invite query parameters. `userEmail`
/// and `userOrganizationID` narrow the search only where the service honours
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteFilter {
    /// Paging and creation window.
    pub metadata: MetadataFilter,
    /// Invitee email.
    pub user_email: String,
    /// Invitee organization.
    pub user_organization_id: String,
}

impl QueryFilter for InviteFilter {
    fn query_entries(&self) -> Vec<QueryEntry<'_>> {
        vec![
            QueryEntry::embedded(&self.metadata),
            QueryEntry::omit_empty("userEmail", &self.user_email),
            QueryEntry::omit_empty("userOrganizationID", &self.user_organization_id),
        ]
    }
}
