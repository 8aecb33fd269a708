//! Domain reports and their query filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metadata::MetadataFilter;
use crate::query::{QueryEntry, QueryFilter};

/// Accepted values for [`DomainSubmission::abuse_type`].
pub mod abuse_type {
    /// Botnet command and control.
    pub const BOTNETS: &str = "botnets";
    /// Malware distribution.
    pub const MALWARE: &str = "malware";
    /// DNS or host based redirection.
    pub const PHARMING: &str = "pharming";
    /// Credential phishing.
    pub const PHISHING: &str = "phishing";
    /// Spam origin.
    pub const SPAM: &str = "spam";
}

/// Accepted values for [`DomainSubmission::activity`].
pub mod activity {
    /// Domain resolves and is live.
    pub const ACTIVE: &str = "active";
    /// Suspended by the registrar or registry.
    pub const SUSPENDED: &str = "suspended";
    /// Domain does not exist.
    pub const NON_EXISTENT: &str = "non-existent";
    /// Taken down.
    pub const TAKEN_DOWN: &str = "taken-down";
    /// Blocked by the resolver.
    pub const BLOCKED: &str = "blocked";
}

/// Accepted values for [`DomainSubmission::classification`], in the provider's opinion.
pub mod classification {
    /// Definitely malicious.
    pub const DEFINITELY_MALICIOUS: &str = "definitely-malicious";
    /// Probably malicious.
    pub const PROBABLY_MALICIOUS: &str = "probably-malicious";
    /// Possibly malicious.
    pub const POSSIBLY_MALICIOUS: &str = "possibly-malicious";
    /// Clean; used for whitelists and false-positive reports.
    pub const DEFINITELY_CLEAN: &str = "definitely-clean";
}

/// Accepted values for [`DomainSubmission::report_type`].
pub mod report_type {
    /// Brand impersonation.
    pub const BRAND_SPOOF: &str = "brand-spoof";
    /// Fraud.
    pub const FRAUD: &str = "fraud";
}

/// Accepted values for [`DomainSubmission::source`].
pub mod source {
    /// Reported by a third party.
    pub const EXTERNAL: &str = "external-reported";
    /// Found by the reporting provider itself.
    pub const INTERNAL: &str = "self-reported";
}

/// A single provider's report about a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainSubmission {
    /// Creation time assigned by the service.
    #[serde(with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Record identifier assigned by the service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Reporting organization.
    #[serde(rename = "providerID", skip_serializing_if = "String::is_empty")]
    pub organization_id: String,
    /// Fully qualified domain name.
    pub domain: String,
    /// Second-level label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sld: String,
    /// Top-level label.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tld: String,
    /// Registrable domain.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub root_domain: String,
    /// Labels left of the registrable domain.
    #[serde(rename = "subDomain", skip_serializing_if = "String::is_empty")]
    pub subdomain: String,
    /// Registration date when known.
    #[serde(with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<DateTime<Utc>>,
    /// Reporting organization name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provider_name: String,
    /// Reporting organization rating.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provider_rating: String,
    /// Reporting organization role.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provider_role: String,
    /// See [`abuse_type`].
    #[serde(skip_serializing_if = "String::is_empty")]
    pub abuse_type: String,
    /// See [`activity`].
    pub activity: String,
    /// See [`classification`].
    pub classification: String,
    /// Free-form notes.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comments: String,
    /// When the provider identified the domain.
    #[serde(with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub date_identified: Option<DateTime<Utc>>,
    /// Whether the domain is currently blocked.
    pub is_blocked: bool,
    /// See [`report_type`].
    #[serde(skip_serializing_if = "String::is_empty")]
    pub report_type: String,
    /// See [`source`].
    pub source: String,
    /// Name of the upstream feed or reporter.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source_name: String,
    /// Sample URLs observed on the domain.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
}

/// Whitelist entry attached to a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainWhitelist {
    /// When the whitelist entry was created.
    #[serde(with = "crate::timestamp", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Organization that whitelisted the domain.
    pub provider_name: String,
    /// Upstream source of the whitelist entry.
    pub source_name: String,
}

/// Aggregated domain record returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// The canonical submission.
    #[serde(flatten)]
    pub submission: DomainSubmission,
    /// Reports from other providers about the same domain.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_providers: Vec<DomainSubmission>,
    /// Whitelist entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub whitelist: Vec<DomainWhitelist>,
}

/// Per-domain failure reported by a bulk create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainError {
    /// Domain that failed.
    pub domain: String,
    /// Reason reported by the service.
    pub error: String,
}

/// Filter for domain searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainFilter {
    /// Paging and creation window.
    pub metadata: MetadataFilter,
    /// Reporting organization.
    pub organization_id: String,
    /// Exact domain.
    pub domain: String,
    /// Second-level label.
    pub sld: String,
    /// Top-level label.
    pub tld: String,
    /// Registrable domain.
    pub root_domain: String,
    /// Subdomain labels.
    pub subdomain: String,
    /// Registered after this instant.
    pub registration_date_after: Option<DateTime<Utc>>,
    /// Registered before this instant.
    pub registration_date_before: Option<DateTime<Utc>>,
    /// Reporting organization name.
    pub provider_name: String,
    /// Exact provider rating.
    pub provider_rating: String,
    /// Minimum provider rating.
    pub provider_rating_above: String,
    /// Reporting organization role.
    pub provider_role: String,
    /// Abuse type.
    pub abuse_type: String,
    /// Activity state.
    pub activity: String,
    /// Classification.
    pub classification: String,
    /// Identified after this instant.
    pub date_identified_after: Option<DateTime<Utc>>,
    /// Identified before this instant.
    pub date_identified_before: Option<DateTime<Utc>>,
    /// Only blocked domains.
    pub only_blocked: bool,
    /// Only unblocked domains.
    pub only_unblocked: bool,
    /// Report type.
    pub report_type: String,
    /// Report source.
    pub source: String,
    /// Sample URL.
    pub urls: String,
}

impl QueryFilter for DomainFilter {
    fn query_entries(&self) -> Vec<QueryEntry<'_>> {
        vec![
            QueryEntry::embedded(&self.metadata),
            QueryEntry::omit_empty("organizationID", &self.organization_id),
            QueryEntry::omit_empty("domain", &self.domain),
            QueryEntry::omit_empty("sld", &self.sld),
            QueryEntry::omit_empty("tld", &self.tld),
            QueryEntry::omit_empty("rootDomain", &self.root_domain),
            QueryEntry::omit_empty("subDomain", &self.subdomain),
            QueryEntry::omit_empty("registrationDateAfter", &self.registration_date_after),
            QueryEntry::omit_empty("registrationDateBefore", &self.registration_date_before),
            QueryEntry::omit_empty("providerName", &self.provider_name),
            QueryEntry::omit_empty("providerRating", &self.provider_rating),
            QueryEntry::omit_empty("providerRatingAbove", &self.provider_rating_above),
            QueryEntry::omit_empty("providerRole", &self.provider_role),
            QueryEntry::omit_empty("abuseType", &self.abuse_type),
            QueryEntry::omit_empty("activity", &self.activity),
            QueryEntry::omit_empty("classification", &self.classification),
            QueryEntry::omit_empty("dateIdentifiedAfter", &self.date_identified_after),
            QueryEntry::omit_empty("dateIdentifiedBefore", &self.date_identified_before),
            QueryEntry::omit_empty("onlyBlocked", self.only_blocked),
            QueryEntry::omit_empty("onlyUnblocked", self.only_unblocked),
            QueryEntry::omit_empty("reportType", &self.report_type),
            QueryEntry::omit_empty("source", &self.source),
            QueryEntry::omit_empty("urls", &self.urls),
        ]
    }
}
