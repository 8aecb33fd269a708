//! Sample records shared by client and CLI suites.

use chrono::{TimeZone, Utc};
use domain_trust_models::domain::{abuse_type, activity, classification, source};
use domain_trust_models::user::role;
use domain_trust_models::{ApiKey, Domain, DomainSubmission, User};

/// A fully populated domain report for `name`.
#[must_use]
pub fn sample_submission(name: &str) -> DomainSubmission {
    DomainSubmission {
        created: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).single(),
        id: format!("dom-{name}"),
        organization_id: "org-1".into(),
        domain: name.to_string(),
        abuse_type: abuse_type::PHISHING.into(),
        activity: activity::ACTIVE.into(),
        classification: classification::DEFINITELY_MALICIOUS.into(),
        source: source::INTERNAL.into(),
        urls: vec![format!("https://{name}/login")],
        ..DomainSubmission::default()
    }
}

/// Domain records for each of `names`, in order.
#[must_use]
pub fn sample_domains(names: &[&str]) -> Vec<Domain> {
    names
        .iter()
        .map(|name| Domain {
            submission: sample_submission(name),
            ..Domain::default()
        })
        .collect()
}

/// A member account.
#[must_use]
pub fn sample_user() -> User {
    User {
        id: "user-1".into(),
        email: "analyst@example.org".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        organization_id: "org-1".into(),
        role: role::MEMBER.into(),
        ..User::default()
    }
}

/// An issued API key owned by [`sample_user`].
#[must_use]
pub fn sample_api_key() -> ApiKey {
    ApiKey {
        id: "key-1".into(),
        key: "dt_secret".into(),
        user_id: "user-1".into(),
        ..ApiKey::default()
    }
}
