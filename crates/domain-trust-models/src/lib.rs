#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub, unused)]
#![allow(clippy::multiple_crate_versions)]
//! Shared records for the Domain Trust API.
//!
//! These types are used by the client for request/response encoding and by
//! the CLI for flag mapping and rendering. Records carry no behaviour beyond
//! serde; filters additionally describe how they become query parameters
//! through [`query::QueryFilter`].
//!
//! Layout: `query.rs` (mapping tables and the encoder), `metadata.rs`
//! (shared list filter), then one module per resource.

pub mod api_key;
pub mod auth;
pub mod domain;
pub mod invite;
pub mod metadata;
pub mod organization;
pub mod query;
pub mod timestamp;
pub mod user;

pub use api_key::{ApiKey, ApiKeyFilter};
pub use auth::Login;
pub use domain::{Domain, DomainError, DomainFilter, DomainSubmission, DomainWhitelist};
pub use invite::{Invite, InviteFilter};
pub use metadata::{MAX_METADATA_LIMIT, MetadataFilter};
pub use organization::{Organization, OrganizationFilter, OrganizationUpdate};
pub use query::{Omit, QueryEntry, QueryFilter, QueryValue, encode_pairs, query_pairs, to_query_string};
pub use user::{User, UserFilter, UserUpdate};
