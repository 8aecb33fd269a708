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
//! Async client for the Domain Trust threat-intelligence API.
//!
//! # Design
//! - One [`Client`] per configuration; it is cheap to clone and shares the
//!   underlying connection stack.
//! - Every call goes through [`Client::execute`]: encode, compress, send,
//!   decompress, then classify the response. There are no retries.
//! - Bulk domain retrieval is exposed through the forward-only [`Pager`].
//! - Errors carry the operation name and keep their sources for chained
//!   display.

pub mod client;
pub mod codec;
pub mod compression;
pub mod config;
pub mod envelope;
pub mod error;
pub mod pager;
pub mod resources;
pub mod transport;

pub use client::Client;
pub use config::{ClientConfig, ContentType, Encoding};
pub use envelope::ErrorEnvelope;
pub use error::{ClientError, ClientResult, CodecError, CompressionError};
pub use pager::{Page, PageSource, Pager};
pub use resources::domains::DomainPages;
pub use transport::ApiResponse;

pub use domain_trust_models as models;

/// Default service endpoint.
pub const DEFAULT_ENDPOINT_URL: &str = "https://domain-trust.globalcyberalliance.org/api";
/// Public documentation site.
pub const DOCS_URL: &str = "https://domain-trust.docs.globalcyberalliance.org";
/// Version reported in the `DT-Client-Version` header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
