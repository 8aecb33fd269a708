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

//! Logging setup shared by the Domain Trust client tools.
//!
//! Layout: `init.rs` (subscriber installation, formats), `context.rs` (process-wide
//! command span), `error.rs` (error type).

pub mod context;
pub mod error;
pub mod init;

pub use context::CommandContextGuard;
pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, client_version, init_logging};
