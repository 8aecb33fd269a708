#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::redundant_pub_crate)]

//! Command-line client for the Domain Trust API.
//!
//! Layout:
//! - `cli.rs`: argument parsing, flag-to-filter conversions and command dispatch
//! - `commands/`: command handlers grouped by resource
//! - `client.rs`: application context, admin gate and error types
//! - `profile.rs`: the on-disk profile (`config.yml`)
//! - `import.rs`: CSV parsing for bulk domain submission
//! - `output.rs`: renderers for yaml, json, jsonp and cbor
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod import;
pub(crate) mod output;
pub(crate) mod profile;

pub use cli::run;
