//! Client configuration.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use crate::DEFAULT_ENDPOINT_URL;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Serialization used for request and response bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
    /// `application/cbor`.
    #[default]
    Cbor,
    /// `application/json`.
    Json,
}

impl ContentType {
    /// MIME type sent in `Accept` and `Content-Type`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cbor => "application/cbor",
            Self::Json => "application/json",
        }
    }

    /// Match a `Content-Type` header value, ignoring parameters and case.
    #[must_use]
    pub fn from_header(value: &str) -> Option<Self> {
        let media_type = value.split(';').next().unwrap_or_default().trim();
        if media_type.eq_ignore_ascii_case(Self::Cbor.as_str()) {
            Some(Self::Cbor)
        } else if media_type.eq_ignore_ascii_case(Self::Json.as_str()) {
            Some(Self::Json)
        } else {
            None
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cbor" | "application/cbor" => Ok(Self::Cbor),
            "json" | "application/json" => Ok(Self::Json),
            other => Err(format!("unsupported content type '{other}'")),
        }
    }
}

/// Body compression advertised and applied by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Zstandard; used for both directions.
    #[default]
    Zstd,
    /// Gzip; responses only.
    Gzip,
}

impl Encoding {
    /// Token sent in `Accept-Encoding` and `Content-Encoding`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zstd => "zstd",
            Self::Gzip => "gzip",
        }
    }

    /// Match a `Content-Encoding` header value.
    #[must_use]
    pub fn from_header(value: &str) -> Option<Self> {
        let token = value.trim();
        if token.eq_ignore_ascii_case(Self::Zstd.as_str()) {
            Some(Self::Zstd)
        } else if token.eq_ignore_ascii_case(Self::Gzip.as_str()) {
            Some(Self::Gzip)
        } else {
            None
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_header(value).ok_or_else(|| format!("unsupported encoding '{}'", value.trim()))
    }
}

/// Settings used to build a [`crate::Client`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base URL; resource paths are appended as segments.
    pub base_url: String,
    /// Bearer API key, if any.
    pub api_key: Option<String>,
    /// Body serialization.
    pub content_type: ContentType,
    /// Body compression.
    pub encoding: Encoding,
    /// Overall request timeout.
    pub timeout: Duration,
    /// Log a `curl` rendering of each request and the body of failed responses.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT_URL.to_string(),
            api_key: None,
            content_type: ContentType::default(),
            encoding: Encoding::default(),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Default configuration authenticated with `api_key`.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}
