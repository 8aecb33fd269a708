//! # Design
//!
//! - Keep error messages constant while carrying context fields for debugging.
//! - Every call-level variant records the operation that failed.
//! - Server-provided failure text is surfaced verbatim through [`ClientError::Server`].

use bytes::Bytes;
use thiserror::Error;

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by [`crate::Client`] and [`crate::Pager`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL cannot carry resource paths.
    #[error("invalid base url")]
    InvalidBaseUrl {
        /// URL as configured.
        url: String,
        /// Machine-readable reason for the rejection.
        reason: &'static str,
    },
    /// Building the HTTP stack failed.
    #[error("failed to build http client")]
    HttpClient {
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// Serializing the request payload failed.
    #[error("failed to encode request body")]
    Encode {
        /// Operation identifier.
        operation: &'static str,
        /// Source codec error.
        source: CodecError,
    },
    /// Compressing the request payload failed.
    #[error("failed to compress request body")]
    Compress {
        /// Operation identifier.
        operation: &'static str,
        /// Source compression error.
        source: CompressionError,
    },
    /// The request could not be sent or its response could not be read.
    #[error("request failed")]
    Transport {
        /// Operation identifier.
        operation: &'static str,
        /// Source HTTP client error.
        source: reqwest::Error,
    },
    /// The call was cancelled before it completed.
    #[error("request cancelled")]
    Cancelled {
        /// Operation identifier.
        operation: &'static str,
    },
    /// Decompressing the response body failed.
    #[error("failed to decompress response body")]
    Decompress {
        /// Operation identifier.
        operation: &'static str,
        /// Source compression error.
        source: CompressionError,
    },
    /// The service rejected the call with a structured error envelope.
    #[error("{message}")]
    Server {
        /// Operation identifier.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
        /// Rendered envelope text.
        message: String,
    },
    /// The service rejected the call without a readable envelope.
    #[error("request status code {status}")]
    Status {
        /// Operation identifier.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
        /// Raw (decompressed) response body.
        body: Bytes,
    },
    /// The call succeeded but the response body could not be decoded.
    #[error("request succeeded, couldn't decode response")]
    Decode {
        /// Operation identifier.
        operation: &'static str,
        /// Source codec error.
        source: CodecError,
    },
    /// The call succeeded but the expected wrapper field was absent.
    #[error("response did not include the expected payload")]
    MissingPayload {
        /// Operation identifier.
        operation: &'static str,
        /// Wrapper field that was missing.
        field: &'static str,
    },
}

impl ClientError {
    /// Operation that failed, when the error is tied to a call.
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::InvalidBaseUrl { .. } | Self::HttpClient { .. } => None,
            Self::Encode { operation, .. }
            | Self::Compress { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Cancelled { operation }
            | Self::Decompress { operation, .. }
            | Self::Server { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. }
            | Self::MissingPayload { operation, .. } => Some(*operation),
        }
    }

    /// HTTP status of a rejected call.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw body returned alongside a status error.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the call ended because of cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Body serialization failures.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The response declared a content type the client cannot decode.
    #[error("unsupported content type")]
    UnsupportedContentType {
        /// Declared content type (empty when absent).
        content_type: String,
    },
    /// CBOR serialization failed.
    #[error("cbor encoding failed")]
    CborEncode {
        /// Source CBOR error.
        source: ciborium::ser::Error<std::io::Error>,
    },
    /// CBOR deserialization failed.
    #[error("cbor decoding failed")]
    CborDecode {
        /// Source CBOR error.
        source: ciborium::de::Error<std::io::Error>,
    },
    /// JSON serialization or deserialization failed.
    #[error("json codec failed")]
    Json {
        /// Source serde error.
        source: serde_json::Error,
    },
}

/// Body compression failures.
#[derive(Debug, Error)]
pub enum CompressionError {
    /// The configured encoding can only be decoded.
    #[error("unsupported request encoding")]
    UnsupportedRequestEncoding {
        /// Encoding token.
        encoding: &'static str,
    },
    /// Zstandard stream failed.
    #[error("zstd stream failed")]
    Zstd {
        /// Source IO error.
        source: std::io::Error,
    },
    /// Gzip stream failed.
    #[error("gzip stream failed")]
    Gzip {
        /// Source IO error.
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_body_and_operation() {
        let err = ClientError::Status {
            operation: "find users",
            status: 502,
            body: Bytes::from_static(b"bad gateway"),
        };
        assert_eq!(err.to_string(), "request status code 502");
        assert_eq!(err.operation(), Some("find users"));
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.body().map(|body| &body[..]), Some(&b"bad gateway"[..]));
    }

    #[test]
    fn server_error_displays_envelope_text() {
        let err = ClientError::Server {
            operation: "login",
            status: 401,
            message: "Unauthorized (HTTP 401)".into(),
        };
        assert_eq!(err.to_string(), "Unauthorized (HTTP 401)");
        assert!(err.body().is_none());
    }

    #[test]
    fn decode_error_is_distinct_from_status_errors() {
        let err = ClientError::Decode {
            operation: "find version",
            source: CodecError::UnsupportedContentType {
                content_type: "text/html".into(),
            },
        };
        assert!(err.status().is_none());
        assert!(err.to_string().starts_with("request succeeded"));
    }
}
