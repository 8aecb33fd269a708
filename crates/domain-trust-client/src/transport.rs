//! Request execution and response classification.
//!
//! # Design
//! - A call is one request: compress, send, read, decompress, classify.
//! - Status >= 400 becomes [`ClientError::Server`] when the body is a
//!   readable [`ErrorEnvelope`], otherwise [`ClientError::Status`] with the
//!   raw body attached.
//! - Success bodies are only decoded when the caller asks for a value and
//!   the body is declared as cbor or json.

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_TYPE, HeaderMap, HeaderName,
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::CLIENT_VERSION;
use crate::client::Client;
use crate::codec;
use crate::compression;
use crate::config::ContentType;
use crate::envelope::ErrorEnvelope;
use crate::error::{ClientError, ClientResult};

/// Header carrying the client library version.
pub const HEADER_CLIENT_VERSION: &str = "dt-client-version";

const CURL_TARGET: &str = "domain_trust::curl";

/// Decompressed response of a completed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Declared `Content-Type`, if any.
    pub content_type: Option<String>,
    /// Declared `Content-Encoding`, if any.
    pub content_encoding: Option<String>,
    /// Body after decompression.
    pub body: Bytes,
}

impl ApiResponse {
    /// Decode the body under its declared content type.
    ///
    /// An empty body, or one whose content type is missing or not cbor/json,
    /// yields `Ok(None)`: the call itself succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when a cbor or json body does not
    /// match `T`.
    pub fn decode<T: DeserializeOwned>(&self, operation: &'static str) -> ClientResult<Option<T>> {
        if self.body.is_empty() {
            return Ok(None);
        }
        let declared = self.content_type.as_deref();
        if declared.and_then(ContentType::from_header).is_none() {
            tracing::debug!(
                operation,
                content_type = declared.unwrap_or_default(),
                "skipping decode of undeclared response body"
            );
            return Ok(None);
        }
        codec::decode(declared, &self.body)
            .map(Some)
            .map_err(|source| ClientError::Decode { operation, source })
    }

    fn into_error(self, operation: &'static str) -> ClientError {
        if !self.body.is_empty()
            && let Ok(envelope) =
                codec::decode::<ErrorEnvelope>(self.content_type.as_deref(), &self.body)
        {
            return ClientError::Server {
                operation,
                status: self.status,
                message: envelope.render(),
            };
        }
        ClientError::Status {
            operation,
            status: self.status,
            body: self.body,
        }
    }
}

impl Client {
    /// Send one request and classify its response.
    ///
    /// `body` is the encoded, uncompressed payload; it is compressed with the
    /// configured encoding when non-empty.
    ///
    /// # Errors
    ///
    /// Returns the first failure of the pipeline: compression, transport,
    /// cancellation, decompression, or a status >= 400.
    pub async fn execute(
        &self,
        operation: &'static str,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> ClientResult<ApiResponse> {
        let payload = match body {
            Some(raw) if !raw.is_empty() => Some(
                compression::compress(self.encoding, &raw)
                    .map_err(|source| ClientError::Compress { operation, source })?,
            ),
            _ => None,
        };

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, self.content_type.as_str())
            .header(ACCEPT_ENCODING, self.encoding.as_str())
            .header(CONTENT_ENCODING, self.encoding.as_str())
            .header(CONTENT_TYPE, self.content_type.as_str())
            .header(HEADER_CLIENT_VERSION, CLIENT_VERSION);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        if let Some(payload) = payload {
            builder = builder.body(payload);
        }
        let request = builder
            .build()
            .map_err(|source| ClientError::Transport { operation, source })?;

        if self.debug {
            tracing::info!(target: CURL_TARGET, operation, command = %render_curl(&request));
        }

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(ClientError::Cancelled { operation }),
            result = self.dispatch(operation, request) => result,
        }
    }

    async fn dispatch(
        &self,
        operation: &'static str,
        request: reqwest::Request,
    ) -> ClientResult<ApiResponse> {
        let started = std::time::Instant::now();
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;

        let status = response.status().as_u16();
        let content_type = header_text(response.headers(), &CONTENT_TYPE);
        let content_encoding = header_text(response.headers(), &CONTENT_ENCODING);
        let raw = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;
        let body = compression::decompress(content_encoding.as_deref(), raw)
            .map_err(|source| ClientError::Decompress { operation, source })?;

        tracing::debug!(
            operation,
            status,
            bytes = body.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "response received"
        );

        let response = ApiResponse {
            status,
            content_type,
            content_encoding,
            body,
        };
        if status >= 400 {
            if self.debug {
                tracing::info!(
                    operation,
                    status,
                    body = %String::from_utf8_lossy(&response.body),
                    "error response body"
                );
            }
            return Err(response.into_error(operation));
        }
        Ok(response)
    }
}

fn header_text(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Render a built request as a copy-pasteable `curl` command.
pub(crate) fn render_curl(request: &reqwest::Request) -> String {
    let mut parts = vec![
        "curl".to_string(),
        "-X".to_string(),
        request.method().to_string(),
    ];
    let mut headers: Vec<String> = request
        .headers()
        .iter()
        .map(|(name, value)| format!("{name}: {}", String::from_utf8_lossy(value.as_bytes())))
        .collect();
    headers.sort();
    for header in headers {
        parts.push("-H".to_string());
        parts.push(shell_quote(&header));
    }
    if let Some(bytes) = request.body().and_then(reqwest::Body::as_bytes) {
        parts.push("-d".to_string());
        parts.push(shell_quote(&String::from_utf8_lossy(bytes)));
    }
    parts.push(shell_quote(request.url().as_str()));
    parts.join(" ")
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
