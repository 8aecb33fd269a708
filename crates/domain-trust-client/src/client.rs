//! The [`Client`] handle and its configuration mutators.

use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::codec;
use crate::config::{ClientConfig, ContentType, Encoding};
use crate::error::{ClientError, ClientResult};

/// Handle to the Domain Trust API.
///
/// Cloning is cheap; clones share the connection stack and cancellation
/// token but carry their own configuration from then on.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) api_key: Option<String>,
    pub(crate) content_type: ContentType,
    pub(crate) encoding: Encoding,
    pub(crate) timeout: Option<Duration>,
    pub(crate) debug: bool,
    pub(crate) cancel: CancellationToken,
}

impl Client {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot carry resource paths or the
    /// HTTP stack cannot be built.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = build_http(config.timeout)?;
        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.filter(|key| !key.is_empty()),
            content_type: config.content_type,
            encoding: config.encoding,
            timeout: Some(config.timeout),
            debug: config.debug,
            cancel: CancellationToken::new(),
        })
    }

    /// Replace the underlying HTTP client. Its own timeout then applies, so
    /// [`Client::timeout`] reports `None` until [`Client::set_timeout`] runs.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self.timeout = None;
        self
    }

    /// Clone of this client whose calls end with [`ClientError::Cancelled`]
    /// once `token` is cancelled.
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        let mut client = self.clone();
        client.cancel = token;
        client
    }

    /// Replace the API key; an empty key clears it.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        let api_key = api_key.into();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
    }

    /// Change the request timeout by rebuilding the HTTP stack.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP stack cannot be rebuilt; the client is
    /// left unchanged in that case.
    pub fn set_timeout(&mut self, timeout: Duration) -> ClientResult<()> {
        self.http = build_http(timeout)?;
        self.timeout = Some(timeout);
        Ok(())
    }

    /// Toggle request/response debug logging.
    pub const fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Base URL every resource path is appended to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Body serialization in use.
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Body compression in use.
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Configured request timeout, or `None` when a caller-supplied HTTP
    /// client governs it.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Whether an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Token bounding this client's calls.
    #[must_use]
    pub const fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Resolve `segments` and an encoded `query` against the base URL.
    ///
    /// Segments are percent-encoded individually, so identifiers containing
    /// `/` stay within one path segment.
    #[must_use]
    pub fn endpoint_url(&self, segments: &[&str], query: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.set_query((!query.is_empty()).then_some(query));
        url
    }

    pub(crate) fn encode_body<B: Serialize + ?Sized>(
        &self,
        operation: &'static str,
        body: &B,
    ) -> ClientResult<Vec<u8>> {
        codec::encode(self.content_type, body)
            .map_err(|source| ClientError::Encode { operation, source })
    }

    /// Execute a call and decode its body into `T` when one was returned.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Option<T>> {
        self.execute(operation, method, url, body)
            .await?
            .decode(operation)
    }

    /// Execute a call whose response body is not inspected.
    pub(crate) async fn call_empty(
        &self,
        operation: &'static str,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> ClientResult<()> {
        self.execute(operation, method, url, body).await?;
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> ClientResult<Url> {
    let url = Url::parse(raw).map_err(|_| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: "unparseable",
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "unsupported_scheme",
        });
    }
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "cannot_be_a_base",
        });
    }
    Ok(url)
}

fn build_http(timeout: Duration) -> ClientResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| ClientError::HttpClient { source })
}
