//! API keys.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use domain_trust_models::query::to_query_string;
use domain_trust_models::{ApiKey, ApiKeyFilter};

use super::require;
use crate::client::Client;
use crate::error::ClientResult;

#[derive(Serialize)]
struct KeyRequest<'a> {
    key: &'a ApiKey,
}

#[derive(Deserialize)]
struct KeyResponse {
    #[serde(default)]
    key: Option<ApiKey>,
}

#[derive(Default, Deserialize)]
struct KeysResponse {
    #[serde(default)]
    keys: Vec<ApiKey>,
}

impl Client {
    /// Issue a new API key.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn create_api_key(&self, key: &ApiKey) -> ClientResult<()> {
        const OPERATION: &str = "create api key";
        let body = self.encode_body(OPERATION, &KeyRequest { key })?;
        let url = self.endpoint_url(&["keys"], "");
        self.call_empty(OPERATION, Method::POST, url, Some(body))
            .await
    }

    /// API keys matching `filter`.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the body cannot be decoded.
    pub async fn find_api_keys(&self, filter: &ApiKeyFilter) -> ClientResult<Vec<ApiKey>> {
        const OPERATION: &str = "find api keys";
        let url = self.endpoint_url(&["keys"], &to_query_string(filter));
        let response: Option<KeysResponse> = self.call(OPERATION, Method::GET, url, None).await?;
        Ok(response.unwrap_or_default().keys)
    }

    /// A single API key by identifier.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the response carries no key.
    pub async fn find_api_key_by_id(&self, id: &str) -> ClientResult<ApiKey> {
        const OPERATION: &str = "find api key";
        let url = self.endpoint_url(&["keys", id], "");
        let response: Option<KeyResponse> = self.call(OPERATION, Method::GET, url, None).await?;
        require(response.and_then(|wrapper| wrapper.key), OPERATION, "key")
    }

    /// Revoke an API key.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn delete_api_key(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint_url(&["keys", id], "");
        self.call_empty("delete api key", Method::DELETE, url, None)
            .await
    }
}
