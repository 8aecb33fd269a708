//! Service version.

use reqwest::Method;
use serde::Deserialize;

use super::require;
use crate::client::Client;
use crate::error::ClientResult;

#[derive(Deserialize)]
struct VersionResponse {
    #[serde(default)]
    version: Option<String>,
}

impl Client {
    /// Version string reported by the service.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the response carries no version.
    pub async fn find_version(&self) -> ClientResult<String> {
        const OPERATION: &str = "find version";
        let url = self.endpoint_url(&["version"], "");
        let response: Option<VersionResponse> = self.call(OPERATION, Method::GET, url, None).await?;
        require(
            response.and_then(|wrapper| wrapper.version),
            OPERATION,
            "version",
        )
    }
}
