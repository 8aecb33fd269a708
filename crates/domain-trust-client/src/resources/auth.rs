//! Credential exchange.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use domain_trust_models::{ApiKey, Login};

use super::require;
use crate::client::Client;
use crate::error::ClientResult;

#[derive(Serialize)]
struct LoginRequest<'a> {
    login: &'a Login,
}

#[derive(Deserialize)]
struct KeyResponse {
    #[serde(default)]
    key: Option<ApiKey>,
}

impl Client {
    /// Exchange an email and password for an API key.
    ///
    /// # Errors
    ///
    /// Fails when the credentials are rejected or the response carries no key.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<ApiKey> {
        const OPERATION: &str = "login";
        let login = Login {
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = self.encode_body(OPERATION, &LoginRequest { login: &login })?;
        let url = self.endpoint_url(&["auth", "login"], "");
        let response: Option<KeyResponse> =
            self.call(OPERATION, Method::POST, url, Some(body)).await?;
        require(response.and_then(|wrapper| wrapper.key), OPERATION, "key")
    }
}
