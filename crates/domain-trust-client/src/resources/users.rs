//! User accounts.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use domain_trust_models::query::to_query_string;
use domain_trust_models::{User, UserFilter, UserUpdate};

use super::require;
use crate::client::Client;
use crate::error::ClientResult;

#[derive(Serialize)]
struct UpdateUserRequest<'a> {
    user: &'a UserUpdate,
}

#[derive(Deserialize)]
struct UserResponse {
    #[serde(default)]
    user: Option<User>,
}

#[derive(Default, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    users: Vec<User>,
}

impl Client {
    /// The user the API key belongs to.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the response carries no user.
    pub async fn find_session_user(&self) -> ClientResult<User> {
        const OPERATION: &str = "find session user";
        let url = self.endpoint_url(&["user"], "");
        let response: Option<UserResponse> = self.call(OPERATION, Method::GET, url, None).await?;
        require(response.and_then(|wrapper| wrapper.user), OPERATION, "user")
    }

    /// Users matching `filter`.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the body cannot be decoded.
    pub async fn find_users(&self, filter: &UserFilter) -> ClientResult<Vec<User>> {
        const OPERATION: &str = "find users";
        let url = self.endpoint_url(&["users"], &to_query_string(filter));
        let response: Option<UsersResponse> = self.call(OPERATION, Method::GET, url, None).await?;
        Ok(response.unwrap_or_default().users)
    }

    /// A single user by identifier.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the response carries no user.
    pub async fn find_user_by_id(&self, id: &str) -> ClientResult<User> {
        const OPERATION: &str = "find user";
        let url = self.endpoint_url(&["users", id], "");
        let response: Option<UserResponse> = self.call(OPERATION, Method::GET, url, None).await?;
        require(response.and_then(|wrapper| wrapper.user), OPERATION, "user")
    }

    /// Apply a partial update and return the stored user.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the response carries no user.
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> ClientResult<User> {
        const OPERATION: &str = "update user";
        let body = self.encode_body(OPERATION, &UpdateUserRequest { user: update })?;
        let url = self.endpoint_url(&["users", id], "");
        let response: Option<UserResponse> =
            self.call(OPERATION, Method::PATCH, url, Some(body)).await?;
        require(response.and_then(|wrapper| wrapper.user), OPERATION, "user")
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint_url(&["users", id], "");
        self.call_empty("delete user", Method::DELETE, url, None).await
    }
}
