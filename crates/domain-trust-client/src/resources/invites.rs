//! User invitations.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use domain_trust_models::query::to_query_string;
use domain_trust_models::{Invite, InviteFilter};

use super::require;
use crate::client::Client;
use crate::error::ClientResult;

#[derive(Serialize)]
struct InviteRequest<'a> {
    invite: &'a Invite,
}

#[derive(Deserialize)]
struct InviteResponse {
    #[serde(default)]
    invite: Option<Invite>,
}

#[derive(Default, Deserialize)]
struct InvitesResponse {
    #[serde(default)]
    invites: Vec<Invite>,
}

impl Client {
    /// Send an invitation.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn create_invite(&self, invite: &Invite) -> ClientResult<()> {
        const OPERATION: &str = "create invite";
        let body = self.encode_body(OPERATION, &InviteRequest { invite })?;
        let url = self.endpoint_url(&["invites"], "");
        self.call_empty(OPERATION, Method::POST, url, Some(body))
            .await
    }

    /// Invitations matching `filter`.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the body cannot be decoded.
    pub async fn find_invites(&self, filter: &InviteFilter) -> ClientResult<Vec<Invite>> {
        const OPERATION: &str = "find invites";
        let url = self.endpoint_url(&["invites"], &to_query_string(filter));
        let response: Option<InvitesResponse> = self.call(OPERATION, Method::GET, url, None).await?;
        Ok(response.unwrap_or_default().invites)
    }

    /// A single invitation by identifier.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the response carries no invite.
    pub async fn find_invite_by_id(&self, id: &str) -> ClientResult<Invite> {
        const OPERATION: &str = "find invite";
        let url = self.endpoint_url(&["invites", id], "");
        let response: Option<InviteResponse> = self.call(OPERATION, Method::GET, url, None).await?;
        require(
            response.and_then(|wrapper| wrapper.invite),
            OPERATION,
            "invite",
        )
    }

    /// Revoke an invitation.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn delete_invite(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint_url(&["invites", id], "");
        self.call_empty("delete invite", Method::DELETE, url, None)
            .await
    }
}
