//! Reporting organizations.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use domain_trust_models::query::to_query_string;
use domain_trust_models::{Organization, OrganizationFilter, OrganizationUpdate};

use super::require;
use crate::client::Client;
use crate::error::ClientResult;

#[derive(Serialize)]
struct OrganizationRequest<'a, T: Serialize> {
    organization: &'a T,
}

#[derive(Deserialize)]
struct OrganizationResponse {
    #[serde(default)]
    organization: Option<Organization>,
}

#[derive(Default, Deserialize)]
struct OrganizationsResponse {
    #[serde(default)]
    organizations: Vec<Organization>,
}

impl Client {
    /// Create an organization and return the stored record.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the response carries no organization.
    pub async fn create_organization(
        &self,
        organization: &Organization,
    ) -> ClientResult<Organization> {
        const OPERATION: &str = "create organization";
        let body = self.encode_body(OPERATION, &OrganizationRequest { organization })?;
        let url = self.endpoint_url(&["organizations"], "");
        let response: Option<OrganizationResponse> =
            self.call(OPERATION, Method::POST, url, Some(body)).await?;
        require(
            response.and_then(|wrapper| wrapper.organization),
            OPERATION,
            "organization",
        )
    }

    /// Organizations matching `filter`.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the body cannot be decoded.
    pub async fn find_organizations(
        &self,
        filter: &OrganizationFilter,
    ) -> ClientResult<Vec<Organization>> {
        const OPERATION: &str = "find organizations";
        let url = self.endpoint_url(&["organizations"], &to_query_string(filter));
        let response: Option<OrganizationsResponse> =
            self.call(OPERATION, Method::GET, url, None).await?;
        Ok(response.unwrap_or_default().organizations)
    }

    /// A single organization by identifier.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the response carries no organization.
    pub async fn find_organization_by_id(&self, id: &str) -> ClientResult<Organization> {
        const OPERATION: &str = "find organization";
        let url = self.endpoint_url(&["organizations", id], "");
        let response: Option<OrganizationResponse> =
            self.call(OPERATION, Method::GET, url, None).await?;
        require(
            response.and_then(|wrapper| wrapper.organization),
            OPERATION,
            "organization",
        )
    }

    /// Apply a partial update and return the stored organization.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the response carries no organization.
    pub async fn update_organization(
        &self,
        id: &str,
        update: &OrganizationUpdate,
    ) -> ClientResult<Organization> {
        const OPERATION: &str = "update organization";
        let body = self.encode_body(OPERATION, &OrganizationRequest {
            organization: update,
        })?;
        let url = self.endpoint_url(&["organizations", id], "");
        let response: Option<OrganizationResponse> =
            self.call(OPERATION, Method::PATCH, url, Some(body)).await?;
        require(
            response.and_then(|wrapper| wrapper.organization),
            OPERATION,
            "organization",
        )
    }

    /// Delete an organization.
    ///
    /// # Errors
    ///
    /// Fails when the call fails.
    pub async fn delete_organization(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint_url(&["organizations", id], "");
        self.call_empty("delete organization", Method::DELETE, url, None)
            .await
    }
}
