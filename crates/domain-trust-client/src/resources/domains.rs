//! Domain reports.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use domain_trust_models::query::{encode_pairs, query_pairs};
use domain_trust_models::{Domain, DomainError, DomainFilter, DomainSubmission};

use crate::client::Client;
use crate::error::ClientResult;
use crate::pager::{Page, PageSource, Pager};

const PAGE_TOKEN_PARAM: &str = "pageToken";

#[derive(Serialize)]
struct CreateDomainsRequest<'a> {
    domains: &'a [DomainSubmission],
}

#[derive(Default, Deserialize)]
struct CreateDomainsResponse {
    #[serde(default)]
    errors: Vec<DomainError>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DomainsResponse {
    #[serde(default)]
    domains: Vec<Domain>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl Client {
    /// Submit domain reports in bulk.
    ///
    /// Returns the per-domain failures; an empty list means every report was
    /// accepted.
    ///
    /// # Errors
    ///
    /// Fails when the call as a whole fails.
    pub async fn create_domains(
        &self,
        submissions: &[DomainSubmission],
    ) -> ClientResult<Vec<DomainError>> {
        const OPERATION: &str = "create domains";
        let body = self.encode_body(OPERATION, &CreateDomainsRequest {
            domains: submissions,
        })?;
        let url = self.endpoint_url(&["domains"], "");
        let response: Option<CreateDomainsResponse> =
            self.call(OPERATION, Method::POST, url, Some(body)).await?;
        Ok(response.unwrap_or_default().errors)
    }

    /// One page of domains matching `filter`.
    ///
    /// # Errors
    ///
    /// Fails when the call fails or the body cannot be decoded.
    pub async fn find_domains(&self, filter: &DomainFilter) -> ClientResult<Vec<Domain>> {
        Ok(self.fetch_domain_page(filter, "").await?.items)
    }

    /// Lazily iterate every domain matching `filter`, page by page.
    ///
    /// Nothing is fetched until the first [`Pager::advance`].
    #[must_use]
    pub fn find_domains_paged(&self, filter: DomainFilter) -> Pager<DomainPages> {
        Pager::new(DomainPages {
            client: self.clone(),
            filter,
        })
    }

    pub(crate) async fn fetch_domain_page(
        &self,
        filter: &DomainFilter,
        token: &str,
    ) -> ClientResult<Page<Domain>> {
        const OPERATION: &str = "find domains";
        let mut pairs = query_pairs(filter);
        if !token.is_empty() {
            pairs.insert(PAGE_TOKEN_PARAM, token.to_string());
        }
        let url = self.endpoint_url(&["domains"], &encode_pairs(&pairs));
        let response: Option<DomainsResponse> = self.call(OPERATION, Method::GET, url, None).await?;
        let response = response.unwrap_or_default();
        tracing::debug!(
            count = response.domains.len(),
            has_next = response.next_page_token.as_deref().is_some_and(|next| !next.is_empty()),
            "domain page fetched"
        );
        Ok(Page {
            items: response.domains,
            next_page_token: response.next_page_token,
        })
    }
}

/// [`PageSource`] over the domain search endpoint.
#[derive(Debug, Clone)]
pub struct DomainPages {
    client: Client,
    filter: DomainFilter,
}

impl DomainPages {
    /// Filter applied to every page.
    #[must_use]
    pub const fn filter(&self) -> &DomainFilter {
        &self.filter
    }
}

#[async_trait]
impl PageSource for DomainPages {
    type Item = Domain;

    async fn fetch_page(&mut self, token: &str) -> ClientResult<Page<Domain>> {
        self.client.fetch_domain_page(&self.filter, token).await
    }
}
