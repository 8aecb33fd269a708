use anyhow::{Result, anyhow};
use domain_trust_client::models::{
    DomainFilter, InviteFilter, MetadataFilter, OrganizationFilter, UserUpdate,
};
use domain_trust_client::{Client, ClientConfig, ContentType};
use domain_trust_test_support::bodies::JSON;
use domain_trust_test_support::fixtures::{sample_api_key, sample_domains, sample_user};
use httpmock::Method::PATCH;
use httpmock::prelude::*;
use serde_json::json;

fn client(server: &MockServer) -> Result<Client> {
    Ok(Client::new(ClientConfig {
        base_url: server.url("/api"),
        api_key: Some("test-key".into()),
        content_type: ContentType::Json,
        ..ClientConfig::default()
    })?)
}

#[tokio::test]
async fn find_domains_sends_filter_as_query() -> Result<()> {
    let server = MockServer::start_async().await;
    let domains = sample_domains(&["a.example"]);
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/domains")
            .query_param("limit", "25")
            .query_param("rootDomain", "a.example")
            .query_param("onlyBlocked", "true");
        then.status(200)
            .header("content-type", JSON)
            .json_body(json!({ "domains": domains }));
    });

    let filter = DomainFilter {
        metadata: MetadataFilter {
            limit: 25,
            ..MetadataFilter::default()
        },
        root_domain: "a.example".into(),
        only_blocked: true,
        ..DomainFilter::default()
    };
    let found = client(&server)?.find_domains(&filter).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].submission.domain, "a.example");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn paged_search_follows_tokens_until_exhausted() -> Result<()> {
    let server = MockServer::start_async().await;
    let first = sample_domains(&["one.example", "two.example"]);
    let second = sample_domains(&["three.example"]);

    let first_page = server.mock(|when, then| {
        when.method(GET)
            .path("/api/domains")
            .query_param("tld", "example")
            .query_param_missing("pageToken");
        then.status(200)
            .header("content-type", JSON)
            .json_body(json!({ "domains": first, "nextPageToken": "page-2" }));
    });
    let second_page = server.mock(|when, then| {
        when.method(GET)
            .path("/api/domains")
            .query_param("tld", "example")
            .query_param("pageToken", "page-2");
        then.status(200)
            .header("content-type", JSON)
            .json_body(json!({ "domains": second, "nextPageToken": "" }));
    });

    let mut pager = client(&server)?.find_domains_paged(DomainFilter {
        tld: "example".into(),
        ..DomainFilter::default()
    });
    let mut names = Vec::new();
    while pager.advance().await {
        let domain = pager.current().ok_or_else(|| anyhow!("current domain"))?;
        names.push(domain.submission.domain.clone());
    }
    assert!(pager.last_error().is_none());
    assert_eq!(names, vec!["one.example", "two.example", "three.example"]);
    first_page.assert();
    second_page.assert();
    Ok(())
}

#[tokio::test]
async fn paged_search_records_failures() -> Result<()> {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/domains");
        then.status(500).body("exploded");
    });

    let mut pager = client(&server)?.find_domains_paged(DomainFilter::default());
    assert!(!pager.advance().await);
    let err = pager
        .take_error()
        .ok_or_else(|| anyhow!("error recorded"))?;
    assert_eq!(err.status(), Some(500));
    assert!(!pager.advance().await);
    Ok(())
}

#[tokio::test]
async fn login_wraps_credentials_and_unwraps_key() -> Result<()> {
    let server = MockServer::start_async().await;
    let key = sample_api_key();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200)
            .header("content-type", JSON)
            .json_body(json!({ "key": key }));
    });

    let issued = client(&server)?
        .login("analyst@example.org", "hunter2")
        .await?;
    assert_eq!(issued.key, "dt_secret");
    assert_eq!(issued.user_id, "user-1");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn update_user_patches_by_id() -> Result<()> {
    let server = MockServer::start_async().await;
    let user = sample_user();
    let mock = server.mock(|when, then| {
        when.method(PATCH).path("/api/users/user-1");
        then.status(200)
            .header("content-type", JSON)
            .json_body(json!({ "user": user }));
    });

    let updated = client(&server)?
        .update_user("user-1", &UserUpdate {
            first_name: Some("Ada".into()),
            ..UserUpdate::default()
        })
        .await?;
    assert_eq!(updated.first_name, "Ada");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn organization_filter_sends_empty_fields() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/organizations")
            .query_param("name", "")
            .query_param("role", "registrar");
        then.status(200)
            .header("content-type", JSON)
            .json_body(json!({ "organizations": [{ "id": "org-1", "name": "Acme", "role": "registrar" }] }));
    });

    let found = client(&server)?
        .find_organizations(&OrganizationFilter {
            role: "registrar".into(),
            ..OrganizationFilter::default()
        })
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Acme");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn invites_list_and_fetch() -> Result<()> {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/api/invites")
            .query_param("userEmail", "new@example.org");
        then.status(200)
            .header("content-type", JSON)
            .json_body(json!({ "invites": [{ "id": "inv-1", "userEmail": "new@example.org" }] }));
    });
    let single = server.mock(|when, then| {
        when.method(GET).path("/api/invites/inv-1");
        then.status(200)
            .header("content-type", JSON)
            .json_body(json!({ "invite": { "id": "inv-1", "userEmail": "new@example.org" } }));
    });

    let client = client(&server)?;
    let invites = client
        .find_invites(&InviteFilter {
            user_email: "new@example.org".into(),
            ..InviteFilter::default()
        })
        .await?;
    assert_eq!(invites.len(), 1);
    let invite = client.find_invite_by_id("inv-1").await?;
    assert_eq!(invite.user_email, "new@example.org");
    list.assert();
    single.assert();
    Ok(())
}
