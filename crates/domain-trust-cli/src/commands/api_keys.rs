use chrono::Utc;
use domain_trust_client::models::{ApiKey, ApiKeyFilter};

use crate::cli::{ApiKeyCreateArgs, ApiKeyFindArgs};
use crate::client::{AppContext, CliError, CliResult};

pub(crate) async fn handle_create(ctx: &AppContext, args: ApiKeyCreateArgs) -> CliResult<()> {
    ctx.require_admin()?;
    let key = build_key(ctx, args)?;
    ctx.client.create_api_key(&key).await?;
    tracing::info!("api key created");
    ctx.output.emit(&key)
}

fn build_key(ctx: &AppContext, args: ApiKeyCreateArgs) -> CliResult<ApiKey> {
    if args.expiry < Utc::now() {
        return Err(CliError::validation("expiry can't be in the past"));
    }
    let user_id = match args.user_id {
        Some(_) if !ctx.is_admin() => {
            return Err(CliError::validation(
                "only admins can create api keys for other users",
            ));
        }
        Some(user_id) => user_id,
        None => String::new(),
    };
    Ok(ApiKey {
        expiry: Some(args.expiry),
        user_id,
        ..ApiKey::default()
    })
}

pub(crate) async fn handle_delete(ctx: &AppContext, id: &str) -> CliResult<()> {
    ctx.require_admin()?;
    ctx.client.delete_api_key(id).await?;
    tracing::info!(id, "api key deleted");
    Ok(())
}

pub(crate) async fn handle_find(ctx: &AppContext, args: ApiKeyFindArgs) -> CliResult<()> {
    let filter = ApiKeyFilter {
        metadata: ctx.metadata.clone(),
        ..ApiKeyFilter::from(args)
    };
    let keys = ctx.client.find_api_keys(&filter).await?;
    if keys.is_empty() {
        tracing::warn!("no api keys found");
        return Ok(());
    }
    ctx.output.emit(&keys)
}

pub(crate) async fn handle_get(ctx: &AppContext, id: &str) -> CliResult<()> {
    let key = ctx.client.find_api_key_by_id(id).await?;
    ctx.output.emit(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{context_for, written_output};
    use anyhow::{Result, anyhow};
    use chrono::{Duration, TimeZone};
    use domain_trust_client::models::user::role;
    use domain_trust_test_support::bodies::JSON;
    use domain_trust_test_support::fixtures::sample_api_key;
    use httpmock::Method::DELETE;
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn past_expiry_is_rejected() -> Result<()> {
        let dir = TempDir::new()?;
        let ctx = context_for("http://127.0.0.1:9/api", &dir)?;
        let expiry = Utc
            .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| anyhow!("valid timestamp"))?;
        let err = build_key(
            &ctx,
            ApiKeyCreateArgs {
                expiry,
                user_id: None,
            },
        )
        .err()
        .ok_or_else(|| anyhow!("past expiry must fail"))?;
        assert_eq!(err.display_message(), "expiry can't be in the past");
        Ok(())
    }

    #[test]
    fn other_users_require_an_admin_role() -> Result<()> {
        let dir = TempDir::new()?;
        let mut ctx = context_for("http://127.0.0.1:9/api", &dir)?;
        let args = || ApiKeyCreateArgs {
            expiry: Utc::now() + Duration::days(30),
            user_id: Some("user-2".into()),
        };
        assert!(build_key(&ctx, args()).is_err());

        ctx.profile.user_role = role::ADMIN.into();
        let key = build_key(&ctx, args())?;
        assert_eq!(key.user_id, "user-2");
        Ok(())
    }

    #[tokio::test]
    async fn create_posts_key_and_prints_it() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/keys");
            then.status(201);
        });

        let dir = TempDir::new()?;
        let ctx = context_for(&server.url("/api"), &dir)?;
        handle_create(
            &ctx,
            ApiKeyCreateArgs {
                expiry: Utc::now() + Duration::days(30),
                user_id: None,
            },
        )
        .await?;

        assert!(written_output(&dir)?.contains("expiry:"));
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn get_prints_the_key() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/keys/key-1");
            then.status(200)
                .header("content-type", JSON)
                .json_body(json!({ "key": sample_api_key() }));
        });

        let dir = TempDir::new()?;
        let ctx = context_for(&server.url("/api"), &dir)?;
        handle_get(&ctx, "key-1").await?;

        let output = written_output(&dir)?;
        assert!(output.contains("userID: user-1"));
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_admin_gated() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/api/keys/key-1");
            then.status(204);
        });

        let dir = TempDir::new()?;
        let mut ctx = context_for(&server.url("/api"), &dir)?;
        ctx.profile.user_role = role::TRIAL.into();
        assert!(handle_delete(&ctx, "key-1").await.is_err());
        mock.assert_hits(0);

        ctx.profile.user_role = role::ADMIN.into();
        handle_delete(&ctx, "key-1").await?;
        mock.assert();
        Ok(())
    }
}
