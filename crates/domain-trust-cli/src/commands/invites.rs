use domain_trust_client::models::{Invite, InviteFilter};

use crate::cli::{InviteCreateArgs, InviteFindArgs};
use crate::client::{AppContext, CliResult};

pub(crate) async fn handle_create(ctx: &AppContext, args: InviteCreateArgs) -> CliResult<()> {
    let invite = Invite {
        user_email: args.email,
        user_first_name: args.first_name.unwrap_or_default(),
        user_last_name: args.last_name.unwrap_or_default(),
        user_organization_id: args.organization_id.unwrap_or_default(),
        user_role: args.role.unwrap_or_default(),
        ..Invite::default()
    };
    ctx.client.create_invite(&invite).await?;
    tracing::info!(email = %invite.user_email, "invite sent");
    Ok(())
}

pub(crate) async fn handle_delete(ctx: &AppContext, id: &str) -> CliResult<()> {
    ctx.client.delete_invite(id).await?;
    tracing::info!(id, "invite deleted");
    Ok(())
}

pub(crate) async fn handle_find(ctx: &AppContext, args: InviteFindArgs) -> CliResult<()> {
    let filter = InviteFilter {
        metadata: ctx.metadata.clone(),
        ..InviteFilter::from(args)
    };
    let invites = ctx.client.find_invites(&filter).await?;
    if invites.is_empty() {
        tracing::warn!("no invites found");
        return Ok(());
    }
    ctx.output.emit(&invites)
}

pub(crate) async fn handle_get(ctx: &AppContext, id: &str) -> CliResult<()> {
    let invite = ctx.client.find_invite_by_id(id).await?;
    ctx.output.emit(&invite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{context_for, written_output};
    use anyhow::Result;
    use domain_trust_test_support::bodies::JSON;
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn create_posts_invite() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/invites");
            then.status(201);
        });

        let dir = TempDir::new()?;
        let ctx = context_for(&server.url("/api"), &dir)?;
        handle_create(
            &ctx,
            InviteCreateArgs {
                email: "new@example.org".into(),
                first_name: Some("Grace".into()),
                last_name: None,
                organization_id: Some("org-1".into()),
                role: None,
            },
        )
        .await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn find_filters_by_email() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/invites");
            then.status(200)
                .header("content-type", JSON)
                .json_body(json!({
                    "invites": [{ "id": "inv-1", "userEmail": "new@example.org" }]
                }));
        });

        let dir = TempDir::new()?;
        let ctx = context_for(&server.url("/api"), &dir)?;
        handle_find(&ctx, InviteFindArgs::default()).await?;

        let output = written_output(&dir)?;
        assert!(output.contains("id: inv-1"));
        assert!(output.contains("userEmail: new@example.org"));
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn empty_result_writes_nothing() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/invites");
            then.status(200)
                .header("content-type", JSON)
                .json_body(json!({ "invites": [] }));
        });

        let dir = TempDir::new()?;
        let ctx = context_for(&server.url("/api"), &dir)?;
        handle_find(&ctx, InviteFindArgs::default()).await?;
        assert!(written_output(&dir).is_err());
        Ok(())
    }
}
