//! Organization management. Mutations require an admin profile.

use domain_trust_client::models::{Organization, OrganizationFilter};

use crate::cli::{OrganizationCreateArgs, OrganizationFindArgs, OrganizationUpdateArgs};
use crate::client::{AppContext, CliResult};

pub(crate) async fn handle_create(ctx: &AppContext, args: OrganizationCreateArgs) -> CliResult<()> {
    ctx.require_admin()?;
    let organization = Organization {
        name: args.name,
        rating: args.rating.unwrap_or_default(),
        role: args.role.unwrap_or_default(),
        status: args.status.unwrap_or_default(),
        user_quota: args.user_quota.unwrap_or_default(),
        ..Organization::default()
    };
    let created = ctx.client.create_organization(&organization).await?;
    tracing::info!(id = %created.id, "organization created");
    ctx.output.emit(&created)
}

pub(crate) async fn handle_delete(ctx: &AppContext, id: &str) -> CliResult<()> {
    ctx.require_admin()?;
    ctx.client.delete_organization(id).await?;
    tracing::info!(id, "organization deleted");
    Ok(())
}

pub(crate) async fn handle_find(ctx: &AppContext, args: OrganizationFindArgs) -> CliResult<()> {
    let filter = OrganizationFilter {
        metadata: ctx.metadata.clone(),
        ..OrganizationFilter::from(args)
    };
    let organizations = ctx.client.find_organizations(&filter).await?;
    if organizations.is_empty() {
        tracing::warn!("no organizations found");
        return Ok(());
    }
    ctx.output.emit(&organizations)
}

pub(crate) async fn handle_get(ctx: &AppContext, id: &str) -> CliResult<()> {
    let organization = ctx.client.find_organization_by_id(id).await?;
    ctx.output.emit(&organization)
}

pub(crate) async fn handle_update(ctx: &AppContext, args: OrganizationUpdateArgs) -> CliResult<()> {
    ctx.require_admin()?;
    let (id, update) = args.into_parts();
    let updated = ctx.client.update_organization(&id, &update).await?;
    tracing::info!(id = %id, "organization updated");
    ctx.output.emit(&updated)
}
