use domain_trust_client::models::UserFilter;

use crate::cli::{UserFindArgs, UserUpdateArgs};
use crate::client::{AppContext, CliError, CliResult};

pub(crate) async fn handle_session_user(ctx: &AppContext) -> CliResult<()> {
    let user = ctx.client.find_session_user().await?;
    ctx.output.emit(&user)
}

pub(crate) async fn handle_delete(ctx: &AppContext, id: &str) -> CliResult<()> {
    ctx.client.delete_user(id).await?;
    tracing::info!(id, "user deleted");
    Ok(())
}

pub(crate) async fn handle_find(ctx: &AppContext, args: UserFindArgs) -> CliResult<()> {
    let filter = UserFilter {
        metadata: ctx.metadata.clone(),
        ..UserFilter::from(args)
    };
    let users = ctx.client.find_users(&filter).await?;
    if users.is_empty() {
        tracing::warn!("no users found");
        return Ok(());
    }
    ctx.output.emit(&users)
}

pub(crate) async fn handle_get(ctx: &AppContext, id: &str) -> CliResult<()> {
    let user = ctx.client.find_user_by_id(id).await?;
    ctx.output.emit(&user)
}

pub(crate) async fn handle_update(ctx: &AppContext, args: UserUpdateArgs) -> CliResult<()> {
    let (id, update) = args.into_parts();
    if update.is_empty() {
        return Err(CliError::validation("nothing to update"));
    }
    let user = ctx.client.update_user(&id, &update).await?;
    tracing::info!(id = %id, "user updated");
    ctx.output.emit(&user)
}
