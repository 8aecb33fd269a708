use std::collections::BTreeMap;

use crate::client::{AppContext, CliError, CliResult};
use crate::profile::ProfileKey;

pub(crate) fn handle_get(ctx: &AppContext, key: ProfileKey) -> CliResult<()> {
    let value = BTreeMap::from([(key.field(), ctx.profile.get(key))]);
    ctx.output.emit(&value)
}

pub(crate) fn handle_set(ctx: &AppContext, key: ProfileKey, value: String) -> CliResult<()> {
    let mut profile = ctx.profile.clone();
    profile.set(key, value);
    profile.save().map_err(CliError::failure)?;
    tracing::info!(key = %key, path = %profile.path().display(), "config updated");
    Ok(())
}

pub(crate) fn handle_show(ctx: &AppContext) -> CliResult<()> {
    ctx.output.emit(&ctx.profile)
}
