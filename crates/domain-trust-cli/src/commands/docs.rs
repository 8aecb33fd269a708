use anyhow::Context;
use domain_trust_client::DOCS_URL;
use tokio::process::Command;

use crate::client::{CliError, CliResult};

const NO_ARGS: &[&str] = &[];
const WINDOWS_START: &[&str] = &["/c", "start"];

/// Program and leading arguments that open a URL on `os`.
fn opener_for(os: &str) -> (&'static str, &'static [&'static str]) {
    match os {
        "macos" => ("open", NO_ARGS),
        "windows" => ("cmd", WINDOWS_START),
        _ => ("xdg-open", NO_ARGS),
    }
}

pub(crate) async fn handle_docs() -> CliResult<()> {
    let (program, args) = opener_for(std::env::consts::OS);
    let mut child = Command::new(program)
        .args(args)
        .arg(DOCS_URL)
        .spawn()
        .with_context(|| format!("failed to open browser to {DOCS_URL}"))
        .map_err(CliError::failure)?;
    tracing::info!(url = DOCS_URL, "browser opened");

    let status = child
        .wait()
        .await
        .context("browser launcher did not exit cleanly")
        .map_err(CliError::failure)?;
    if !status.success() {
        tracing::warn!(%status, program, "browser launcher reported failure");
    }
    Ok(())
}
