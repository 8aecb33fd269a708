use domain_trust_client::CLIENT_VERSION;
use serde::Serialize;

use crate::client::{AppContext, CliResult};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionReport<'a> {
    api_version: String,
    client_version: &'a str,
}

pub(crate) async fn handle_version(ctx: &AppContext) -> CliResult<()> {
    let api_version = ctx.client.find_version().await?;
    ctx.output.emit(&VersionReport {
        api_version,
        client_version: CLIENT_VERSION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{context_for, written_output};
    use anyhow::Result;
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn version_reports_api_and_client() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/version");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "version": "v7" }));
        });

        let dir = TempDir::new()?;
        let ctx = context_for(&server.url("/api"), &dir)?;
        handle_version(&ctx)
            .await
            .map_err(|err| anyhow::anyhow!(err.display_message()))?;

        let output = written_output(&dir)?;
        assert!(output.contains("apiVersion: v7"));
        assert!(output.contains("clientVersion:"));
        mock.assert();
        Ok(())
    }
}
