use std::io::Read;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use domain_trust_client::models::{Domain, DomainFilter, MAX_METADATA_LIMIT};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::cli::DomainFindArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::import::read_domains_csv;

const PROGRESS_INTERVAL: Duration = Duration::from_secs(10);

pub(crate) async fn handle_create<R: Read>(ctx: &AppContext, input: R) -> CliResult<()> {
    let submissions = read_domains_csv(input)
        .map_err(|err| CliError::failure(err.context("failed to parse CSV from stdin")))?;
    if submissions.is_empty() {
        return Err(CliError::validation("no domain rows found in CSV"));
    }

    tracing::info!(count = submissions.len(), "submitting domains");
    let rejected = ctx.client.create_domains(&submissions).await?;
    if rejected.is_empty() {
        tracing::info!("domains created");
        return Ok(());
    }

    tracing::warn!(rejected = rejected.len(), "domains created with errors");
    ctx.output.emit(&rejected)
}

pub(crate) async fn handle_find(ctx: &AppContext, args: DomainFindArgs) -> CliResult<()> {
    let all = args.all;
    let filter = DomainFilter {
        metadata: ctx.metadata.clone(),
        ..DomainFilter::from(args)
    };

    let domains = if all {
        find_all(ctx, filter).await?
    } else {
        ctx.client.find_domains(&filter).await?
    };

    if domains.is_empty() {
        tracing::warn!("no domains found");
        return Ok(());
    }
    ctx.output.emit(&domains)
}

async fn find_all(ctx: &AppContext, mut filter: DomainFilter) -> CliResult<Vec<Domain>> {
    filter.metadata.limit = MAX_METADATA_LIMIT;
    tracing::info!("starting domain retrieval");

    let found = Arc::new(AtomicUsize::new(0));
    let stop = ctx.cancel.child_token();
    let progress = spawn_progress(Arc::clone(&found), stop.clone());

    let mut pager = ctx
        .client
        .find_domains_paged(filter)
        .with_cancellation(ctx.cancel.clone());
    let mut domains = Vec::new();
    while pager.advance().await {
        if let Some(domain) = pager.take_current() {
            domains.push(domain);
            found.store(domains.len(), Ordering::Relaxed);
        }
    }

    stop.cancel();
    if let Err(err) = progress.await {
        tracing::debug!(error = %err, "progress task ended abnormally");
    }
    if let Some(err) = pager.take_error() {
        return Err(err.into());
    }

    tracing::info!(domains_found = domains.len(), "retrieved domains");
    Ok(domains)
}

fn spawn_progress(found: Arc<AtomicUsize>, stop: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PROGRESS_INTERVAL);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            tokio::select! {
                () = stop.cancelled() => break,
                _ = ticker.tick() => {
                    tracing::info!(
                        domains_found = found.load(Ordering::Relaxed),
                        "tracking domains"
                    );
                }
            }
        }
    })
}
