//! The scan pipeline.
//!
//! Domain stream -> de-dup -> work queue -> N parallel workers (resolve ->
//! wildcard probe -> analyze) -> result queue -> single consumer (filter +
//! render). Outcomes are emitted in completion order, not input order; the
//! lone consumer is the single point of output sequencing.

use std::collections::HashSet;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::warn;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, Mutex};

use crate::analysis::{analyze, Analysis};
use crate::config::DOMAIN_DEADLINE;
use crate::dns::{Resolve, ResolutionResult, RECORD_BATTERY};
use crate::error_handling::{
    categorize_domain_error, DomainError, ErrorType, InfoType, ProcessingStats,
};
use crate::output;
use crate::wildcard::WildcardProber;

/// A completed scan for one domain: the raw record set plus its analysis.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    /// The aggregated DNS record set.
    pub resolution: ResolutionResult,
    /// The derived security analysis.
    pub analysis: Analysis,
}

/// Values consumed by [`scan`]; flag syntax lives in [`crate::Config`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Worker pool size.
    pub concurrency: usize,
    /// Render JSON documents instead of text blocks.
    pub json: bool,
    /// Drop outcomes that are not flagged as dangling.
    pub only_dangling: bool,
}

/// Shared collaborators handed to every worker.
#[derive(Clone)]
pub struct ScanContext {
    /// The resolution capability (real client or a test double).
    pub resolver: Arc<dyn Resolve>,
    /// Wildcard prober shared across workers.
    pub prober: Arc<WildcardProber>,
    /// Diagnostic side channel for skips and findings.
    pub stats: Arc<ProcessingStats>,
    /// Count of domains fully processed, for progress reporting.
    pub completed: Arc<AtomicUsize>,
}

/// Counts describing a completed scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanSummary {
    /// Unique domains fed into the pipeline.
    pub domains: usize,
    /// Outcomes written to the output stream (after filtering).
    pub emitted: usize,
    /// Outcomes flagged as potentially dangling.
    pub dangling: usize,
    /// Domains that failed at the domain level and never produced an outcome.
    pub skipped: usize,
}

/// Runs the full pipeline over a line-oriented domain stream.
///
/// Input lines are trimmed; blank lines and `#` comments are skipped;
/// trailing root dots are stripped; duplicates are silently dropped. The
/// writer is handed to the lone consumer task and returned once the stream
/// is fully drained, so no outcome can be lost or interleaved.
///
/// # Errors
///
/// Returns an error if the input stream fails mid-read (after letting
/// in-flight domains drain) or if the output task is lost.
pub async fn scan<I, W>(
    opts: ScanOptions,
    ctx: ScanContext,
    input: I,
    output: W,
) -> anyhow::Result<(W, ScanSummary)>
where
    I: AsyncBufRead + Unpin,
    W: Write + Send + 'static,
{
    let pool_size = opts.concurrency.max(1);
    let (work_tx, work_rx) = mpsc::channel::<String>(pool_size);
    let work_rx = Arc::new(Mutex::new(work_rx));
    // Bounded: when rendering falls behind, workers block here instead of
    // buffering completed outcomes without limit.
    let (result_tx, result_rx) = mpsc::channel::<ScanOutcome>(pool_size);

    let consumer = spawn_consumer(&opts, Arc::clone(&ctx.stats), result_rx, output);

    let mut workers = FuturesUnordered::new();
    for _ in 0..pool_size {
        let work_rx = Arc::clone(&work_rx);
        let result_tx = result_tx.clone();
        let ctx = ctx.clone();
        workers.push(tokio::spawn(async move {
            loop {
                // Hold the lock only while receiving, so any idle worker can
                // take the next domain the moment it arrives.
                let domain = { work_rx.lock().await.recv().await };
                let Some(domain) = domain else { break };
                process_domain(&domain, &ctx, &result_tx).await;
            }
        }));
    }
    drop(result_tx);

    // The feeder owns the de-dup set; workers never touch it.
    let mut seen: HashSet<String> = HashSet::new();
    let mut domains = 0usize;
    let mut read_error: Option<std::io::Error> = None;
    let mut lines = input.lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                let name = trimmed.trim_end_matches('.');
                if name.is_empty() {
                    continue;
                }
                if !seen.insert(name.to_string()) {
                    ctx.stats.increment_info(InfoType::DuplicateDropped);
                    continue;
                }
                domains += 1;
                if work_tx.send(name.to_string()).await.is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                // Stop feeding, but let everything already in flight drain
                // before surfacing the failure.
                read_error = Some(e);
                break;
            }
        }
    }
    drop(work_tx);

    // Closing the work queue lets workers drain and exit; their result
    // senders drop with them, which closes the result queue; the consumer
    // then drains to the end. Nothing in flight is dropped.
    while let Some(joined) = workers.next().await {
        if let Err(join_error) = joined {
            warn!("Worker task panicked: {join_error:?}");
        }
    }

    let (writer, received, emitted, dangling) = consumer
        .await
        .map_err(|e| anyhow::anyhow!("Output task failed: {e}"))?;

    if let Some(e) = read_error {
        return Err(anyhow::Error::new(e).context("Failed to read from domain input"));
    }

    Ok((
        writer,
        ScanSummary {
            domains,
            emitted,
            dangling,
            skipped: domains.saturating_sub(received),
        },
    ))
}

/// Resolves, probes, and analyzes one domain, then forwards the outcome.
///
/// Domain-level failures are logged to the diagnostic side channel and the
/// domain is skipped; nothing partial enters the result stream.
async fn process_domain(domain: &str, ctx: &ScanContext, result_tx: &mpsc::Sender<ScanOutcome>) {
    let work = async {
        let mut resolution = ctx.resolver.resolve(domain, &RECORD_BATTERY).await?;
        resolution.has_wildcard = ctx.prober.probe(ctx.resolver.as_ref(), domain).await;
        Ok::<ResolutionResult, DomainError>(resolution)
    };

    // The deadline bounds the whole per-domain exchange. Expiry drops the
    // in-flight future, which aborts any remaining per-type queries without
    // retry; the partial record set is discarded.
    let mut resolution = match tokio::time::timeout(DOMAIN_DEADLINE, work).await {
        Ok(Ok(resolution)) => resolution,
        Ok(Err(e)) => {
            warn!("Skipping {domain}: {e}");
            ctx.stats.increment_error(categorize_domain_error(&e));
            return;
        }
        Err(_) => {
            warn!(
                "Skipping {domain}: deadline of {}s exceeded",
                DOMAIN_DEADLINE.as_secs()
            );
            ctx.stats.increment_error(ErrorType::DomainDeadlineExceeded);
            return;
        }
    };

    let analysis = analyze(&resolution);
    resolution.is_dangling = analysis.is_dangling;
    if analysis.is_dangling {
        ctx.stats.increment_info(InfoType::DanglingDetected);
    }
    if resolution.has_wildcard {
        ctx.stats.increment_info(InfoType::WildcardDetected);
    }

    ctx.completed.fetch_add(1, Ordering::SeqCst);
    // A send can only fail when the pipeline is already tearing down.
    let _ = result_tx
        .send(ScanOutcome {
            resolution,
            analysis,
        })
        .await;
}

/// Spawns the lone consumer that sequences all output.
///
/// Returns (writer, outcomes received, outcomes emitted, dangling count)
/// once the result queue closes.
fn spawn_consumer<W>(
    opts: &ScanOptions,
    stats: Arc<ProcessingStats>,
    mut result_rx: mpsc::Receiver<ScanOutcome>,
    mut writer: W,
) -> tokio::task::JoinHandle<(W, usize, usize, usize)>
where
    W: Write + Send + 'static,
{
    let json = opts.json;
    let only_dangling = opts.only_dangling;
    tokio::spawn(async move {
        let mut received = 0usize;
        let mut emitted = 0usize;
        let mut dangling = 0usize;
        while let Some(outcome) = result_rx.recv().await {
            received += 1;
            if outcome.analysis.is_dangling {
                dangling += 1;
            }
            if only_dangling && !outcome.analysis.is_dangling {
                continue;
            }
            let written = if json {
                output::write_json(&mut writer, &outcome)
            } else {
                output::write_text(&mut writer, &outcome)
            };
            match written {
                Ok(()) => emitted += 1,
                Err(e) => {
                    warn!(
                        "Failed to render result for {}: {e}",
                        outcome.resolution.domain
                    );
                    stats.increment_error(ErrorType::OutputWriteError);
                }
            }
        }
        (writer, received, emitted, dangling)
    })
}
