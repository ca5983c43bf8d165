//! domain_recon library: DNS exposure scanning for domain lists
//!
//! This library resolves a fixed battery of DNS record types for each input
//! domain, flags potential dangling CNAMEs (a classic subdomain-takeover
//! vector), classifies CNAME targets against known cloud/SaaS suffixes, and
//! detects wildcard DNS that would mask absence-of-record evidence.
//!
//! # Example
//!
//! ```no_run
//! use domain_recon::{run_scan, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: Some("example.com".to_string()),
//!     concurrency: 10,
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("Scanned {} domains, {} dangling", report.domains, report.dangling);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod analysis;
mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod output;
pub mod scanner;
pub mod wildcard;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use run::{run_scan, ScanReport};

// Internal run module (wires input acquisition to the scan pipeline)
mod run {
    use std::io::IsTerminal;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{bail, Context, Result};
    use log::info;
    use tokio::io::{AsyncRead, BufReader};
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_progress, print_error_statistics};
    use crate::config::{Config, LOGGING_INTERVAL_SECS};
    use crate::dns::DnsClient;
    use crate::error_handling::ProcessingStats;
    use crate::initialization::parse_resolver_addr;
    use crate::scanner::{scan, ScanContext, ScanOptions};
    use crate::wildcard::WildcardProber;

    /// Results of a completed scan run.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// Unique domains fed into the pipeline
        pub domains: usize,
        /// Outcomes written to the output stream (after filtering)
        pub emitted: usize,
        /// Domains flagged as potentially dangling
        pub dangling: usize,
        /// Domains skipped due to domain-level failures
        pub skipped: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a scan with the provided configuration.
    ///
    /// This is the main entry point for the library. Domains come from the
    /// configured single domain, list file, or stdin; results are rendered
    /// to stdout as they complete.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The resolver address is invalid
    /// - The input list file cannot be opened
    /// - No input source is available (stdin is an interactive terminal)
    ///
    /// Failures scoped to a single record type or a single domain are
    /// reported through the log and the end-of-run statistics instead.
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let resolver_addr = parse_resolver_addr(&config.resolver)?;

        let input: Box<dyn AsyncRead + Unpin + Send> = if let Some(domain) = &config.domain {
            Box::new(std::io::Cursor::new(format!("{domain}\n").into_bytes()))
        } else if let Some(list) = &config.list {
            let file = tokio::fs::File::open(list)
                .await
                .with_context(|| format!("Failed to open domain list {}", list.display()))?;
            Box::new(file)
        } else {
            if std::io::stdin().is_terminal() {
                bail!("No input provided. Use --domain, --list, or pipe domains into stdin.");
            }
            Box::new(tokio::io::stdin())
        };

        let client = DnsClient::new(
            resolver_addr,
            Duration::from_secs(config.timeout_seconds),
            config.retries,
        );
        let ctx = ScanContext {
            resolver: Arc::new(client),
            prober: Arc::new(WildcardProber::new()),
            stats: Arc::new(ProcessingStats::new()),
            completed: Arc::new(AtomicUsize::new(0)),
        };

        info!(
            "Scanning via resolver {} with {} workers",
            resolver_addr, config.concurrency
        );
        let start_time = std::time::Instant::now();

        let cancel = CancellationToken::new();
        let progress_cancel = cancel.child_token();
        let completed_for_logging = Arc::clone(&ctx.completed);
        let logging_task = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(std::time::Duration::from_secs(LOGGING_INTERVAL_SECS));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        log_progress(start_time, &completed_for_logging);
                    }
                    _ = progress_cancel.cancelled() => {
                        break;
                    }
                }
            }
        });

        let opts = ScanOptions {
            concurrency: config.concurrency,
            json: config.json,
            only_dangling: config.only_dangling,
        };
        let scan_result = scan(opts, ctx.clone(), BufReader::new(input), std::io::stdout()).await;

        cancel.cancel();
        let _ = logging_task.await;

        let (_, summary) = scan_result?;
        let elapsed_seconds = start_time.elapsed().as_secs_f64();

        log_progress(start_time, &ctx.completed);
        print_error_statistics(&ctx.stats);

        Ok(ScanReport {
            domains: summary.domains,
            emitted: summary.emitted,
            dangling: summary.dangling,
            skipped: summary.skipped,
            elapsed_seconds,
        })
    }
}
