use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

// constants (used as defaults)
/// Seconds between periodic progress log lines.
pub const LOGGING_INTERVAL_SECS: u64 = 5;

/// Hard ceiling on one domain's resolution plus its wildcard probe.
///
/// Independent of the per-query timeout so a single unresponsive domain
/// cannot hold a worker indefinitely.
pub const DOMAIN_DEADLINE: Duration = Duration::from_secs(10);

/// Fixed pause between retry attempts for a failed query.
pub const RETRY_PAUSE_MS: u64 = 50;

/// Resolver queried when none is given on the command line.
pub const DEFAULT_RESOLVER: &str = "8.8.8.8:53";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have sensible defaults and can be overridden via command-line flags.
///
/// # Examples
///
/// ```bash
/// # Scan a single domain
/// domain_recon -d example.com
///
/// # Scan a list with more workers, JSON output
/// domain_recon -l domains.txt -c 50 --json
///
/// # Pipe from stdin and keep only takeover candidates
/// cat domains.txt | domain_recon --only-dangling
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_recon",
    about = "Scans domains for dangling CNAMEs, wildcard DNS, and takeover exposure."
)]
pub struct Config {
    /// Single domain to scan
    #[arg(short, long)]
    pub domain: Option<String>,

    /// File containing a list of domains, one per line.
    ///
    /// When neither --domain nor --list is given, domains are read from stdin.
    #[arg(short, long)]
    pub list: Option<PathBuf>,

    /// DNS resolver to query (host:port; port 53 assumed if omitted)
    #[arg(short, long, default_value = DEFAULT_RESOLVER)]
    pub resolver: String,

    /// Number of concurrent workers
    #[arg(short, long, default_value_t = 20)]
    pub concurrency: usize,

    /// Per-query timeout in seconds
    #[arg(short, long, default_value_t = 5)]
    pub timeout_seconds: u64,

    /// Retries per query after a transport failure
    #[arg(long, default_value_t = 2)]
    pub retries: usize,

    /// Output one JSON document per domain instead of text blocks
    #[arg(long)]
    pub json: bool,

    /// Only output domains with potential takeover risk
    #[arg(long)]
    pub only_dangling: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            domain: None,
            list: None,
            resolver: DEFAULT_RESOLVER.to_string(),
            concurrency: 20,
            timeout_seconds: 5,
            retries: 2,
            json: false,
            only_dangling: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
