//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_recon` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing summary output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_recon::initialization::init_logger_with;
use domain_recon::{run_scan, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the scan using the library
    match run_scan(config).await {
        Ok(report) => {
            // Print user-friendly summary to stderr; stdout carries results only
            eprintln!(
                "✅ Scanned {} domain{} ({} emitted, {} dangling, {} skipped) in {:.1}s",
                report.domains,
                if report.domains == 1 { "" } else { "s" },
                report.emitted,
                report.dangling,
                report.skipped,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_recon error: {:#}", e);
            process::exit(1);
        }
    }
}
