//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `endpoint_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - The final summary line and process exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use endpoint_status::initialization::{init_crypto_provider, init_logger_with};
use endpoint_status::{run_batch, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    match run_batch(config).await {
        Ok(report) => {
            println!(
                "Processed {} URLs at {}",
                report.processed,
                report.completed_at.format("%Y-%m-%d %H:%M:%S")
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("endpoint_status error: {:#}", e);
            process::exit(1);
        }
    }
}
