//! endpoint_status library: batch endpoint probing.
//!
//! This library validates and probes a batch of network endpoints (URLs or
//! `host:port` pairs) read from a comma-delimited file, performing
//! reachability, port, TLS, and HTTP checks, and reporting one result line
//! per entry plus an aggregate summary.
//!
//! # Example
//!
//! ```no_run
//! use endpoint_status::{run_batch, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("targets.csv"),
//!     concurrent: Some(4),
//!     ..Default::default()
//! };
//!
//! let report = run_batch(config).await?;
//! println!("Processed {} entries", report.processed);
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

pub mod batch;
pub mod classify;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod input;
pub mod probe;
pub mod validate;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, ProbeConfig, TlsVerify};
pub use run::{run_batch, BatchReport};

// Internal run module (contains the batch coordination logic)
mod run {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use chrono::{DateTime, Local};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};
    use tokio::sync::mpsc;

    use crate::batch::partition;
    use crate::classify::{process_entry, ProbeContext};
    use crate::config::{Config, ProbeConfig, MAX_CONCURRENCY};
    use crate::error_handling::{print_error_statistics, ConfigurationError};
    use crate::input::read_entries;

    /// Results of a completed batch run.
    #[derive(Debug, Clone)]
    pub struct BatchReport {
        /// Number of entries processed; every entry counts exactly once,
        /// including ones that failed validation or probing.
        pub processed: usize,
        /// Local time captured when the batch completed.
        pub completed_at: DateTime<Local>,
    }

    /// Runs a batch probe with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads entries from
    /// the input file, processes them (concurrently when `config.concurrent`
    /// is set), prints one result line per entry to stdout as results
    /// arrive, and returns a [`BatchReport`].
    ///
    /// With `concurrent` set, the entry list is partitioned into contiguous
    /// chunks, one worker task per chunk; workers report through a shared
    /// channel, so lines from different chunks interleave freely while each
    /// chunk's lines stay in input order. Without it, entries are processed
    /// inline with no parallelism.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested concurrency exceeds [`MAX_CONCURRENCY`] (checked
    ///   before any entry is processed)
    /// - The input file cannot be read
    /// - Network resources cannot be initialized
    ///
    /// Per-entry failures are never errors; they are reported as result
    /// lines and counted in the report.
    pub async fn run_batch(config: Config) -> Result<BatchReport> {
        // A concurrency of zero behaves like omitting the flag.
        let workers = config.concurrent.filter(|&n| n > 0);
        if let Some(requested) = workers {
            if requested > MAX_CONCURRENCY {
                return Err(ConfigurationError::ConcurrencyExceeded {
                    requested,
                    max: MAX_CONCURRENCY,
                }
                .into());
            }
        }

        let entries = read_entries(&config.file).await.with_context(|| {
            format!("Failed to read input file {}", config.file.display())
        })?;
        info!("Total entries in file: {}", entries.len());

        let probe_config = ProbeConfig::default();
        let ctx = Arc::new(
            ProbeContext::init(probe_config)
                .await
                .context("Failed to initialize probe resources")?,
        );
        let processed = Arc::new(AtomicUsize::new(0));

        match workers {
            Some(workers) => {
                let (tx, mut rx) = mpsc::unbounded_channel::<String>();
                let mut tasks = FuturesUnordered::new();
                for chunk in partition(entries, workers) {
                    let tx = tx.clone();
                    let ctx = Arc::clone(&ctx);
                    let processed = Arc::clone(&processed);
                    tasks.push(tokio::spawn(async move {
                        for entry in &chunk {
                            let line = process_entry(entry, &ctx).await;
                            // Every entry counts exactly once, error lines included.
                            processed.fetch_add(1, Ordering::SeqCst);
                            if tx.send(line).is_err() {
                                warn!("Result channel closed early for {}", entry.target);
                            }
                        }
                    }));
                }
                drop(tx);

                // Stream results as they arrive; the drain ends once every
                // worker has finished and dropped its sender.
                while let Some(line) = rx.recv().await {
                    println!("{line}");
                }
                while let Some(task_result) = tasks.next().await {
                    if let Err(join_error) = task_result {
                        warn!("Worker task panicked: {join_error:?}");
                    }
                }
            }
            None => {
                for entry in &entries {
                    let line = process_entry(entry, &ctx).await;
                    processed.fetch_add(1, Ordering::SeqCst);
                    println!("{line}");
                }
            }
        }

        print_error_statistics(ctx.stats());

        Ok(BatchReport {
            processed: processed.load(Ordering::SeqCst),
            completed_at: Local::now(),
        })
    }
}
