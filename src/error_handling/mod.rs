//! Error types and processing statistics.
//!
//! This module provides:
//! - Typed errors for initialization, configuration, resolution, and probes
//! - Categorization of transport errors into statistic buckets
//! - Thread-safe per-category error counters for the end-of-run report

mod categorization;
mod stats;
mod types;

pub use categorization::categorize_reqwest_error;
pub use stats::{print_error_statistics, ProcessingStats};
pub use types::{
    ConfigurationError, ErrorType, InitializationError, ProbeError, ResolutionError,
};
