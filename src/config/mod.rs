//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, concurrency ceiling, probe defaults)
//! - CLI option types and parsing
//! - The immutable per-run probe configuration

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, ProbeConfig, TlsVerify};
