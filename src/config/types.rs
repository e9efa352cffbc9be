//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and the immutable per-run probe configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{HONOR_IP_OVERRIDE, TLS_VERIFY, USE_HTTP2};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
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
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Certificate verification policy for TLS handshakes and HTTPS requests.
///
/// This is an explicit enum rather than a boolean because bypassing
/// verification changes the security guarantees of every TLS connection the
/// run makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TlsVerify {
    /// Certificates are validated against the trust store and the hostname
    /// is checked against the certificate.
    Enforced,
    /// **Insecure.** Any certificate chain is accepted and hostname
    /// verification is skipped. Connections are still encrypted but are not
    /// authenticated; use only for probing endpoints with self-signed or
    /// otherwise broken certificates.
    Bypassed,
}

impl TlsVerify {
    /// Returns true when certificate and hostname verification are disabled.
    pub fn is_bypassed(self) -> bool {
        matches!(self, TlsVerify::Bypassed)
    }
}

/// Run configuration, parsed from the command line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "endpoint_status",
    about = "Probe URLs and host:port targets from a CSV file"
)]
pub struct Config {
    /// CSV file with targets: one row per entry, first field a URL or
    /// `host:port` pair, optional second field an override IP address
    pub file: PathBuf,

    /// Number of concurrent workers (entries are processed inline in the
    /// calling task when omitted)
    #[arg(short = 'c', long = "concurrent")]
    pub concurrent: Option<usize>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("targets.csv"),
            concurrent: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Immutable probe configuration, fixed for the whole run.
///
/// Constructed once at startup from the compile-time defaults in
/// [`crate::config::constants`] and passed by value into every component;
/// workers never mutate it.
#[derive(Debug, Clone, Copy)]
pub struct ProbeConfig {
    /// Prefer HTTP/2 for HTTPS requests, with automatic fallback to
    /// HTTP/1.1 when the server cannot negotiate it.
    pub use_http2: bool,
    /// Certificate verification policy.
    pub tls_verify: TlsVerify,
    /// Honor per-entry override IPs from the input file.
    pub honor_ip_override: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            use_http2: USE_HTTP2,
            tls_verify: TLS_VERIFY,
            honor_ip_override: HONOR_IP_OVERRIDE,
        }
    }
}
