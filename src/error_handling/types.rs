//! Error type definitions.
//!
//! This module defines all error taxonomies used throughout the application.
//! Per-entry failures (`ResolutionError`, `ProbeError`) are converted into
//! result lines at the classifier boundary and never abort the batch;
//! `InitializationError` and `ConfigurationError` are fatal and abort the run
//! before any entry is dispatched.

use std::net::SocketAddr;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    #[allow(dead_code)] // Reserved for resolver configurations that can fail
    DnsResolverError(String),
}

/// Fatal configuration errors, detected before any entry is dispatched.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// The requested worker count exceeds the configured ceiling.
    #[error("Maximum concurrency of {max} exceeded (requested {requested})")]
    ConcurrencyExceeded {
        /// Worker count requested on the command line.
        requested: usize,
        /// The compile-time concurrency ceiling.
        max: usize,
    },
}

/// Per-entry name resolution failures.
///
/// Both variants render as the same user-visible message; the distinction is
/// kept for logging and statistics.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The DNS lookup itself failed (NXDOMAIN, timeout, server failure).
    #[error("Could not resolve hostname {hostname}")]
    Lookup {
        /// Hostname that failed to resolve.
        hostname: String,
        /// Underlying resolver error.
        #[source]
        source: hickory_resolver::error::ResolveError,
    },

    /// The lookup succeeded but returned no addresses.
    #[error("Could not resolve hostname {hostname}")]
    NoAddresses {
        /// Hostname that resolved to an empty record set.
        hostname: String,
    },
}

/// Per-entry transport failures from the probes.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// TCP connection attempt timed out.
    #[error("TCP connection timeout for {addr} ({timeout_secs}s)")]
    ConnectTimeout {
        /// Address the connection was attempted to.
        addr: SocketAddr,
        /// Timeout that elapsed.
        timeout_secs: u64,
    },

    /// TCP connection attempt failed.
    #[error("Failed to connect to {addr}: {source}")]
    Connect {
        /// Address the connection was attempted to.
        addr: SocketAddr,
        /// Underlying socket error.
        #[source]
        source: std::io::Error,
    },

    /// The hostname is not usable as a TLS server name (SNI).
    #[error("Invalid server name {hostname}: {source}")]
    ServerName {
        /// Hostname that was rejected.
        hostname: String,
        /// Underlying parse error.
        #[source]
        source: rustls::pki_types::InvalidDnsNameError,
    },

    /// TLS handshake timed out.
    #[error("TLS handshake timeout for {hostname} ({timeout_secs}s)")]
    HandshakeTimeout {
        /// Hostname used for SNI.
        hostname: String,
        /// Timeout that elapsed.
        timeout_secs: u64,
    },

    /// TLS handshake failed.
    #[error("TLS handshake failed for {hostname}: {source}")]
    Handshake {
        /// Hostname used for SNI.
        hostname: String,
        /// Underlying handshake error.
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed.
    #[error(transparent)]
    Http(#[from] ReqwestError),
}

/// Statistic buckets for failures observed during entry processing.
///
/// These categorize the per-entry errors that are rendered as result lines,
/// for the end-of-run statistics log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Input validation errors
    EmptyEntry,
    InvalidIpOverride,
    InvalidHostname,
    InvalidPort,
    InvalidUrl,
    // DNS errors
    DnsResolutionError,
    // TLS errors
    TlsHandshakeError,
    // HTTP/network errors
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestOtherError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable label for the statistics report.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::EmptyEntry => "Empty entry",
            ErrorType::InvalidIpOverride => "Invalid override IP",
            ErrorType::InvalidHostname => "Invalid hostname",
            ErrorType::InvalidPort => "Invalid port",
            ErrorType::InvalidUrl => "Invalid URL",
            ErrorType::DnsResolutionError => "DNS resolution error",
            ErrorType::TlsHandshakeError => "TLS handshake error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(ErrorType::EmptyEntry.as_str(), "Empty entry");
        assert_eq!(
            ErrorType::DnsResolutionError.as_str(),
            "DNS resolution error"
        );
        assert_eq!(
            ErrorType::HttpRequestTimeoutError.as_str(),
            "HTTP request timeout error"
        );
    }

    #[test]
    fn test_error_type_display_matches_as_str() {
        for error_type in ErrorType::iter() {
            assert_eq!(format!("{error_type}"), error_type.as_str());
        }
    }

    #[test]
    fn test_configuration_error_message() {
        let err = ConfigurationError::ConcurrencyExceeded {
            requested: 100,
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "Maximum concurrency of 50 exceeded (requested 100)"
        );
    }

    #[test]
    fn test_resolution_error_message_carries_hostname() {
        let err = ResolutionError::NoAddresses {
            hostname: "example.com".to_string(),
        };
        assert_eq!(err.to_string(), "Could not resolve hostname example.com");
    }
}
