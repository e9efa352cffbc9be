//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application: network timeouts, the concurrency ceiling, and the default
//! probe behavior flags.

use super::types::TlsVerify;

/// Maximum number of concurrent workers.
///
/// Requests for more workers than this abort the run before any entry is
/// dispatched.
pub const MAX_CONCURRENCY: usize = 50;

// Network operation timeouts
/// DNS query timeout in seconds.
/// Most DNS queries complete in under a second; 3s provides buffer while
/// failing fast on unresponsive servers.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// TCP connection timeout in seconds (TLS probe).
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// TLS handshake timeout in seconds.
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;
/// TCP connection timeout in seconds for the port (telnet-style) test.
pub const PORT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// HTTP request timeout in seconds.
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 10;
/// Overall budget in seconds for a single ping attempt, including spawning
/// the system ping utility.
pub const PING_TIMEOUT_SECS: u64 = 3;

// Probe behavior defaults
/// Prefer HTTP/2 for HTTPS requests, falling back to HTTP/1.1 when the
/// server cannot negotiate it.
pub const USE_HTTP2: bool = true;
/// Default certificate verification policy for TLS handshakes and HTTPS
/// requests. `Bypassed` skips certificate and hostname verification, like
/// clicking through a browser's invalid-certificate warning.
pub const TLS_VERIFY: TlsVerify = TlsVerify::Bypassed;
/// Whether a per-entry override IP from the input file replaces DNS
/// resolution for that entry.
pub const HONOR_IP_OVERRIDE: bool = true;
