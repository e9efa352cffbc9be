//! Network probes.
//!
//! Four independent checks against a resolved IP address, each tolerant of
//! failure: transport errors are converted into result values (or typed
//! errors for the classifier to render) and never escape past the probe
//! boundary.
//!
//! - [`ping`] - best-effort ICMP reachability via the system ping utility
//! - [`port`] - raw TCP connect (telnet-style) port test
//! - [`tls`] - TLS handshake capturing the negotiated version and cipher
//! - [`http`] - HTTP(S) GET capturing the response status code

pub mod http;
pub mod ping;
pub mod port;
pub mod tls;

pub use http::fetch_status;
pub use ping::{ReachabilityProbe, SystemPing};
pub use port::probe_port;
pub use tls::{probe_tls, TlsInfo};
