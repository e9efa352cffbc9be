//! HTTP client initialization.
//!
//! This module provides functions to initialize the shared HTTP clients used
//! for URL-form entries. Two clients exist because the HTTPS client carries
//! run-wide TLS and protocol-negotiation settings that must not leak into
//! plain-HTTP fetches.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{ProbeConfig, HTTP_REQUEST_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client for plain `http://` fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - Request timeout from the run constants
/// - Redirect following disabled, so the reported status code is the raw
///   first response
/// - Rustls TLS backend
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub async fn init_client() -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .use_rustls_tls()
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client for `https://` fetches.
///
/// In addition to the plain-client settings, this client honors the run's
/// probe configuration:
/// - When `config.tls_verify` is `Bypassed`, certificate validation and
///   hostname verification are both disabled for every request this client
///   makes. **This is explicitly insecure** and mirrors clicking through a
///   browser certificate warning.
/// - When `config.use_http2` is set, HTTP/2 is negotiated via ALPN with
///   automatic fallback to HTTP/1.1; otherwise the client is pinned to
///   HTTP/1.1.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub async fn init_https_client(
    config: &ProbeConfig,
) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut builder = ClientBuilder::new()
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
        .use_rustls_tls()
        .danger_accept_invalid_certs(config.tls_verify.is_bypassed());

    if !config.use_http2 {
        builder = builder.http1_only();
    }

    let client = builder.build()?;
    Ok(Arc::new(client))
}
