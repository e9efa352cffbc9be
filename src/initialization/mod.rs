//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - The logger
//! - HTTP clients (plain and HTTPS, with timeouts)
//! - The DNS resolver
//! - The process-wide TLS crypto provider
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;
mod resolver;

use rustls::crypto::{ring::default_provider, CryptoProvider};

// Re-export public API
pub use client::{init_client, init_https_client};
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the crypto provider for TLS operations.
///
/// Configures the global crypto provider for `rustls`. This must be called
/// before any TLS connections are established. Uses the ring provider, which
/// supports all standard TLS features.
pub fn init_crypto_provider() {
    // The return value is ignored because reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
