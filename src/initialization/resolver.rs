//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::InitializationError;

/// Initializes the DNS resolver for hostname lookups.
///
/// Creates a resolver using the default configuration with aggressive
/// timeouts to prevent hanging on slow or unresponsive DNS servers. Every
/// worker shares the same resolver through the returned `Arc`.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the resolver cannot be
/// constructed (the default configuration should not fail).
pub fn init_resolver() -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = 2; // Reduce retry attempts to fail faster
    opts.ndots = 0; // Never append search domains to probe targets

    Ok(Arc::new(TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}
