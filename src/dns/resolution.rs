//! IP address resolution.
//!
//! This module provides functions to resolve hostnames to IP addresses,
//! honoring a caller-supplied override when the run configuration allows it.

use std::net::IpAddr;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ResolutionError;

/// Resolves a hostname to an IP address using DNS.
///
/// # Arguments
///
/// * `host` - The hostname to resolve
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// The first IP address found.
///
/// # Errors
///
/// Returns a [`ResolutionError`] if the lookup fails or returns no
/// addresses. The error carries the hostname; callers report it per-entry
/// and continue the batch.
pub async fn resolve_host_to_ip(
    host: &str,
    resolver: &TokioAsyncResolver,
) -> Result<IpAddr, ResolutionError> {
    let response = resolver
        .lookup_ip(host)
        .await
        .map_err(|source| ResolutionError::Lookup {
            hostname: host.to_string(),
            source,
        })?;
    response
        .iter()
        .next()
        .ok_or_else(|| ResolutionError::NoAddresses {
            hostname: host.to_string(),
        })
}

/// Resolves a probe target, short-circuiting DNS when an override applies.
///
/// When `honor_override` is set and the entry carried an override IP, that
/// address is returned unchanged: no DNS lookup happens and no validation is
/// repeated (the classifier has already vetted the literal). Otherwise the
/// hostname is forward-resolved.
///
/// # Errors
///
/// Returns a [`ResolutionError`] only on the DNS path; the override path is
/// infallible.
pub async fn resolve_target(
    resolver: &TokioAsyncResolver,
    hostname: &str,
    ip_override: Option<IpAddr>,
    honor_override: bool,
) -> Result<IpAddr, ResolutionError> {
    if honor_override {
        if let Some(ip) = ip_override {
            log::debug!("Using override IP {ip} for {hostname}, skipping DNS");
            return Ok(ip);
        }
    }
    resolve_host_to_ip(hostname, resolver).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::init_resolver;

    #[tokio::test]
    async fn test_override_short_circuits_dns() {
        let resolver = init_resolver().expect("resolver init");
        // The hostname cannot resolve; the override must win without a lookup.
        let ip = resolve_target(
            &resolver,
            "no-such-host.invalid",
            Some("10.0.0.5".parse().unwrap()),
            true,
        )
        .await
        .expect("override should bypass DNS");
        assert_eq!(ip, "10.0.0.5".parse::<IpAddr>().unwrap());
    }

    #[tokio::test]
    async fn test_override_ignored_when_disabled() {
        let resolver = init_resolver().expect("resolver init");
        // With the override disabled the unresolvable hostname must fail.
        let result = resolve_target(
            &resolver,
            "no-such-host.invalid",
            Some("10.0.0.5".parse().unwrap()),
            false,
        )
        .await;
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert_eq!(message, "Could not resolve hostname no-such-host.invalid");
    }
}
