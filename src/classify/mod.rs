//! Entry classification and dispatch.
//!
//! Each input row is classified as either a connectivity-form target
//! (`host:port`, probed with ping plus a raw TCP connect) or a URL-form
//! target (fetched over HTTP or HTTPS), then run through the matching probe
//! sequence. Classification is state-free; every failure - validation,
//! resolution, or transport - is converted into a result line here, so no
//! entry is ever silently dropped and nothing escapes to crash a worker.

use std::net::IpAddr;
use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;

use crate::config::ProbeConfig;
use crate::dns::resolve_target;
use crate::error_handling::{
    categorize_reqwest_error, ErrorType, InitializationError, ProbeError, ProcessingStats,
};
use crate::initialization::{init_client, init_https_client, init_resolver};
use crate::input::Entry;
use crate::probe::{fetch_status, probe_port, probe_tls, ReachabilityProbe, SystemPing};
use crate::validate::{is_valid_fqdn, validate_ip, validate_url};

/// The form a target string takes, decided by [`classify_target`].
///
/// Exactly one form is selected per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetForm<'a> {
    /// A bare `host:port` pair, probed via ping and a raw TCP connect.
    Connectivity {
        /// Hostname part (not yet validated).
        hostname: &'a str,
        /// Port part; all ASCII digits, but not yet range-checked.
        port_digits: &'a str,
    },
    /// Anything else: treated as a full URL to be fetched.
    Url,
}

/// Decides whether a target is a connectivity check or a URL fetch.
///
/// A target is connectivity-form iff splitting on `:` yields exactly two
/// parts and the second is a non-empty run of ASCII digits. Everything else
/// (explicit schemes, paths, multiple colons, non-numeric ports) is
/// URL-form.
pub fn classify_target(target: &str) -> TargetForm<'_> {
    let mut parts = target.split(':');
    if let (Some(hostname), Some(port_digits), None) = (parts.next(), parts.next(), parts.next()) {
        if !port_digits.is_empty() && port_digits.bytes().all(|b| b.is_ascii_digit()) {
            return TargetForm::Connectivity {
                hostname,
                port_digits,
            };
        }
    }
    TargetForm::Url
}

/// Shared resources for entry processing.
///
/// Built once per run and shared read-only across workers; the statistics
/// tracker is the only internally-mutable member and is thread-safe.
pub struct ProbeContext {
    client: Arc<reqwest::Client>,
    https_client: Arc<reqwest::Client>,
    resolver: Arc<TokioAsyncResolver>,
    reachability: Arc<dyn ReachabilityProbe>,
    stats: Arc<ProcessingStats>,
    config: ProbeConfig,
}

impl ProbeContext {
    /// Creates a context from explicit parts.
    ///
    /// Used by tests to inject a stub reachability probe; `init` is the
    /// production path.
    pub fn new(
        client: Arc<reqwest::Client>,
        https_client: Arc<reqwest::Client>,
        resolver: Arc<TokioAsyncResolver>,
        reachability: Arc<dyn ReachabilityProbe>,
        config: ProbeConfig,
    ) -> Self {
        Self {
            client,
            https_client,
            resolver,
            reachability,
            stats: Arc::new(ProcessingStats::new()),
            config,
        }
    }

    /// Initializes a context with the default resources: shared HTTP
    /// clients, the DNS resolver, and the system ping probe.
    ///
    /// # Errors
    ///
    /// Returns an [`InitializationError`] if any resource fails to build.
    pub async fn init(config: ProbeConfig) -> Result<Self, InitializationError> {
        // TLS-capable clients need the process crypto provider in place.
        crate::initialization::init_crypto_provider();
        Ok(Self::new(
            init_client().await?,
            init_https_client(&config).await?,
            init_resolver()?,
            Arc::new(SystemPing),
            config,
        ))
    }

    /// The run's error statistics tracker.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }
}

/// Processes one entry and returns its result line.
///
/// This is the classifier boundary: validation failures, resolution
/// failures, and transport errors all come back as formatted strings
/// (`[target] Error: ...` / `[target] Error processing ...`), prefixed with
/// the original target so results stay traceable to input even when channel
/// delivery interleaves workers.
pub async fn process_entry(entry: &Entry, ctx: &ProbeContext) -> String {
    let target = entry.target.as_str();
    if target.is_empty() {
        ctx.stats.increment_error(ErrorType::EmptyEntry);
        return format!("Error: Empty or invalid entry {:?}", entry.raw);
    }

    let ip_override = match entry.ip_override.as_deref() {
        Some(raw) => {
            if !validate_ip(raw) {
                ctx.stats.increment_error(ErrorType::InvalidIpOverride);
                return format!("[{target}] Error: Invalid IP address {raw}");
            }
            raw.parse::<IpAddr>().ok()
        }
        None => None,
    };

    match classify_target(target) {
        TargetForm::Connectivity {
            hostname,
            port_digits,
        } => probe_connectivity(target, hostname, port_digits, ip_override, ctx).await,
        TargetForm::Url => probe_url(target, ip_override, ctx).await,
    }
}

/// Runs the connectivity-form sequence: resolve, ping, port test.
async fn probe_connectivity(
    target: &str,
    hostname: &str,
    port_digits: &str,
    ip_override: Option<IpAddr>,
    ctx: &ProbeContext,
) -> String {
    if !is_valid_fqdn(hostname) {
        ctx.stats.increment_error(ErrorType::InvalidHostname);
        return format!("[{target}] Error: Invalid hostname");
    }
    let port: u16 = match port_digits.parse() {
        Ok(port) => port,
        Err(_) => {
            ctx.stats.increment_error(ErrorType::InvalidPort);
            return format!("[{target}] Error: Invalid port {port_digits}");
        }
    };

    let ip = match resolve_target(
        &ctx.resolver,
        hostname,
        ip_override,
        ctx.config.honor_ip_override,
    )
    .await
    {
        Ok(ip) => ip,
        Err(e) => {
            ctx.stats.increment_error(ErrorType::DnsResolutionError);
            return format!("[{target}] Error: {e}");
        }
    };

    let ping_line = if ctx.reachability.is_reachable(ip).await {
        format!("Ping {ip} - Host is reachable")
    } else {
        format!("Ping {ip} - Host is not reachable")
    };
    let telnet_line = probe_port(ip, port).await;

    format!("[{target}] - {ping_line} - {telnet_line}")
}

/// Runs the URL-form sequence: validate, resolve, fetch (with a TLS probe
/// first for https).
async fn probe_url(target: &str, ip_override: Option<IpAddr>, ctx: &ProbeContext) -> String {
    let (ok, reason) = validate_url(target);
    if !ok {
        ctx.stats.increment_error(ErrorType::InvalidUrl);
        return format!("[{target}] Error: {reason}");
    }

    // Scheme-less targets default to https, the scheme a bare hostname is
    // normally probed with.
    let normalized = if target.contains("://") {
        target.to_string()
    } else {
        format!("https://{target}")
    };
    let parsed = match url::Url::parse(&normalized) {
        Ok(parsed) => parsed,
        Err(e) => {
            ctx.stats.increment_error(ErrorType::InvalidUrl);
            return format!("[{target}] Error processing {target}: {e}");
        }
    };
    let hostname = match parsed.host_str() {
        Some(hostname) => hostname.to_string(),
        None => {
            ctx.stats.increment_error(ErrorType::InvalidUrl);
            return format!("[{target}] Error: Invalid hostname");
        }
    };
    let port = parsed.port_or_known_default().unwrap_or(443);

    let ip = match resolve_target(
        &ctx.resolver,
        &hostname,
        ip_override,
        ctx.config.honor_ip_override,
    )
    .await
    {
        Ok(ip) => ip,
        Err(e) => {
            ctx.stats.increment_error(ErrorType::DnsResolutionError);
            return format!("[{target}] Error: {e}");
        }
    };

    if parsed.scheme() == "http" {
        match fetch_status(&ctx.client, parsed.clone()).await {
            Ok(code) => {
                format!("[{target}] HTTP GET {parsed} - Resolved IP: {ip} - Response Code: {code}")
            }
            Err(e) => {
                record_probe_error(ctx, &e);
                format!("[{target}] Error processing {target}: {e}")
            }
        }
    } else {
        let tls = match probe_tls(ip, port, &hostname, ctx.config.tls_verify).await {
            Ok(tls) => tls,
            Err(e) => {
                record_probe_error(ctx, &e);
                return format!("[{target}] Error processing {target}: {e}");
            }
        };
        match fetch_status(&ctx.https_client, parsed.clone()).await {
            Ok(code) => format!(
                "[{target}] HTTPS GET {parsed} - Resolved IP: {ip} - TLS Version: {}, Cipher: {}, Response Code: {code}",
                tls.version, tls.cipher
            ),
            Err(e) => {
                record_probe_error(ctx, &e);
                format!("[{target}] Error processing {target}: {e}")
            }
        }
    }
}

fn record_probe_error(ctx: &ProbeContext, error: &ProbeError) {
    let error_type = match error {
        ProbeError::Http(e) => categorize_reqwest_error(e),
        ProbeError::Connect { .. } | ProbeError::ConnectTimeout { .. } => {
            ErrorType::HttpRequestConnectError
        }
        ProbeError::ServerName { .. }
        | ProbeError::Handshake { .. }
        | ProbeError::HandshakeTimeout { .. } => ErrorType::TlsHandshakeError,
    };
    ctx.stats.increment_error(error_type);
}
