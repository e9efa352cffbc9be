//! Syntactic validation of hostnames, URLs, and IP literals.
//!
//! These are pure predicates: they never touch the network and never panic.
//! The classifier runs them before any probe so malformed input is rejected
//! with a diagnostic instead of a failed connection.

use std::net::IpAddr;

/// Checks whether a string is a well-formed fully qualified domain name.
///
/// A valid FQDN has total length at most 253 characters and consists of
/// dot-separated labels where each label:
/// - is 1 to 63 characters long,
/// - starts and ends with an ASCII alphanumeric character,
/// - contains only ASCII alphanumerics and `-`.
pub fn is_valid_fqdn(fqdn: &str) -> bool {
    if fqdn.len() > 253 {
        return false;
    }
    fqdn.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    if bytes.is_empty() || bytes.len() > 63 {
        return false;
    }
    if !bytes[0].is_ascii_alphanumeric() || !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

/// Validates a URL-form target, checking scheme, hostname, and path.
///
/// Accepts `http://`, `https://`, and scheme-less targets (`example.com/x`).
/// The hostname must be a valid FQDN; when a path, query, or fragment is
/// present the whole URL must also be well-formed.
///
/// # Returns
///
/// `(true, "Valid URL")` on success, or `(false, reason)` where `reason` is
/// one of:
/// - `Invalid scheme: <scheme>` for schemes other than http/https,
/// - `Invalid hostname` when no hostname is present,
/// - `Invalid FQDN: <hostname>` when the hostname fails [`is_valid_fqdn`],
/// - `Invalid port: <port>` when an explicit port is not numeric,
/// - `Invalid URL path` when the URL as a whole does not parse.
///
/// Never panics; any internal parse failure is surfaced in the reason string.
pub fn validate_url(url: &str) -> (bool, String) {
    let url = url.trim();

    // Scheme-less targets are legal input, so the scheme is detected by hand
    // rather than with url::Url::parse, which rejects relative URLs.
    let (scheme, rest) = match url.split_once("://") {
        Some((scheme, rest)) => (scheme, rest),
        None => ("", url),
    };
    if !matches!(scheme, "" | "http" | "https") {
        return (false, format!("Invalid scheme: {scheme}"));
    }

    let host_end = rest
        .find(|c| c == '/' || c == '?' || c == '#')
        .unwrap_or(rest.len());
    let authority = &rest[..host_end];

    // Strip userinfo and port from the authority to isolate the hostname.
    let host_port = match authority.rsplit_once('@') {
        Some((_, host_port)) => host_port,
        None => authority,
    };
    let (host, port) = match host_port.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    };

    if host.is_empty() {
        return (false, "Invalid hostname".to_string());
    }
    if !is_valid_fqdn(host) {
        return (false, format!("Invalid FQDN: {host}"));
    }
    if let Some(port) = port {
        if port.parse::<u16>().is_err() {
            return (false, format!("Invalid port: {port}"));
        }
    }

    let path = &rest[host_end..];
    if !path.is_empty() {
        // The hostname checks above are intentionally stricter than the url
        // crate; this is only a general well-formedness pass over the rest.
        let absolute = if scheme.is_empty() {
            format!("https://{rest}")
        } else {
            url.to_string()
        };
        if url::Url::parse(&absolute).is_err() {
            return (false, "Invalid URL path".to_string());
        }
    }

    (true, "Valid URL".to_string())
}

/// Checks whether a string parses as an IPv4 or IPv6 address literal.
pub fn validate_ip(ip: &str) -> bool {
    ip.parse::<IpAddr>().is_ok()
}
