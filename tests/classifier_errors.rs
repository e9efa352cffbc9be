//! Tests for classifier error reporting.
//!
//! All cases here fail validation before any network activity, so they run
//! offline. Every failure must come back as a result line prefixed with the
//! original target, never as a panic or a dropped entry.

use endpoint_status::classify::{process_entry, ProbeContext};
use endpoint_status::error_handling::ErrorType;
use endpoint_status::input::parse_row;
use endpoint_status::ProbeConfig;

async fn test_context() -> ProbeContext {
    endpoint_status::initialization::init_crypto_provider();
    ProbeContext::init(ProbeConfig::default())
        .await
        .expect("probe context init")
}

#[tokio::test]
async fn test_empty_target_reports_invalid_entry() {
    let ctx = test_context().await;
    let entry = parse_row(" , ");
    let line = process_entry(&entry, &ctx).await;
    assert!(
        line.starts_with("Error: Empty or invalid entry"),
        "unexpected line: {line}"
    );
    assert_eq!(ctx.stats().error_count(ErrorType::EmptyEntry), 1);
}

#[tokio::test]
async fn test_invalid_override_ip_reports_before_probing() {
    let ctx = test_context().await;
    let entry = parse_row("example.com:80,999.1.1.1");
    let line = process_entry(&entry, &ctx).await;
    assert_eq!(line, "[example.com:80] Error: Invalid IP address 999.1.1.1");
    assert_eq!(ctx.stats().error_count(ErrorType::InvalidIpOverride), 1);
}

#[tokio::test]
async fn test_connectivity_form_rejects_invalid_hostname() {
    let ctx = test_context().await;
    let entry = parse_row("bad..host:80");
    let line = process_entry(&entry, &ctx).await;
    assert_eq!(line, "[bad..host:80] Error: Invalid hostname");
    assert_eq!(ctx.stats().error_count(ErrorType::InvalidHostname), 1);
}

#[tokio::test]
async fn test_connectivity_form_rejects_port_out_of_range() {
    let ctx = test_context().await;
    let entry = parse_row("example.com:99999");
    let line = process_entry(&entry, &ctx).await;
    assert_eq!(line, "[example.com:99999] Error: Invalid port 99999");
    assert_eq!(ctx.stats().error_count(ErrorType::InvalidPort), 1);
}

#[tokio::test]
async fn test_url_form_rejects_invalid_fqdn() {
    let ctx = test_context().await;
    let entry = parse_row("bad..host");
    let line = process_entry(&entry, &ctx).await;
    assert_eq!(line, "[bad..host] Error: Invalid FQDN: bad..host");
    assert_eq!(ctx.stats().error_count(ErrorType::InvalidUrl), 1);
}

#[tokio::test]
async fn test_url_form_rejects_unsupported_scheme() {
    let ctx = test_context().await;
    let entry = parse_row("ftp://example.com/file");
    let line = process_entry(&entry, &ctx).await;
    assert_eq!(line, "[ftp://example.com/file] Error: Invalid scheme: ftp");
}

#[tokio::test]
async fn test_error_lines_always_carry_target_prefix() {
    // Result lines must stay traceable to input even though channel
    // delivery is unordered across workers.
    let ctx = test_context().await;
    for target in ["bad..host", "ftp://example.com/", "-x-.example.com:22"] {
        let entry = parse_row(target);
        let line = process_entry(&entry, &ctx).await;
        assert!(
            line.starts_with(&format!("[{target}]")),
            "line missing target prefix: {line}"
        );
    }
}
