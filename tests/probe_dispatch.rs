//! Tests for probe dispatch against local listeners.
//!
//! These exercise the full classifier paths - connectivity form and URL
//! form - without leaving the loopback interface. DNS is short-circuited
//! with per-entry override IPs or IP-literal hostnames.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use endpoint_status::classify::{process_entry, ProbeContext};
use endpoint_status::initialization::{init_client, init_https_client, init_resolver};
use endpoint_status::input::parse_row;
use endpoint_status::probe::ReachabilityProbe;
use endpoint_status::ProbeConfig;

/// Reachability stub with a fixed answer, standing in for the system ping.
struct Always(bool);

#[async_trait]
impl ReachabilityProbe for Always {
    async fn is_reachable(&self, _ip: IpAddr) -> bool {
        self.0
    }
}

async fn context_with_ping(reachable: bool) -> ProbeContext {
    endpoint_status::initialization::init_crypto_provider();
    let config = ProbeConfig::default();
    ProbeContext::new(
        init_client().await.expect("client"),
        init_https_client(&config).await.expect("https client"),
        init_resolver().expect("resolver"),
        Arc::new(Always(reachable)),
        config,
    )
}

#[tokio::test]
async fn test_connectivity_form_with_override_skips_dns() {
    // The hostname cannot resolve; the probe must still run because the
    // override IP bypasses DNS entirely.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let ctx = context_with_ping(true).await;
    let entry = parse_row(&format!("no-such-host.invalid:{port},127.0.0.1"));
    let line = process_entry(&entry, &ctx).await;

    assert_eq!(
        line,
        format!(
            "[no-such-host.invalid:{port}] - Ping 127.0.0.1 - Host is reachable - Telnet 127.0.0.1:{port} - Port is open"
        )
    );
}

#[tokio::test]
async fn test_connectivity_form_reports_unreachable_and_closed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let ctx = context_with_ping(false).await;
    let entry = parse_row(&format!("no-such-host.invalid:{port},127.0.0.1"));
    let line = process_entry(&entry, &ctx).await;

    assert_eq!(
        line,
        format!(
            "[no-such-host.invalid:{port}] - Ping 127.0.0.1 - Host is not reachable - Telnet 127.0.0.1:{port} - Port is not open"
        )
    );
}

#[tokio::test]
async fn test_url_form_reports_status_code() {
    // Minimal one-shot HTTP server on loopback.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let _ = stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .await;
        }
    });

    let ctx = context_with_ping(true).await;
    let target = format!("http://127.0.0.1:{port}/");
    let entry = parse_row(&target);
    let line = process_entry(&entry, &ctx).await;

    assert_eq!(
        line,
        format!("[{target}] HTTP GET {target} - Resolved IP: 127.0.0.1 - Response Code: 200")
    );
}

#[tokio::test]
async fn test_https_handshake_failure_is_reported_not_fatal() {
    // A listener that closes immediately cannot complete a TLS handshake;
    // the entry must come back as an error line, not a panic.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        if let Ok((stream, _)) = listener.accept().await {
            drop(stream);
        }
    });

    let ctx = context_with_ping(true).await;
    let target = format!("https://localhost:{port}/");
    let entry = parse_row(&format!("{target},127.0.0.1"));
    let line = process_entry(&entry, &ctx).await;

    assert!(
        line.starts_with(&format!("[{target}] Error processing {target}:")),
        "unexpected line: {line}"
    );
}
