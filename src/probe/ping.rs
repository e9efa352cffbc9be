//! Host reachability probing.
//!
//! Reachability is a best-effort signal, not guaranteed ICMP semantics: the
//! default implementation shells out to the system `ping` utility, which
//! needs no raw-socket privileges. The trait seam lets a native ICMP
//! implementation (or a test stub) be swapped in without touching the
//! classifier.

use std::net::IpAddr;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::PING_TIMEOUT_SECS;

/// A best-effort host reachability check.
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// Returns true when the host answered a single echo attempt within the
    /// probe's budget. Never errors: spawn failures, timeouts, and non-zero
    /// exits all read as unreachable.
    async fn is_reachable(&self, ip: IpAddr) -> bool;
}

/// Reachability probe backed by the system `ping` utility.
///
/// Sends one echo request and reports success iff the utility exits zero.
/// The whole attempt, including process spawn, is bounded by
/// [`PING_TIMEOUT_SECS`].
pub struct SystemPing;

#[async_trait]
impl ReachabilityProbe for SystemPing {
    async fn is_reachable(&self, ip: IpAddr) -> bool {
        let mut command = Command::new("ping");
        #[cfg(target_os = "windows")]
        command.args(["-n", "1", "-w", "1000"]);
        #[cfg(not(target_os = "windows"))]
        command.args(["-c", "1"]);
        command
            .arg(ip.to_string())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        match timeout(Duration::from_secs(PING_TIMEOUT_SECS), command.status()).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(e)) => {
                log::debug!("ping spawn failed for {ip}: {e}");
                false
            }
            Err(_) => {
                log::debug!("ping timed out for {ip}");
                false
            }
        }
    }
}
