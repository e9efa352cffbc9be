//! TCP port (telnet-style) probing.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::PORT_CONNECT_TIMEOUT_SECS;

/// Tests whether a TCP port accepts connections.
///
/// Attempts a raw TCP connect to `(ip, port)` bounded by
/// [`PORT_CONNECT_TIMEOUT_SECS`]; an established connection is closed
/// immediately. Any socket error or timeout reads as "not open".
///
/// # Returns
///
/// A descriptive result string; this probe never errors.
pub async fn probe_port(ip: IpAddr, port: u16) -> String {
    let addr = SocketAddr::new(ip, port);
    match timeout(
        Duration::from_secs(PORT_CONNECT_TIMEOUT_SECS),
        TcpStream::connect(addr),
    )
    .await
    {
        Ok(Ok(_stream)) => format!("Telnet {ip}:{port} - Port is open"),
        Ok(Err(e)) => {
            log::debug!("port probe {addr} failed: {e}");
            format!("Telnet {ip}:{port} - Port is not open")
        }
        Err(_) => {
            log::debug!("port probe {addr} timed out");
            format!("Telnet {ip}:{port} - Port is not open")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_probe_port_open() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let result = probe_port("127.0.0.1".parse().unwrap(), port).await;
        assert_eq!(result, format!("Telnet 127.0.0.1:{port} - Port is open"));
    }

    #[tokio::test]
    async fn test_probe_port_closed() {
        // Bind a port, then release it so the connect is refused.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let result = probe_port("127.0.0.1".parse().unwrap(), port).await;
        assert_eq!(
            result,
            format!("Telnet 127.0.0.1:{port} - Port is not open")
        );
    }
}
