//! HTTP(S) status fetching.

use crate::error_handling::ProbeError;

/// Issues a GET to `url` and returns the numeric response status code.
///
/// The client carries the run-wide request timeout and redirect policy
/// (redirects are not followed, so 3xx codes are reported as-is). Response
/// status codes are never errors here; only transport failures are.
///
/// # Errors
///
/// Returns [`ProbeError::Http`] on any transport-level failure (connect,
/// timeout, TLS, protocol).
pub async fn fetch_status(client: &reqwest::Client, url: url::Url) -> Result<u16, ProbeError> {
    let response = client.get(url).send().await?;
    Ok(response.status().as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(status_line: &'static str) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await;
                let body = format!("{status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
                let _ = stream.write_all(body.as_bytes()).await;
            }
        });
        port
    }

    #[tokio::test]
    async fn test_fetch_status_reports_code() {
        let port = serve_once("HTTP/1.1 204 No Content").await;
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();
        let url = url::Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();
        let status = fetch_status(&client, url).await.unwrap();
        assert_eq!(status, 204);
    }

    #[tokio::test]
    async fn test_fetch_status_does_not_follow_redirects() {
        let port = serve_once("HTTP/1.1 301 Moved Permanently\r\nLocation: http://127.0.0.1:1/")
            .await;
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();
        let url = url::Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();
        let status = fetch_status(&client, url).await.unwrap();
        assert_eq!(status, 301);
    }

    #[tokio::test]
    async fn test_fetch_status_surfaces_connect_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let client = reqwest::Client::new();
        let url = url::Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();
        assert!(fetch_status(&client, url).await.is_err());
    }
}
