//! TLS handshake probing.
//!
//! Connects to a resolved IP and performs a TLS handshake with SNI set to
//! the original hostname, capturing the negotiated protocol version and
//! cipher suite. Uses `tokio-rustls` for the async handshake.
//!
//! Under [`TlsVerify::Bypassed`] the handshake skips certificate and
//! hostname verification entirely. That mode is explicitly insecure and
//! exists to probe endpoints with self-signed or expired certificates.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::{TlsVerify, TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS};
use crate::error_handling::ProbeError;

/// Negotiated TLS session parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsInfo {
    /// Negotiated protocol version (e.g. `TLSv1_3`).
    pub version: String,
    /// Negotiated cipher suite (e.g. `TLS13_AES_256_GCM_SHA384`).
    pub cipher: String,
}

/// Performs a TLS handshake against `(ip, port)` and reports the negotiated
/// version and cipher suite.
///
/// The TCP connect is bounded by [`TCP_CONNECT_TIMEOUT_SECS`] and the
/// handshake by [`TLS_HANDSHAKE_TIMEOUT_SECS`]. SNI is set to `hostname`
/// regardless of which IP the connection targets, so override IPs still
/// negotiate the right certificate.
///
/// # Errors
///
/// Returns a [`ProbeError`] on connect failure, connect timeout, an
/// unusable server name, or a failed/timed-out handshake. The caller records
/// the error per-entry; nothing here aborts the batch.
pub async fn probe_tls(
    ip: IpAddr,
    port: u16,
    hostname: &str,
    verify: TlsVerify,
) -> Result<TlsInfo, ProbeError> {
    let config = client_config(verify);

    let server_name =
        ServerName::try_from(hostname.to_string()).map_err(|source| ProbeError::ServerName {
            hostname: hostname.to_string(),
            source,
        })?;

    let addr = SocketAddr::new(ip, port);
    let sock = match timeout(
        Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
        TcpStream::connect(addr),
    )
    .await
    {
        Ok(Ok(sock)) => sock,
        Ok(Err(source)) => return Err(ProbeError::Connect { addr, source }),
        Err(_) => {
            return Err(ProbeError::ConnectTimeout {
                addr,
                timeout_secs: TCP_CONNECT_TIMEOUT_SECS,
            })
        }
    };

    let connector = TlsConnector::from(Arc::new(config));
    let tls_stream = match timeout(
        Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
        connector.connect(server_name, sock),
    )
    .await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(source)) => {
            return Err(ProbeError::Handshake {
                hostname: hostname.to_string(),
                source,
            })
        }
        Err(_) => {
            return Err(ProbeError::HandshakeTimeout {
                hostname: hostname.to_string(),
                timeout_secs: TLS_HANDSHAKE_TIMEOUT_SECS,
            })
        }
    };

    let (_, session) = tls_stream.get_ref();
    let version = session
        .protocol_version()
        .map(|v| format!("{v:?}"))
        .unwrap_or_else(|| "Unknown".to_string());
    let cipher = session
        .negotiated_cipher_suite()
        .map(|cs| format!("{:?}", cs.suite()))
        .unwrap_or_else(|| "Unknown".to_string());

    log::debug!("TLS negotiated for {hostname}: {version} / {cipher}");

    Ok(TlsInfo { version, cipher })
}

fn client_config(verify: TlsVerify) -> ClientConfig {
    match verify {
        TlsVerify::Enforced => {
            let mut root_store = RootCertStore::empty();
            root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
            ClientConfig::builder()
                .with_root_certificates(root_store)
                .with_no_client_auth()
        }
        TlsVerify::Bypassed => ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(danger::NoVerification::new()))
            .with_no_client_auth(),
    }
}

mod danger {
    //! Certificate verifier for [`TlsVerify::Bypassed`](super::TlsVerify).
    //!
    //! Accepts any certificate chain and skips hostname verification.
    //! Signatures are still checked with the real algorithms so the
    //! handshake itself stays well-formed; the connection is encrypted but
    //! unauthenticated.

    use rustls::client::danger::{
        HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier,
    };
    use rustls::crypto::{
        ring, verify_tls12_signature, verify_tls13_signature, CryptoProvider,
    };
    use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
    use rustls::{DigitallySignedStruct, Error, SignatureScheme};

    #[derive(Debug)]
    pub(super) struct NoVerification(CryptoProvider);

    impl NoVerification {
        pub(super) fn new() -> Self {
            Self(ring::default_provider())
        }
    }

    impl ServerCertVerifier for NoVerification {
        fn verify_server_cert(
            &self,
            _end_entity: &CertificateDer<'_>,
            _intermediates: &[CertificateDer<'_>],
            _server_name: &ServerName<'_>,
            _ocsp_response: &[u8],
            _now: UnixTime,
        ) -> Result<ServerCertVerified, Error> {
            Ok(ServerCertVerified::assertion())
        }

        fn verify_tls12_signature(
            &self,
            message: &[u8],
            cert: &CertificateDer<'_>,
            dss: &DigitallySignedStruct,
        ) -> Result<HandshakeSignatureValid, Error> {
            verify_tls12_signature(
                message,
                cert,
                dss,
                &self.0.signature_verification_algorithms,
            )
        }

        fn verify_tls13_signature(
            &self,
            message: &[u8],
            cert: &CertificateDer<'_>,
            dss: &DigitallySignedStruct,
        ) -> Result<HandshakeSignatureValid, Error> {
            verify_tls13_signature(
                message,
                cert,
                dss,
                &self.0.signature_verification_algorithms,
            )
        }

        fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
            self.0.signature_verification_algorithms.supported_schemes()
        }
    }
}
