//! IMAP connectivity checks

use crate::config::ImapConfig;
use crate::core::models::ImapSettings;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Side-effect-free check that IMAP settings can reach their server
#[async_trait]
pub trait ImapValidator: Send + Sync {
    async fn validate(&self, settings: &ImapSettings) -> Result<()>;
}

/// Reachability check over plain TCP.
///
/// Non-TLS servers must also greet with `* OK`; TLS servers are only checked
/// for an accepted connection.
#[derive(Debug, Clone)]
pub struct TcpImapValidator {
    connect_timeout: Duration,
}

impl TcpImapValidator {
    pub fn new(config: &ImapConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(config.connect_timeout_seconds),
        }
    }

    async fn read_greeting(&self, stream: &mut TcpStream, address: &str) -> Result<()> {
        let mut buf = [0u8; 512];
        let read = timeout(self.connect_timeout, stream.read(&mut buf))
            .await
            .map_err(|_| {
                GatewayError::unreachable(format!("{address}: no IMAP greeting received"))
            })?
            .map_err(|e| GatewayError::unreachable(format!("{address}: {e}")))?;

        let greeting = String::from_utf8_lossy(&buf[..read]);
        if greeting.starts_with("* OK") || greeting.starts_with("* PREAUTH") {
            Ok(())
        } else {
            Err(GatewayError::unreachable(format!(
                "{address}: unexpected IMAP greeting: {}",
                greeting.trim()
            )))
        }
    }
}

#[async_trait]
impl ImapValidator for TcpImapValidator {
    async fn validate(&self, settings: &ImapSettings) -> Result<()> {
        settings.validate_connection()?;
        let address = settings.address();
        debug!(address = %address, tls = settings.tls, "Checking IMAP connectivity");

        let mut stream = match timeout(self.connect_timeout, TcpStream::connect(&address)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => return Err(GatewayError::unreachable(format!("{address}: {e}"))),
            Err(_) => {
                return Err(GatewayError::unreachable(format!(
                    "{address}: connection timed out after {}s",
                    self.connect_timeout.as_secs()
                )));
            }
        };

        if settings.tls {
            return Ok(());
        }
        self.read_greeting(&mut stream, &address).await
    }
}
