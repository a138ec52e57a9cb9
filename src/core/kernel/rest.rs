use crate::core::errors::ClientError;
use async_trait::async_trait;
use reqwest::{Client, Request, Response, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{instrument, trace};

/// Failure raised by an [`HttpTransport`]
#[derive(Error, Debug)]
pub enum TransportError {
    /// The server answered with a 4xx/5xx status
    #[error("server responded with status {status}")]
    Status {
        status: StatusCode,
        response: Response,
    },

    /// Connection, timeout, TLS or body failure
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// HTTP transport trait
///
/// Sends a fully built request. Implementations may report 4xx/5xx replies
/// as [`TransportError::Status`]; the client turns those back into plain
/// responses.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}

/// Configuration for the reqwest transport
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Report 4xx/5xx replies as [`TransportError::Status`]
    pub http_errors: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            http_errors: true,
        }
    }
}

impl TransportConfig {
    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// Choose whether error statuses are reported as transport errors
    pub fn with_http_errors(mut self, http_errors: bool) -> Self {
        self.http_errors = http_errors;
        self
    }
}

/// Implementation of `HttpTransport` using reqwest
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
    config: TransportConfig,
}

impl ReqwestTransport {
    /// Build a transport with its own connection pool
    pub fn new(config: TransportConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client, config: TransportConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let response = self.client.execute(request).await?;
        let status = response.status();
        trace!("Response status: {}", status);

        if self.config.http_errors && (status.is_client_error() || status.is_server_error()) {
            return Err(TransportError::Status { status, response });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_reports_http_errors() {
        let config = TransportConfig::default();
        assert!(config.http_errors);
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = TransportConfig::default()
            .with_timeout(10)
            .with_http_errors(false);
        assert_eq!(config.timeout_seconds, Some(10));
        assert!(!config.http_errors);
    }

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new(TransportConfig::default().with_timeout(5)).unwrap();
        assert_eq!(transport.config().timeout_seconds, Some(5));
    }
}
