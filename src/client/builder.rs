use crate::client::A2ReviewsClient;
use crate::core::config::{ClientConfig, ConfigError};
use crate::core::errors::ClientError;
use crate::core::kernel::{
    HmacSignatureGenerator, HttpTransport, ReqwestTransport, SignatureGenerator, TransportConfig,
};
use reqwest::Url;
use secrecy::Secret;
use std::sync::Arc;
use tracing::debug;

/// Builder for [`A2ReviewsClient`]
pub struct A2ReviewsClientBuilder {
    config: ClientConfig,
    http_client: Option<Arc<dyn HttpTransport>>,
    signature_generator: Option<Arc<dyn SignatureGenerator>>,
}

impl A2ReviewsClientBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http_client: None,
            signature_generator: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Secret::new(api_key.into());
        self
    }

    pub fn with_api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.config.api_secret = Secret::new(api_secret.into());
        self
    }

    /// Request timeout for the default transport
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// Whether the default transport reports 4xx/5xx replies as errors.
    /// The client returns those responses either way.
    pub fn with_http_errors(mut self, http_errors: bool) -> Self {
        self.config.http_errors = http_errors;
        self
    }

    /// Use a custom transport. Timeout and `http_errors` settings only
    /// apply to the default transport.
    pub fn with_http_client(mut self, http_client: Arc<dyn HttpTransport>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Use a custom signature generator instead of HMAC over the API secret
    pub fn with_signature_generator(mut self, generator: Arc<dyn SignatureGenerator>) -> Self {
        self.signature_generator = Some(generator);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<A2ReviewsClient, ClientError> {
        let base_url = parse_base_url(&self.config.base_url)?;

        let signature_generator = match self.signature_generator {
            Some(generator) => generator,
            None => {
                if self.config.api_secret().is_empty() {
                    return Err(ClientError::InvalidSignature(
                        "no API secret configured and no signature generator provided"
                            .to_string(),
                    ));
                }
                Arc::new(HmacSignatureGenerator::new(
                    self.config.api_secret().to_string(),
                ))
            }
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let transport_config = TransportConfig {
                    timeout_seconds: self.config.timeout_seconds,
                    http_errors: self.config.http_errors,
                };
                Arc::new(ReqwestTransport::new(transport_config)?)
            }
        };

        debug!(base_url = %base_url, user_agent = %self.config.user_agent, "Built A2Reviews client");

        Ok(A2ReviewsClient {
            http_client,
            base_url,
            user_agent: self.config.user_agent,
            api_key: self.config.api_key,
            signature_generator,
        })
    }
}

pub(crate) fn parse_base_url(url: &str) -> Result<Url, ClientError> {
    let parsed = Url::parse(url).map_err(|e| {
        ConfigError::InvalidConfiguration(format!("Invalid base URL '{}': {}", url, e))
    })?;

    if !parsed.has_host() {
        return Err(ConfigError::InvalidConfiguration(format!(
            "Base URL '{}' has no host",
            url
        ))
        .into());
    }

    Ok(parsed)
}
