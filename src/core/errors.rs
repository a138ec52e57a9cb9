use crate::core::kernel::rest::TransportError;
use reqwest::{Method, Request, Response, Url};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),
}

/// Method and URL of the request an [`ApiError`] originated from.
///
/// `reqwest::Request` is consumed by the transport, so the parts worth
/// reporting are captured before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSummary {
    pub method: Method,
    pub url: Url,
}

impl From<&Request> for RequestSummary {
    fn from(request: &Request) -> Self {
        Self {
            method: request.method().clone(),
            url: request.url().clone(),
        }
    }
}

impl fmt::Display for RequestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// Failure reported by the HTTP transport while dispatching a request.
#[derive(Error, Debug)]
#[error("API request {request} failed: {message}")]
pub struct ApiError {
    message: String,
    request: RequestSummary,
    response: Option<Response>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
    context: Map<String, Value>,
}

impl ApiError {
    /// Wrap a transport failure together with the request that caused it.
    ///
    /// [`A2ReviewsClient::send`](crate::A2ReviewsClient::send) hands
    /// `TransportError::Status` replies back as responses, so a status error
    /// only ends up here when a caller drives an [`HttpTransport`] directly.
    ///
    /// [`HttpTransport`]: crate::core::kernel::HttpTransport
    pub fn from_transport(request: RequestSummary, error: TransportError) -> Self {
        let message = error.to_string();
        let mut context = Map::new();
        context.insert("url".to_string(), Value::String(request.url.to_string()));

        match error {
            TransportError::Status { status, response } => {
                context.insert("status".to_string(), Value::from(status.as_u16()));
                Self {
                    message,
                    request,
                    response: Some(response),
                    source: None,
                    context,
                }
            }
            TransportError::Network(err) => {
                context.insert("timeout".to_string(), Value::Bool(err.is_timeout()));
                context.insert("connect".to_string(), Value::Bool(err.is_connect()));
                if let Some(status) = err.status() {
                    context.insert("status".to_string(), Value::from(status.as_u16()));
                }
                Self {
                    message,
                    request,
                    response: None,
                    source: Some(Box::new(err)),
                    context,
                }
            }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn request(&self) -> &RequestSummary {
        &self.request
    }

    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    /// Take ownership of the response, if the transport produced one.
    pub fn into_response(self) -> Option<Response> {
        self.response
    }

    pub fn context(&self) -> &Map<String, Value> {
        &self.context
    }

    /// HTTP status of the response, or 0 when no response was received.
    pub fn code(&self) -> u16 {
        self.response
            .as_ref()
            .map_or(0, |response| response.status().as_u16())
    }
}
