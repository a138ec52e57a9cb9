use crate::client::A2ReviewsClient;
use crate::core::errors::ClientError;
use reqwest::{Method, Response};
use serde::Serialize;
use tracing::instrument;

const SETTINGS_PATH: &str = "/settings";

/// Site settings endpoints
#[derive(Debug, Clone, Copy)]
pub struct Setting<'a> {
    client: &'a A2ReviewsClient,
}

impl<'a> Setting<'a> {
    pub fn new(client: &'a A2ReviewsClient) -> Self {
        Self { client }
    }

    /// Fetch the site settings
    #[instrument(skip(self), fields(resource = "setting"))]
    pub async fn get(&self) -> Result<Response, ClientError> {
        self.client.request(Method::GET, SETTINGS_PATH, &()).await
    }

    /// Update site settings with the given fields
    #[instrument(skip(self, data), fields(resource = "setting"))]
    pub async fn update<T>(&self, data: &T) -> Result<Response, ClientError>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.client.request(Method::PUT, SETTINGS_PATH, data).await
    }
}
