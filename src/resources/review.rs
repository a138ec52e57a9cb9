use crate::client::A2ReviewsClient;
use crate::core::errors::ClientError;
use reqwest::{Method, Response};
use serde::Serialize;
use tracing::instrument;

const REVIEWS_PATH: &str = "/reviews";

/// Review endpoints
#[derive(Debug, Clone, Copy)]
pub struct Review<'a> {
    client: &'a A2ReviewsClient,
}

impl<'a> Review<'a> {
    pub fn new(client: &'a A2ReviewsClient) -> Self {
        Self { client }
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", REVIEWS_PATH, id)
    }

    /// List reviews. `query` holds filters such as `page` or `product_id`
    /// and travels in the signed body.
    #[instrument(skip(self, query), fields(resource = "review"))]
    pub async fn list<T>(&self, query: &T) -> Result<Response, ClientError>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.client.request(Method::GET, REVIEWS_PATH, query).await
    }

    #[instrument(skip(self), fields(resource = "review"))]
    pub async fn get(&self, id: &str) -> Result<Response, ClientError> {
        self.client
            .request(Method::GET, &Self::item_path(id), &())
            .await
    }

    #[instrument(skip(self, data), fields(resource = "review"))]
    pub async fn create<T>(&self, data: &T) -> Result<Response, ClientError>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.client.request(Method::POST, REVIEWS_PATH, data).await
    }

    #[instrument(skip(self, data), fields(resource = "review"))]
    pub async fn update<T>(&self, id: &str, data: &T) -> Result<Response, ClientError>
    where
        T: Serialize + ?Sized + Sync,
    {
        self.client
            .request(Method::PUT, &Self::item_path(id), data)
            .await
    }

    #[instrument(skip(self), fields(resource = "review"))]
    pub async fn delete(&self, id: &str) -> Result<Response, ClientError> {
        self.client
            .request(Method::DELETE, &Self::item_path(id), &())
            .await
    }
}
