//! Async client for the A2Reviews review-management API.
//!
//! Requests carry a JSON body with the current UNIX timestamp merged into the
//! caller's data, and are signed with HMAC-SHA256 over the form-encoded body
//! using the site API secret.
pub mod client;
pub mod core;
pub mod resources;

pub use client::{builder::A2ReviewsClientBuilder, A2ReviewsClient};
pub use crate::core::{
    config::ClientConfig,
    errors::{ApiError, ClientError},
};
pub use resources::{Resource, Review, Setting};
