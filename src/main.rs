use a2reviews_client::{A2ReviewsClient, ClientConfig};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Reads A2REV_SITE_API_KEY / A2REV_SITE_API_SECRET, from .env when present
    let config = ClientConfig::from_env_file()?;
    let client = A2ReviewsClient::new(config)?;

    println!("Fetching reviews...");
    let response = client.review().list(&json!({"page": 1})).await?;
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        println!("Reviews: {}", body);
    } else {
        println!("Request failed with status {}: {}", status, body);
    }

    Ok(())
}
