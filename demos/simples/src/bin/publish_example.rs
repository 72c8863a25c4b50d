use cloudplugs_client::application::client::Session;
use cloudplugs_client::application::config::Config;
use cloudplugs_client::application::services::DataService;
use cloudplugs_client::utils::setup_logger;
use serde_json::json;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting publish example");

    // Credentials come from CLOUDPLUGS_PLUG_ID / CLOUDPLUGS_PASSWORD
    let config = Config::new();
    let session = Session::from_config(&config)?;

    let temperature: f64 = rand::random_range(15.0..30.0);
    let body = json!({ "data": (temperature * 10.0).round() / 10.0 });

    match session.publish_data(Some("temperature"), &body).await {
        Ok(response) => info!("Published {}: {}", body, response.body()),
        Err(e) => {
            error!(
                "Publish failed ({}, status {}): {}",
                e.code_message(),
                e.http_status(),
                e.payload().unwrap_or_default()
            );
            return Err(e.into());
        }
    }

    Ok(())
}
