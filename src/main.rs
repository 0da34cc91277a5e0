//! posts-api server entry point.
//!
//! Loads configuration, opens storage, and starts the Axum HTTP server.

use posts_api::config::ServiceConfig;
use posts_api::startup;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = ServiceConfig::from_env()?;

    // Initialize tracing
    startup::init_tracing(config.log_format);

    if let Err(err) = startup::run(config).await {
        tracing::error!(error = %err, "posts-api failed to start");
        return Err(err.into());
    }

    Ok(())
}
