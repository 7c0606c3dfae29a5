//! # Chat API
//!
//! REST API for chat users and messages.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - SQLite connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use chat_api::config::Settings;
use chat_api::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    chat_api::telemetry::init_tracing();

    info!("Starting Chat API...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
