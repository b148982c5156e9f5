//! Records service binary entry point.
//!
//! Loads configuration from the environment, opens the database, and serves
//! HTTP until Ctrl+C or SIGTERM. Any startup failure exits with status 1.

use records_service::config::{log_filter, Config, DEFAULT_LOG_LEVEL};
use records_service::server::{run, shutdown_signal};

#[tokio::main]
async fn main() {
    // Loads .env before anything reads the environment
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map_or(DEFAULT_LOG_LEVEL, |config| config.log_level.as_str());
    let filter = log_filter(level);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("records-service starting...");

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: database={}, listen={}:{}",
        config.database_path,
        config.bind_address,
        config.port
    );

    if let Err(e) = run(&config, shutdown_signal()).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }

    tracing::info!("records-service shutdown complete");
}
