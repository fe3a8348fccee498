use anyhow::{Context, Result};
use es_translator::{config, tui};
use std::sync::Mutex;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = config::validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // The terminal belongs to the UI, so logs go to a file.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.logs.file)
        .with_context(|| format!("Failed to open log file {}", config.logs.file))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&log_level))
        .with_writer(Mutex::new(log_file))
        .json()
        .init();

    info!("Starting es-translator with log level: {}", log_level);
    info!("Configuration loaded successfully");

    tui::run(config).await?;

    Ok(())
}
