use std::sync::Arc;

use catalog_backend::cli::{Cli, execute_command};
use catalog_backend::config::{AppSettings, LoggingConfig, init_logging};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load settings (reads .env first)
    let settings = Arc::new(AppSettings::from_env()?);

    init_logging(&LoggingConfig::from_env())?;

    let cli = Cli::parse();

    if let Err(e) = execute_command(cli, settings).await {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
