// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use hattrick_bridge::config::Config;
use hattrick_bridge::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Credentials are validated later, only by commands that talk to the API
    let config = Config::load_unvalidated().await?;

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = commands::run(&args, &config).await;
    if let Err(e) = &result {
        tracing::error!("Command failed: {e}");
    }
    result
}
