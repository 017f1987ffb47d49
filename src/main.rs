// src/main.rs
mod cli;
mod commands;
mod logging;

use bangumi_client::config::Config;
use bangumi_client::error::AppError;
use clap::Parser;
use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config commands work on the stored file; env overrides are never saved
    if let Command::Config(config_args) = &args.command {
        return commands::handle_config_command(config_args).await;
    }

    let config = Config::load().await?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = commands::handle_command(&args.command, &config).await;
    if let Err(e) = &result {
        tracing::error!("Command failed: {e}");
    }
    result
}
