//! Main entry point for the application.
//!
//! This module loads environment variables and configuration, initializes
//! logging, and serves the task API.
//!
//! Every API surface (`/`, `/api/v1`, `/api/v2`) is backed by a single
//! [`crate::core::TaskService`], so tasks submitted through one alias are visible
//! through all of them.

mod api;
mod cli;
mod config;
mod constants;
mod core;
mod errors;
mod utils;

use clap::Parser;
use crate::core::{Authenticator, SimulatedExecutor, TaskService};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Load environment variables and server configuration
/// 3. Create the data directory
/// 4. Initialize logging system
/// 5. Build the task service and start the API server
#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let dotenv = dotenvy::dotenv();

    let mut config = match config::load_server_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = cli.port {
        config.port = port;
    }

    if let Err(e) = config.ensure_data_dir() {
        eprintln!(
            "Failed to create data directory {}: {}",
            config.data_dir.display(),
            e
        );
        std::process::exit(1);
    }

    let log_dir = config.log_dir();
    utils::init_logging(&cli.logging_level, cli.log_to_file.then_some(log_dir.as_path()));

    if let Err(e) = dotenv {
        warn!("Failed to load .env file: {}", e);
    }

    let authenticator = Authenticator::new(config.api_key.clone(), config.bearer_token.clone());
    if !authenticator.is_enabled() {
        warn!("No API key or bearer token configured, authentication is disabled");
    }
    let executor = Arc::new(SimulatedExecutor::new(config.simulated_work));
    let service = TaskService::new(authenticator, executor);

    info!(
        "Starting skyvern-api {} on port {}",
        constants::SERVICE_VERSION,
        config.port
    );
    if let Err(e) = api::server::launch_server(config.port, service).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
