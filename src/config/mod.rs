mod parser;

use std::path::PathBuf;
use std::time::Duration;

pub use parser::load_server_config;

/// Process-wide settings, read once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared secret expected in the `x-api-key` header
    pub api_key: Option<String>,
    /// Token expected in `Authorization: Bearer <token>`
    pub bearer_token: Option<String>,
    /// Storage directory, created on startup if missing
    pub data_dir: PathBuf,
    /// Port the HTTP server listens on
    pub port: u16,
    /// How long the placeholder executor works on each task
    pub simulated_work: Duration,
}

impl ServerConfig {
    /// Creates the data directory if it does not exist yet
    pub fn ensure_data_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)
    }

    /// Directory receiving rotating log files
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
