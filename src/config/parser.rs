use super::ServerConfig;
use crate::constants::*;
use crate::errors::Error;
use std::path::PathBuf;

use tracing::info;

/// Loads the server configuration from the process environment
pub fn load_server_config() -> Result<ServerConfig, Error> {
    let config = parse_server_config(|key| std::env::var(key).ok())?;
    info!(
        "Loaded server configuration: port {}, data dir {}",
        config.port,
        config.data_dir.display()
    );
    Ok(config)
}

/// Builds a configuration from an arbitrary variable lookup
///
/// # Errors
///
/// Returns an error if:
/// * `PORT` is not a valid port number
/// * `SKYVERN_SIMULATED_WORK` is not a humantime duration
pub fn parse_server_config<F>(lookup: F) -> Result<ServerConfig, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let port = match non_empty(PORT_ENV) {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|e| Error::Config(format!("{} must be a port number: {}", PORT_ENV, e)))?,
        None => DEFAULT_PORT,
    };

    let simulated_work_raw =
        non_empty(SIMULATED_WORK_ENV).unwrap_or_else(|| DEFAULT_SIMULATED_WORK.to_string());
    let simulated_work = humantime::parse_duration(simulated_work_raw.trim()).map_err(|e| {
        Error::Config(format!("{} must be a duration: {}", SIMULATED_WORK_ENV, e))
    })?;

    Ok(ServerConfig {
        api_key: non_empty(API_KEY_ENV),
        bearer_token: non_empty(BEARER_TOKEN_ENV),
        data_dir: PathBuf::from(
            non_empty(DATA_DIR_ENV).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
        ),
        port,
        simulated_work,
    })
}
