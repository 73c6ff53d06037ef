/// Service version reported in logs at startup
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the shared secret expected in the `x-api-key` header
pub const API_KEY_ENV: &str = "SKYVERN_API_KEY";

/// Environment variable holding the token expected in `Authorization: Bearer <token>`
pub const BEARER_TOKEN_ENV: &str = "SKYVERN_BEARER_TOKEN";

/// Environment variable pointing at the storage directory
pub const DATA_DIR_ENV: &str = "SKYVERN_DATA_DIR";

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

/// Environment variable holding the duration of the simulated work, in humantime format
pub const SIMULATED_WORK_ENV: &str = "SKYVERN_SIMULATED_WORK";

pub const DEFAULT_DATA_DIR: &str = "/data";

pub const DEFAULT_PORT: u16 = 8000;

pub const DEFAULT_SIMULATED_WORK: &str = "10s";

/// Step budget applied when a submission does not carry `max_steps`
pub const DEFAULT_MAX_STEPS: i64 = 50;

/// Number of steps the simulated executor claims to have taken
pub const SIMULATED_STEPS_TAKEN: u32 = 5;

/// Literal prefix of short task identifiers
pub const SHORT_ID_PREFIX: &str = "t_";

/// Number of UUID characters kept in a short task identifier (32 random bits)
pub const SHORT_ID_FRAGMENT_LEN: usize = 8;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Scheme prefix of the bearer token in the `Authorization` header
pub const BEARER_PREFIX: &str = "Bearer ";

/// File name of the rotating log inside `<data_dir>/logs`
pub const LOG_FILE_NAME: &str = "skyvern-api.log";
