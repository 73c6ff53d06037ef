use clap::Parser;

/// Command line interface for the task API server
#[derive(Parser)]
#[command(version, about = "HTTP API for submitting and polling automation tasks")]
pub struct Cli {
    /// Port to listen on; overrides the PORT environment variable
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to daily rotating files under <data dir>/logs
    #[arg(long)]
    pub log_to_file: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["skyvern-api"]).unwrap();
        assert!(cli.port.is_none());
        assert_eq!(cli.logging_level, "info");
        assert!(!cli.log_to_file);
    }

    #[test]
    fn overrides() {
        let cli = Cli::try_parse_from([
            "skyvern-api",
            "--port",
            "9000",
            "--logging-level",
            "debug",
            "--log-to-file",
        ])
        .unwrap();
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.logging_level, "debug");
        assert!(cli.log_to_file);
    }
}
