// Configuration module entry point
// Layers defaults, an optional config file, environment variables, and the
// required command-line flags into one Config

mod state;
mod types;

use std::net::SocketAddr;

use crate::cli::Cli;

pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, StoreConfig};

impl Config {
    /// Load configuration.
    ///
    /// Precedence, lowest to highest: built-in defaults, the optional
    /// config file (base name from `--config`, default "config"),
    /// `NOTECACHED_*` environment variables, then the required CLI flags
    /// for host, port, and storage directory.
    pub fn load(cli: &Cli) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&cli.config).required(false))
            .add_source(config::Environment::with_prefix("NOTECACHED"))
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_override("server.host", cli.host.clone())?
            .set_override("server.port", cli.port)?
            .set_override("store.dir", cli.cache.clone())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
