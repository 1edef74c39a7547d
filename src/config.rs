// Configuration module
// Loads settings from config.toml, environment variables, and built-in defaults.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; defaults to the number of CPU cores.
    pub workers: Option<usize>,
}

/// Channel store configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path to the backing JSON file.
    pub path: String,
    /// Create the backing file (and parent directory) when it is missing.
    pub create_missing: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Load configuration from "config.toml" in the working directory.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, later ones winning: built-in defaults, the config file,
    /// `APP_`-prefixed environment variables, and finally a bare `PORT`
    /// variable overriding the listen port.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("store.path", "channels.json")?
            .set_default("store.create_missing", true)?
            .set_default("logging.access_log", true)?;

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.store.path)
    }
}
