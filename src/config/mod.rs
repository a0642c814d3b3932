//! Configuration module for health_sidecar.
//!
//! Configuration is read once from environment variables at startup and never
//! mutated afterwards. Probes receive their section by value.
//!
//! # Example
//!
//! ```rust,ignore
//! use health_sidecar::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Listen address: {}", config.server.listen_addr);
//! println!("Sibling: {}", config.sibling.url());
//! ```

mod database;
mod error;
mod logging;
mod parse;
mod server;
mod sibling;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use parse::{parse_duration, Lookup};
pub use server::{ServerConfig, DEFAULT_HEALTH_PORT};
pub use sibling::SiblingConfig;

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database probe configuration.
    pub database: DatabaseConfig,
    /// Sibling service probe configuration.
    pub sibling: SiblingConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup(env: Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_lookup(env)?,
            database: DatabaseConfig::from_lookup(env)?,
            sibling: SiblingConfig::from_lookup(env)?,
            logging: LoggingConfig::from_lookup(env)?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::info;

        info!("Configuration loaded:");
        info!("  Listen: {}", self.server.listen_addr);
        info!(
            "  Database: {}:{}/{} (user: {}, sslmode: {:?}, timeout: {:?})",
            self.database.host,
            self.database.port,
            self.database.database.as_deref().unwrap_or("-"),
            self.database.user.as_deref().unwrap_or("-"),
            self.database.ssl_mode,
            self.database.connect_timeout
        );
        info!(
            "  Sibling '{}': {} (timeout: {:?})",
            self.sibling.name,
            self.sibling.url(),
            self.sibling.timeout
        );
        info!("  Log filter: {}", self.logging.filter);
    }
}
