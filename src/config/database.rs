//! Database probe configuration.

use std::fmt;
use std::time::Duration;

use sqlx::postgres::PgSslMode;

use super::parse::{env_opt, env_parse, env_timeout, Lookup};
use super::ConfigError;

/// Connection target and timeout for the database reachability probe.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Server host (DB_HOST, default: localhost).
    pub host: String,
    /// Server port (DB_PORT, default: 5432).
    pub port: u16,
    /// Database name (DB_NAME).
    pub database: Option<String>,
    /// Login role (DB_USER).
    pub user: Option<String>,
    /// Login password (DB_PASSWORD).
    pub password: Option<String>,
    /// TLS negotiation mode (DB_SSLMODE, default: prefer).
    pub ssl_mode: PgSslMode,
    /// Connect timeout (DB_CONNECT_TIMEOUT, default: 5s).
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_lookup(env: Lookup<'_>) -> Result<Self, ConfigError> {
        let ssl_mode = env_opt(env, "DB_SSLMODE").unwrap_or_else(|| "prefer".to_string());

        Ok(Self {
            host: env_opt(env, "DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: env_parse(env, "DB_PORT", 5432)?,
            database: env_opt(env, "DB_NAME"),
            user: env_opt(env, "DB_USER"),
            password: env_opt(env, "DB_PASSWORD"),
            ssl_mode: ssl_mode.parse().map_err(|e: sqlx::Error| ConfigError::Parse {
                key: "DB_SSLMODE".into(),
                value: ssl_mode.clone(),
                error: e.to_string(),
            })?,
            connect_timeout: env_timeout(env, "DB_CONNECT_TIMEOUT", "5s")?,
        })
    }
}

// Manual impl keeps the password out of logs and panics.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("ssl_mode", &self.ssl_mode)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
