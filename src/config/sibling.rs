//! Sibling HTTP service probe configuration.

use std::time::Duration;

use super::parse::{env_opt, env_parse, env_timeout, Lookup};
use super::ConfigError;

/// Target and timeout for the co-located sibling service probe.
#[derive(Clone, Debug)]
pub struct SiblingConfig {
    /// Report key for this dependency (SIBLING_NAME, default: litellm).
    pub name: String,
    /// Host (SIBLING_HOST, default: localhost).
    pub host: String,
    /// Port (PORT, default: 4000).
    pub port: u16,
    /// Endpoint listing available models (SIBLING_PATH, default: /v1/models).
    pub path: String,
    /// Request timeout (SIBLING_TIMEOUT, default: 2s).
    pub timeout: Duration,
}

impl SiblingConfig {
    pub fn from_lookup(env: Lookup<'_>) -> Result<Self, ConfigError> {
        let path = env_opt(env, "SIBLING_PATH").unwrap_or_else(|| "/v1/models".to_string());
        if !path.starts_with('/') {
            return Err(ConfigError::Invalid {
                key: "SIBLING_PATH".into(),
                message: format!("'{}' must start with '/'", path),
            });
        }

        Ok(Self {
            name: env_opt(env, "SIBLING_NAME").unwrap_or_else(|| "litellm".to_string()),
            host: env_opt(env, "SIBLING_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: env_parse(env, "PORT", 4000)?,
            path,
            timeout: env_timeout(env, "SIBLING_TIMEOUT", "2s")?,
        })
    }

    /// Full URL of the probed endpoint.
    pub fn url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }
}
