//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

use super::parse::{env_parse, Lookup};
use super::ConfigError;

/// Default listening port for the health endpoint.
pub const DEFAULT_HEALTH_PORT: u16 = 8080;

/// Server configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address, all interfaces on HEALTH_PORT (default: 0.0.0.0:8080).
    pub listen_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_lookup(env: Lookup<'_>) -> Result<Self, ConfigError> {
        let port: u16 = env_parse(env, "HEALTH_PORT", DEFAULT_HEALTH_PORT)?;

        Ok(Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        })
    }
}
