//! PostgreSQL reachability probe.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tokio::time::{timeout, Instant};
use tracing::debug;

use super::{DependencyProbe, Outcome};
use crate::config::DatabaseConfig;

/// Opens a connection to the configured database and closes it straight away.
///
/// No query is issued. Every readiness call costs one real connection, so
/// orchestrators should not poll aggressively.
pub struct DatabaseProbe {
    options: PgConnectOptions,
    timeout: Duration,
}

impl DatabaseProbe {
    /// Report key for the database dependency.
    pub const NAME: &'static str = "database";

    pub fn new(config: &DatabaseConfig) -> Self {
        let mut options = PgConnectOptions::new_without_pgpass()
            .host(&config.host)
            .port(config.port)
            .ssl_mode(config.ssl_mode)
            .application_name(env!("CARGO_PKG_NAME"));

        if let Some(ref database) = config.database {
            options = options.database(database);
        }
        if let Some(ref user) = config.user {
            options = options.username(user);
        }
        if let Some(ref password) = config.password {
            options = options.password(password);
        }

        Self {
            options,
            timeout: config.connect_timeout,
        }
    }
}

#[async_trait]
impl DependencyProbe for DatabaseProbe {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn check(&self) -> Outcome {
        let start = Instant::now();

        // Dropping the connect future on timeout closes the socket.
        let conn = match timeout(self.timeout, PgConnection::connect_with(&self.options)).await {
            Ok(Ok(conn)) => conn,
            Ok(Err(e)) => return Outcome::failed(e),
            Err(_) => {
                return Outcome::failed(format!("connection timed out after {:?}", self.timeout))
            }
        };

        let connect_ms = start.elapsed().as_millis() as u64;
        let remaining = self.timeout.saturating_sub(start.elapsed());

        // Reachability is already proven; a slow or failed close only gets logged.
        match timeout(remaining, conn.close()).await {
            Ok(Ok(())) => debug!(connect_ms, "Database connection closed"),
            Ok(Err(e)) => debug!(connect_ms, error = %e, "Database close failed"),
            Err(_) => debug!(connect_ms, "Database close timed out, connection dropped"),
        }

        Outcome::Connected
    }
}
