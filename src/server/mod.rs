//! HTTP/1 server for the health endpoints.
//!
//! Each connection is served on its own task. Readiness state is read-only and
//! shared through an [`Arc`]; nothing is carried between requests.
//!
//! ```rust,ignore
//! use health_sidecar::server::HealthServer;
//!
//! let listener = tokio::net::TcpListener::bind(addr).await?;
//! HealthServer::new(readiness)
//!     .serve(listener, shutdown_signal())
//!     .await?;
//! ```

mod routing;

use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

pub use routing::{handle_request, LIVENESS_PATH, READINESS_PATH};

use crate::health::ReadinessAggregator;

/// Pause after a failed accept (e.g. fd exhaustion) before retrying.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(50);

/// Serves liveness and readiness over plain HTTP/1.1.
pub struct HealthServer {
    readiness: Arc<ReadinessAggregator>,
}

impl HealthServer {
    pub fn new(readiness: ReadinessAggregator) -> Self {
        Self {
            readiness: Arc::new(readiness),
        }
    }

    /// Accept connections until `shutdown` resolves.
    ///
    /// Connections already accepted finish on their own tasks.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()>,
    {
        let local_addr = listener.local_addr()?;
        info!(
            "Health server listening on {} ({} readiness probes: {})",
            local_addr,
            self.readiness.len(),
            self.readiness.names().collect::<Vec<_>>().join(", ")
        );

        tokio::pin!(shutdown);

        loop {
            let (stream, remote_addr) = tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!("Accept failed: {}", e);
                        tokio::time::sleep(ACCEPT_BACKOFF).await;
                        continue;
                    }
                },
                _ = &mut shutdown => {
                    info!("Shutdown signal received, no longer accepting connections");
                    return Ok(());
                }
            };

            let _ = stream.set_nodelay(true);
            let readiness = Arc::clone(&self.readiness);

            tokio::spawn(async move {
                let service = service_fn(move |req| {
                    let readiness = Arc::clone(&readiness);
                    async move { Ok::<_, Infallible>(handle_request(req, &readiness).await) }
                });

                let io = TokioIo::new(stream);
                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    debug!("Connection from {} ended with error: {}", remote_addr, e);
                }
            });
        }
    }
}
