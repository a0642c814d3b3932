use tokio::net::TcpListener;
use tracing::info;

use health_sidecar::config::Config;
use health_sidecar::{health, logging, HealthServer, VERSION};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    logging::init(&config.logging);

    info!("Starting health_sidecar {}", VERSION);
    config.log_summary();

    // Probes are I/O bound; one thread is plenty.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(config))
}

async fn async_main(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let readiness = health::readiness_from_config(&config)?;
    let listener = TcpListener::bind(config.server.listen_addr).await?;

    HealthServer::new(readiness)
        .serve(listener, shutdown_signal())
        .await?;

    info!("Shutting down...");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM (sent by the container runtime on stop).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
