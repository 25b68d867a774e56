use cabi_exporter::cache::SnapshotCache;
use cabi_exporter::config::ExporterConfig;
use cabi_exporter::gbfs::GbfsClient;
use cabi_exporter::metrics::StationMetrics;
use cabi_exporter::stations::StationComposer;
use cabi_exporter::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ExporterConfig::from_env()?;

    let client = GbfsClient::new(config.gbfs.clone())?;
    let snapshots = SnapshotCache::new(StationComposer::new(client), &config.cache);
    let metrics = StationMetrics::new()?;

    let app = create_router(AppState::new(snapshots, metrics));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Capital Bikeshare Prometheus exporter listening on port {}", config.port);
    info!("Metrics available at http://localhost:{}/metrics", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
