//! Rug Radar Dashboard API Server
//!
//! Serves the dashboard datasets over HTTP.
//!
//! Usage:
//!   cargo run --bin rug_radar_api
//!
//! Environment:
//!   RUG_RADAR_PORT          - Server port (default: 8080, PORT takes precedence)
//!   RUG_RADAR_HOST          - Server host (default: 0.0.0.0)
//!   RUG_RADAR_LATENCY_SCALE - Multiplier for simulated latency (default: 1.0)
//!   RUST_LOG                - Log level (default: info)

use rug_radar::api::{create_router, AppState};
use rug_radar::utils::constants::{APP_NAME, APP_VERSION};
use rug_radar::{
    self_check, DashboardDataProvider, Dataset, MockDashboardProvider, ServerConfig,
    TelemetryCollector,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    let provider: Arc<dyn DashboardDataProvider> =
        Arc::new(MockDashboardProvider::new(config.provider));

    let report = self_check(provider.as_ref()).await?;
    if !report.is_clean() {
        warn!(
            violations = report.violation_count(),
            "Serving fixtures that fail the self-check"
        );
    }

    let telemetry = Arc::new(TelemetryCollector::new());
    let telemetry_for_shutdown = telemetry.clone();
    let state = Arc::new(AppState::new(provider, telemetry));
    let app = create_router(state);

    info!("🚀 {} v{} starting on http://{}", APP_NAME, APP_VERSION, addr);
    info!(latency_scale = config.provider.latency_scale, "Simulated latency");
    info!("Endpoints:");
    info!("  GET /v1/health            - Health check");
    info!("  GET /v1/stats             - Request statistics");
    info!("  GET /v1/datasets          - Dataset catalogue");
    for dataset in Dataset::ALL {
        info!("  GET /v1/datasets/{:<16}", dataset.as_str());
    }
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("🛑 Shutdown signal received");
    let stats = telemetry_for_shutdown.get_stats();
    info!("   Total requests: {}", stats.total_requests);
    info!("   Avg latency:    {:.2}ms", stats.avg_latency_ms);
    info!("👋 {} shutdown complete", APP_NAME);

    Ok(())
}
