//! API Route Configuration

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the API router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // The dashboard UI is served from its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health & Status
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        // Catalogue & generic dispatch
        .route("/datasets", get(handlers::list_datasets))
        .route("/datasets/:slug", get(handlers::dataset_by_slug))
        // One route per dashboard panel
        .route("/dashboard/summary", get(handlers::dashboard_summary))
        .route("/transaction-flow", get(handlers::transaction_flow))
        .route("/anomalies", get(handlers::anomalies))
        .route("/ownership", get(handlers::ownership))
        .route("/sell-off", get(handlers::sell_off))
        .route("/volume-brackets", get(handlers::volume_brackets))
        .route("/bot-volume", get(handlers::bot_volume))
        .route("/post-rug", get(handlers::post_rug))
        .route("/wallet-clusters", get(handlers::wallet_clusters));

    Router::new()
        .nest("/v1", api_v1)
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
