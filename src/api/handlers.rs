//! API Request Handlers

use axum::extract::{Json, OriginalUri, Path, State};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

use super::types::*;
use crate::models::{
    AnomalyData, AppError, AppResult, BotVolumeSplit, DashboardSummary, Dataset, OwnershipEntry,
    PostRugIndicators, SellOffData, TransactionFlowGraph, VolumeBracket, WalletClusteringData,
};
use crate::providers::{fetch_dataset, DashboardDataProvider};
use crate::utils::constants::APP_VERSION;
use crate::utils::telemetry::{TelemetryCollector, TelemetryStats};

/// Shared application state
pub struct AppState {
    pub provider: Arc<dyn DashboardDataProvider>,
    pub telemetry: Arc<TelemetryCollector>,
}

impl AppState {
    pub fn new(provider: Arc<dyn DashboardDataProvider>, telemetry: Arc<TelemetryCollector>) -> Self {
        Self {
            provider,
            telemetry,
        }
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiFailure>;

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Await a provider call, record it, and wrap it in the response envelope
async fn serve<T, F>(state: &AppState, dataset: Dataset, fetch: F) -> ApiResult<T>
where
    T: Serialize,
    F: Future<Output = AppResult<T>>,
{
    let start = Instant::now();
    match fetch.await {
        Ok(data) => {
            state.telemetry.record(dataset, start.elapsed());
            Ok(Json(ApiResponse::success(data, elapsed_ms(start))))
        }
        Err(err) => {
            warn!(dataset = %dataset, code = err.code_str(), "Dataset fetch failed: {}", err.message);
            Err(ApiFailure::new(err, elapsed_ms(start)))
        }
    }
}

// ============================================
// Health Check & Stats
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.telemetry.uptime_seconds(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<TelemetryStats>> {
    let start = Instant::now();
    let stats = state.telemetry.get_stats();
    Json(ApiResponse::success(stats, elapsed_ms(start)))
}

pub async fn list_datasets() -> Json<ApiResponse<Vec<DatasetInfo>>> {
    let start = Instant::now();
    let catalogue = Dataset::ALL.into_iter().map(DatasetInfo::from).collect();
    Json(ApiResponse::success(catalogue, elapsed_ms(start)))
}

// ============================================
// Datasets
// ============================================

pub async fn transaction_flow(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Arc<TransactionFlowGraph>> {
    serve(&state, Dataset::TransactionFlow, state.provider.fetch_transaction_flow_data()).await
}

pub async fn anomalies(State(state): State<Arc<AppState>>) -> ApiResult<Arc<AnomalyData>> {
    serve(&state, Dataset::Anomalies, state.provider.fetch_anomaly_data()).await
}

pub async fn ownership(State(state): State<Arc<AppState>>) -> ApiResult<Arc<Vec<OwnershipEntry>>> {
    serve(&state, Dataset::Ownership, state.provider.fetch_ownership_data()).await
}

pub async fn sell_off(State(state): State<Arc<AppState>>) -> ApiResult<Arc<SellOffData>> {
    serve(&state, Dataset::SellOff, state.provider.fetch_sell_off_data()).await
}

pub async fn volume_brackets(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Arc<Vec<VolumeBracket>>> {
    serve(&state, Dataset::VolumeBrackets, state.provider.fetch_volume_bracket_data()).await
}

pub async fn bot_volume(State(state): State<Arc<AppState>>) -> ApiResult<Arc<Vec<BotVolumeSplit>>> {
    serve(&state, Dataset::BotVolume, state.provider.fetch_bot_volume_data()).await
}

pub async fn post_rug(State(state): State<Arc<AppState>>) -> ApiResult<Arc<PostRugIndicators>> {
    serve(&state, Dataset::PostRug, state.provider.fetch_post_rug_data()).await
}

pub async fn wallet_clusters(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Arc<WalletClusteringData>> {
    serve(&state, Dataset::WalletClusters, state.provider.fetch_wallet_clustering_data()).await
}

pub async fn dashboard_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Arc<DashboardSummary>> {
    serve(&state, Dataset::Summary, state.provider.fetch_dashboard_summary()).await
}

/// Generic dispatch by slug, e.g. `/v1/datasets/post-rug`
pub async fn dataset_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<serde_json::Value> {
    let start = Instant::now();
    let dataset: Dataset = slug
        .parse()
        .map_err(|err| ApiFailure::new(err, elapsed_ms(start)))?;

    serve(&state, dataset, fetch_dataset(state.provider.as_ref(), dataset)).await
}

/// Fallback for paths no route matches
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiFailure {
    ApiFailure::new(AppError::not_found(format!("No route for {}", uri.path())), 0.0)
}
