//! Providers Module - Dashboard Data Sources
//!
//! `DashboardDataProvider` is the seam between the dashboard and wherever its
//! data comes from. `MockDashboardProvider` serves the hand-authored fixtures;
//! a real analytics backend implements the same trait.

pub mod fixtures;
pub mod mock;

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::models::{
    AnomalyData, AppResult, BotVolumeSplit, DashboardSummary, Dataset, OwnershipEntry,
    PostRugIndicators, SellOffData, TransactionFlowGraph, VolumeBracket, WalletClusteringData,
};

pub use mock::MockDashboardProvider;

/// One read operation per dashboard dataset. Operations are independent and
/// reentrant; callers may issue any subset concurrently.
#[async_trait]
pub trait DashboardDataProvider: Send + Sync {
    async fn fetch_transaction_flow_data(&self) -> AppResult<Arc<TransactionFlowGraph>>;

    async fn fetch_anomaly_data(&self) -> AppResult<Arc<AnomalyData>>;

    /// Whale holdings, largest first, followed by the "others" bucket
    async fn fetch_ownership_data(&self) -> AppResult<Arc<Vec<OwnershipEntry>>>;

    async fn fetch_sell_off_data(&self) -> AppResult<Arc<SellOffData>>;

    /// Histogram ordered from the smallest bracket up
    async fn fetch_volume_bracket_data(&self) -> AppResult<Arc<Vec<VolumeBracket>>>;

    async fn fetch_bot_volume_data(&self) -> AppResult<Arc<Vec<BotVolumeSplit>>>;

    async fn fetch_post_rug_data(&self) -> AppResult<Arc<PostRugIndicators>>;

    async fn fetch_wallet_clustering_data(&self) -> AppResult<Arc<WalletClusteringData>>;

    async fn fetch_dashboard_summary(&self) -> AppResult<Arc<DashboardSummary>>;
}

/// Fetch any dataset by name and encode it as JSON
pub async fn fetch_dataset(
    provider: &dyn DashboardDataProvider,
    dataset: Dataset,
) -> AppResult<serde_json::Value> {
    match dataset {
        Dataset::TransactionFlow => to_json(provider.fetch_transaction_flow_data().await?),
        Dataset::Anomalies => to_json(provider.fetch_anomaly_data().await?),
        Dataset::Ownership => to_json(provider.fetch_ownership_data().await?),
        Dataset::SellOff => to_json(provider.fetch_sell_off_data().await?),
        Dataset::VolumeBrackets => to_json(provider.fetch_volume_bracket_data().await?),
        Dataset::BotVolume => to_json(provider.fetch_bot_volume_data().await?),
        Dataset::PostRug => to_json(provider.fetch_post_rug_data().await?),
        Dataset::WalletClusters => to_json(provider.fetch_wallet_clustering_data().await?),
        Dataset::Summary => to_json(provider.fetch_dashboard_summary().await?),
    }
}

fn to_json<T: Serialize>(payload: Arc<T>) -> AppResult<serde_json::Value> {
    Ok(serde_json::to_value(payload.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProviderConfig;

    #[tokio::test]
    async fn test_fetch_dataset_summary_json() {
        let provider = MockDashboardProvider::new(ProviderConfig::instant());
        let value = fetch_dataset(&provider, Dataset::Summary).await.unwrap();
        assert_eq!(value["totalTransactions"], 1234);
        assert_eq!(value["anomalyCount"], 5);
        assert_eq!(value["suspiciousChange"], -5.2);
    }

    #[tokio::test]
    async fn test_fetch_dataset_through_trait_object() {
        let provider: Arc<dyn DashboardDataProvider> =
            Arc::new(MockDashboardProvider::new(ProviderConfig::instant()));
        let value = fetch_dataset(provider.as_ref(), Dataset::BotVolume).await.unwrap();
        assert_eq!(value[0]["type"], "Bot Transactions");
        assert_eq!(value[1]["value"], 57.3);
    }
}
