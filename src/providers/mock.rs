//! Fixture-backed provider
//!
//! Every accessor waits out its dataset's simulated round trip and then hands
//! back a shared handle to the static fixture. Nothing here can fail.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::fixtures::{
    ANOMALIES, BOT_VOLUME, DASHBOARD_SUMMARY, OWNERSHIP, POST_RUG, SELL_OFF, TRANSACTION_FLOW,
    VOLUME_BRACKETS, WALLET_CLUSTERS,
};
use super::DashboardDataProvider;
use crate::models::{
    AnomalyData, AppResult, BotVolumeSplit, DashboardSummary, Dataset, OwnershipEntry,
    PostRugIndicators, ProviderConfig, SellOffData, TransactionFlowGraph, VolumeBracket,
    WalletClusteringData,
};

#[derive(Debug, Clone, Default)]
pub struct MockDashboardProvider {
    config: ProviderConfig,
}

impl MockDashboardProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Suspend for the simulated round trip, then return the fixture.
    /// Dropping the future mid-sleep just drops the timer.
    async fn serve<T: Send + Sync>(&self, dataset: Dataset, fixture: &Arc<T>) -> AppResult<Arc<T>> {
        let delay = self.config.delay_for(dataset);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        debug!(dataset = %dataset, delay_ms = delay.as_millis() as u64, "Serving fixture");
        Ok(Arc::clone(fixture))
    }
}

#[async_trait]
impl DashboardDataProvider for MockDashboardProvider {
    async fn fetch_transaction_flow_data(&self) -> AppResult<Arc<TransactionFlowGraph>> {
        self.serve(Dataset::TransactionFlow, &*TRANSACTION_FLOW).await
    }

    async fn fetch_anomaly_data(&self) -> AppResult<Arc<AnomalyData>> {
        self.serve(Dataset::Anomalies, &*ANOMALIES).await
    }

    async fn fetch_ownership_data(&self) -> AppResult<Arc<Vec<OwnershipEntry>>> {
        self.serve(Dataset::Ownership, &*OWNERSHIP).await
    }

    async fn fetch_sell_off_data(&self) -> AppResult<Arc<SellOffData>> {
        self.serve(Dataset::SellOff, &*SELL_OFF).await
    }

    async fn fetch_volume_bracket_data(&self) -> AppResult<Arc<Vec<VolumeBracket>>> {
        self.serve(Dataset::VolumeBrackets, &*VOLUME_BRACKETS).await
    }

    async fn fetch_bot_volume_data(&self) -> AppResult<Arc<Vec<BotVolumeSplit>>> {
        self.serve(Dataset::BotVolume, &*BOT_VOLUME).await
    }

    async fn fetch_post_rug_data(&self) -> AppResult<Arc<PostRugIndicators>> {
        self.serve(Dataset::PostRug, &*POST_RUG).await
    }

    async fn fetch_wallet_clustering_data(&self) -> AppResult<Arc<WalletClusteringData>> {
        self.serve(Dataset::WalletClusters, &*WALLET_CLUSTERS).await
    }

    async fn fetch_dashboard_summary(&self) -> AppResult<Arc<DashboardSummary>> {
        self.serve(Dataset::Summary, &*DASHBOARD_SUMMARY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_waits_nominal_delay() {
        let provider = MockDashboardProvider::default();
        let start = tokio::time::Instant::now();
        provider.fetch_dashboard_summary().await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_millis(310));
    }

    #[tokio::test(start_paused = true)]
    async fn test_instant_profile_skips_delay() {
        let provider = MockDashboardProvider::new(ProviderConfig::instant());
        let start = tokio::time::Instant::now();
        provider.fetch_post_rug_data().await.unwrap();
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_returns_shared_fixture() {
        let provider = MockDashboardProvider::new(ProviderConfig::instant());
        let first = provider.fetch_wallet_clustering_data().await.unwrap();
        let second = provider.fetch_wallet_clustering_data().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
