//! Integration tests for the fixture provider

use rug_radar::core::integrity::*;
use rug_radar::models::WalletAction;
use rug_radar::{
    fetch_and_check, fetch_dataset, self_check, DashboardDataProvider, Dataset,
    MockDashboardProvider, ProviderConfig,
};
use std::sync::Arc;
use std::time::Duration;

fn instant_provider() -> MockDashboardProvider {
    MockDashboardProvider::new(ProviderConfig::instant())
}

#[tokio::test]
async fn test_every_dataset_is_deterministic() {
    let provider = instant_provider();
    for dataset in Dataset::ALL {
        let first = fetch_dataset(&provider, dataset).await.unwrap();
        let second = fetch_dataset(&provider, dataset).await.unwrap();
        assert_eq!(first, second, "{} changed between calls", dataset);
    }
}

#[tokio::test]
async fn test_transaction_flow_graph() {
    let graph = instant_provider().fetch_transaction_flow_data().await.unwrap();
    assert_eq!(graph.nodes.len(), 9);
    assert_eq!(graph.links.len(), 9);
    assert_eq!(graph.nodes[7].id, "exchange1");
    assert_eq!(graph.nodes[7].size, 30);
    assert!(check_transaction_flow(&graph).is_empty());
}

#[tokio::test]
async fn test_anomaly_dates_are_in_series() {
    let data = instant_provider().fetch_anomaly_data().await.unwrap();
    assert_eq!(data.series.dates.len(), data.series.values.len());
    for anomaly in &data.anomalies {
        assert!(data.series.dates.contains(&anomaly.date));
    }
    assert_eq!(data.anomalies.len(), 2);
    assert_eq!(data.anomalies[1].value, 350);
}

#[tokio::test]
async fn test_ownership_entries() {
    let entries = instant_provider().fetch_ownership_data().await.unwrap();
    assert_eq!(entries.len(), 11);
    assert_eq!(entries[0].id, "wallet1");
    assert_eq!(entries[0].value, 25.3);
    assert_eq!(entries[10].label, "Others");
}

#[tokio::test]
async fn test_sell_off_series_lengths() {
    let data = instant_provider().fetch_sell_off_data().await.unwrap();
    assert_eq!(data.wallets.len(), 4);
    for wallet in &data.wallets {
        assert_eq!(wallet.balances.len(), data.dates.len());
    }
}

#[tokio::test]
async fn test_volume_brackets() {
    let brackets = instant_provider().fetch_volume_bracket_data().await.unwrap();
    let total: u64 = brackets.iter().map(|b| b.count).sum();
    assert_eq!(brackets.len(), 8);
    assert_eq!(total, 3037);
}

#[tokio::test]
async fn test_bot_volume_sums_to_100() {
    let splits = instant_provider().fetch_bot_volume_data().await.unwrap();
    assert_eq!(splits.len(), 2);
    let sum: f64 = splits.iter().map(|s| s.value).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_post_rug_indicators() {
    let data = instant_provider().fetch_post_rug_data().await.unwrap();
    assert_eq!(data.lp_pull, 87.5);
    assert_eq!(data.price_data.rug_event, "2023-04-05");
    assert_eq!(data.activity_data.rug_event, "2023-04-05");
    assert!(data.price_data.dates.contains(&data.price_data.rug_event));
    assert!(data.activity_data.dates.contains(&data.activity_data.rug_event));
    assert_eq!(data.price_data.dates.len(), data.price_data.prices.len());
    assert_eq!(
        data.activity_data.dates.len(),
        data.activity_data.transactions.len()
    );
}

#[tokio::test]
async fn test_wallet_clustering_timeline() {
    let data = instant_provider().fetch_wallet_clustering_data().await.unwrap();
    assert_eq!(data.nodes.len(), 10);
    assert_eq!(data.links.len(), 13);
    assert_eq!(data.timeline.len(), 9);
    for event in &data.timeline {
        assert_eq!(
            event.target.is_some(),
            event.action == WalletAction::Transfer,
            "target mismatch at {}",
            event.time
        );
    }
}

#[tokio::test]
async fn test_dashboard_summary() {
    let summary = instant_provider().fetch_dashboard_summary().await.unwrap();
    assert_eq!(summary.total_transactions, 1234);
    assert_eq!(summary.anomaly_count, 5);
    assert_eq!(summary.suspicious_change, -5.2);
}

#[tokio::test]
async fn test_self_check_is_clean() {
    let report = self_check(&instant_provider()).await.unwrap();
    assert!(report.is_clean(), "{:?}", report);
    assert_eq!(report.checks.len(), 9);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_fetches_overlap() {
    let provider: Arc<dyn DashboardDataProvider> =
        Arc::new(MockDashboardProvider::new(ProviderConfig::default()));
    let start = tokio::time::Instant::now();

    let (summary, rug, bots, clusters, sell_off, ownership, brackets, anomalies, flow) = tokio::join!(
        provider.fetch_dashboard_summary(),
        provider.fetch_post_rug_data(),
        provider.fetch_bot_volume_data(),
        provider.fetch_wallet_clustering_data(),
        provider.fetch_sell_off_data(),
        provider.fetch_ownership_data(),
        provider.fetch_volume_bracket_data(),
        provider.fetch_anomaly_data(),
        provider.fetch_transaction_flow_data(),
    );

    // Bound to the slowest dataset, not the sum of all nine
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(800));
    assert!(elapsed < Duration::from_millis(900));

    assert_eq!(summary.unwrap().total_transactions, 1234);
    assert_eq!(rug.unwrap().lp_pull, 87.5);
    assert_eq!(bots.unwrap().len(), 2);
    assert_eq!(clusters.unwrap().timeline.len(), 9);
    assert_eq!(sell_off.unwrap().wallets.len(), 4);
    assert_eq!(ownership.unwrap().len(), 11);
    assert_eq!(brackets.unwrap().len(), 8);
    assert_eq!(anomalies.unwrap().anomalies.len(), 2);
    assert_eq!(flow.unwrap().nodes.len(), 9);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_and_check_pays_one_round_trip() {
    let provider = MockDashboardProvider::default();
    let start = tokio::time::Instant::now();

    let (payloads, report) = fetch_and_check(&provider, &Dataset::ALL).await.unwrap();

    // One concurrent fetch per dataset, no second pass for the checks
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(800));
    assert!(elapsed < Duration::from_millis(900), "took {:?}", elapsed);

    assert!(report.is_clean(), "{:?}", report);
    assert_eq!(payloads.len(), 9);
    for (dataset, (payload, check)) in Dataset::ALL.into_iter().zip(payloads.iter().zip(&report.checks)) {
        assert_eq!(check.dataset, dataset);
        assert_eq!(*payload, fetch_dataset(&instant_provider(), dataset).await.unwrap());
    }
}

#[tokio::test]
async fn test_fetch_and_check_keeps_requested_order() {
    let requested = [Dataset::Summary, Dataset::Ownership];
    let (payloads, report) = fetch_and_check(&instant_provider(), &requested).await.unwrap();
    assert_eq!(report.checks.len(), 2);
    assert_eq!(report.checks[0].dataset, Dataset::Summary);
    assert_eq!(payloads[0]["totalTransactions"], 1234);
    assert_eq!(payloads[1][0]["id"], "wallet1");
}

#[tokio::test(start_paused = true)]
async fn test_dropped_fetch_has_no_effect() {
    let provider = MockDashboardProvider::default();
    let abandoned = tokio::time::timeout(Duration::from_millis(100), provider.fetch_post_rug_data()).await;
    assert!(abandoned.is_err());

    let data = provider.fetch_post_rug_data().await.unwrap();
    assert_eq!(data.lp_pull, 87.5);
}
