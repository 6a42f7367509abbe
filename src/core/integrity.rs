//! Payload integrity checks
//!
//! Each check returns the list of contract violations found in a payload; an
//! empty list means the payload is consistent. Accessors never run these on
//! the hot path. They back the test suite and the startup self-check.

use chrono::{NaiveDate, NaiveDateTime};
use futures_util::future::try_join_all;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

use crate::models::*;
use crate::providers::DashboardDataProvider;
use crate::utils::constants::{DATE_FORMAT, PERCENT_SUM_TOLERANCE, TIMELINE_TIME_FORMAT};

/// Violations found for one dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetCheck {
    pub dataset: Dataset,
    pub violations: Vec<String>,
}

impl DatasetCheck {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IntegrityReport {
    pub checks: Vec<DatasetCheck>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.checks.iter().all(DatasetCheck::is_clean)
    }

    pub fn violation_count(&self) -> usize {
        self.checks.iter().map(|c| c.violations.len()).sum()
    }

    fn log(&self) {
        if self.is_clean() {
            info!(datasets = self.checks.len(), "✅ Fixture self-check passed");
            return;
        }
        for check in self.checks.iter().filter(|c| !c.is_clean()) {
            for violation in &check.violations {
                warn!(dataset = %check.dataset, "{}", violation);
            }
        }
    }
}

// ============================================
// Shared checks
// ============================================

fn check_dates(dates: &[String], context: &str, out: &mut Vec<String>) {
    for date in dates {
        if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            out.push(format!("{}: '{}' is not an ISO date", context, date));
        }
    }
}

fn check_len(context: &str, expected: usize, actual: usize, out: &mut Vec<String>) {
    if expected != actual {
        out.push(format!(
            "{}: expected {} points, found {}",
            context, expected, actual
        ));
    }
}

fn check_percent_sum(context: &str, values: impl Iterator<Item = f64>, out: &mut Vec<String>) {
    let sum: f64 = values.sum();
    if (sum - 100.0).abs() > PERCENT_SUM_TOLERANCE {
        out.push(format!("{}: percentages sum to {:.2}, expected 100", context, sum));
    }
}

fn check_graph(nodes: &[GraphNode], links: &[GraphLink], out: &mut Vec<String>) {
    let mut ids = HashSet::new();
    for node in nodes {
        if !ids.insert(node.id.as_str()) {
            out.push(format!("duplicate node id '{}'", node.id));
        }
    }

    for link in links {
        for endpoint in [&link.source, &link.target] {
            if !ids.contains(endpoint.as_str()) {
                out.push(format!(
                    "link {} -> {} references unknown node '{}'",
                    link.source, link.target, endpoint
                ));
            }
        }
    }
}

// ============================================
// Per-dataset checks
// ============================================

pub fn check_transaction_flow(graph: &TransactionFlowGraph) -> Vec<String> {
    let mut out = Vec::new();
    check_graph(&graph.nodes, &graph.links, &mut out);
    out
}

pub fn check_anomalies(data: &AnomalyData) -> Vec<String> {
    let mut out = Vec::new();
    let series = &data.series;
    check_dates(&series.dates, "series", &mut out);
    check_len("series values", series.dates.len(), series.values.len(), &mut out);

    for anomaly in &data.anomalies {
        match series.dates.iter().position(|d| *d == anomaly.date) {
            None => out.push(format!("anomaly date '{}' not in series", anomaly.date)),
            Some(idx) => {
                if series.values.get(idx) != Some(&anomaly.value) {
                    out.push(format!(
                        "anomaly on {} reports {}, series has {:?}",
                        anomaly.date,
                        anomaly.value,
                        series.values.get(idx)
                    ));
                }
            }
        }
    }
    out
}

pub fn check_ownership(entries: &[OwnershipEntry]) -> Vec<String> {
    let mut out = Vec::new();
    let mut ids = HashSet::new();
    for entry in entries {
        if !ids.insert(entry.id.as_str()) {
            out.push(format!("duplicate holder '{}'", entry.id));
        }
        if entry.value < 0.0 {
            out.push(format!("holder '{}' has negative share", entry.id));
        }
    }
    check_percent_sum("ownership", entries.iter().map(|e| e.value), &mut out);
    out
}

pub fn check_sell_off(data: &SellOffData) -> Vec<String> {
    let mut out = Vec::new();
    check_dates(&data.dates, "sell-off", &mut out);
    for wallet in &data.wallets {
        check_len(
            &format!("balances of {}", wallet.id),
            data.dates.len(),
            wallet.balances.len(),
            &mut out,
        );
    }
    out
}

pub fn check_volume_brackets(brackets: &[VolumeBracket]) -> Vec<String> {
    let mut out = Vec::new();
    let mut labels = HashSet::new();
    for bracket in brackets {
        if !labels.insert(bracket.bracket.as_str()) {
            out.push(format!("duplicate bracket '{}'", bracket.bracket));
        }
    }
    out
}

pub fn check_bot_volume(splits: &[BotVolumeSplit]) -> Vec<String> {
    let mut out = Vec::new();
    if splits.len() != 2 {
        out.push(format!("expected 2 volume splits, found {}", splits.len()));
    }
    check_percent_sum("bot volume", splits.iter().map(|s| s.value), &mut out);
    out
}

pub fn check_post_rug(data: &PostRugIndicators) -> Vec<String> {
    let mut out = Vec::new();
    if !(0.0..=100.0).contains(&data.lp_pull) {
        out.push(format!("lpPull {} outside 0-100", data.lp_pull));
    }

    let price = &data.price_data;
    check_dates(&price.dates, "priceData", &mut out);
    check_len("priceData prices", price.dates.len(), price.prices.len(), &mut out);
    if !price.dates.contains(&price.rug_event) {
        out.push(format!("priceData rugEvent '{}' not in dates", price.rug_event));
    }

    let activity = &data.activity_data;
    check_dates(&activity.dates, "activityData", &mut out);
    check_len(
        "activityData transactions",
        activity.dates.len(),
        activity.transactions.len(),
        &mut out,
    );
    if !activity.dates.contains(&activity.rug_event) {
        out.push(format!(
            "activityData rugEvent '{}' not in dates",
            activity.rug_event
        ));
    }
    out
}

pub fn check_wallet_clusters(data: &WalletClusteringData) -> Vec<String> {
    let mut out = Vec::new();
    check_graph(&data.nodes, &data.links, &mut out);

    let clusters: HashSet<&str> = data
        .nodes
        .iter()
        .filter(|n| n.kind == Some(NodeKind::Cluster))
        .map(|n| n.id.as_str())
        .collect();
    let ids: HashSet<&str> = data.nodes.iter().map(|n| n.id.as_str()).collect();

    for node in &data.nodes {
        if let Some(cluster) = &node.cluster {
            if !clusters.contains(cluster.as_str()) {
                out.push(format!("node '{}' assigned to unknown cluster '{}'", node.id, cluster));
            }
        }
    }

    for event in &data.timeline {
        if NaiveDateTime::parse_from_str(&event.time, TIMELINE_TIME_FORMAT).is_err() {
            out.push(format!("timeline time '{}' is malformed", event.time));
        }
        if !ids.contains(event.wallet.as_str()) {
            out.push(format!("timeline wallet '{}' is not a node", event.wallet));
        }
        match (event.action, &event.target) {
            (WalletAction::Transfer, None) => {
                out.push(format!("transfer by {} at {} has no target", event.wallet, event.time))
            }
            (WalletAction::Transfer, Some(target)) if !ids.contains(target.as_str()) => {
                out.push(format!("transfer target '{}' is not a node", target))
            }
            (action, Some(_)) if action != WalletAction::Transfer => out.push(format!(
                "{} by {} at {} carries a target",
                action.as_str(),
                event.wallet,
                event.time
            )),
            _ => {}
        }
    }
    out
}

pub fn check_summary(summary: &DashboardSummary) -> Vec<String> {
    let mut out = Vec::new();
    for (name, value) in [
        ("botPercentage", summary.bot_percentage),
        ("whaleConcentration", summary.whale_concentration),
    ] {
        if !(0.0..=100.0).contains(&value) {
            out.push(format!("{} {} outside 0-100", name, value));
        }
    }
    out
}

// ============================================
// Self-check
// ============================================

/// Fetch one dataset and check the payload that was fetched
pub async fn fetch_checked(
    provider: &dyn DashboardDataProvider,
    dataset: Dataset,
) -> AppResult<(serde_json::Value, DatasetCheck)> {
    let (payload, violations) = match dataset {
        Dataset::TransactionFlow => {
            let data = provider.fetch_transaction_flow_data().await?;
            (serde_json::to_value(&*data)?, check_transaction_flow(&data))
        }
        Dataset::Anomalies => {
            let data = provider.fetch_anomaly_data().await?;
            (serde_json::to_value(&*data)?, check_anomalies(&data))
        }
        Dataset::Ownership => {
            let data = provider.fetch_ownership_data().await?;
            (serde_json::to_value(&*data)?, check_ownership(&data))
        }
        Dataset::SellOff => {
            let data = provider.fetch_sell_off_data().await?;
            (serde_json::to_value(&*data)?, check_sell_off(&data))
        }
        Dataset::VolumeBrackets => {
            let data = provider.fetch_volume_bracket_data().await?;
            (serde_json::to_value(&*data)?, check_volume_brackets(&data))
        }
        Dataset::BotVolume => {
            let data = provider.fetch_bot_volume_data().await?;
            (serde_json::to_value(&*data)?, check_bot_volume(&data))
        }
        Dataset::PostRug => {
            let data = provider.fetch_post_rug_data().await?;
            (serde_json::to_value(&*data)?, check_post_rug(&data))
        }
        Dataset::WalletClusters => {
            let data = provider.fetch_wallet_clustering_data().await?;
            (serde_json::to_value(&*data)?, check_wallet_clusters(&data))
        }
        Dataset::Summary => {
            let data = provider.fetch_dashboard_summary().await?;
            (serde_json::to_value(&*data)?, check_summary(&data))
        }
    };
    Ok((payload, DatasetCheck { dataset, violations }))
}

/// Fetch the given datasets concurrently, once each, and check what came back.
/// Payloads are returned in the order of `datasets`.
pub async fn fetch_and_check(
    provider: &dyn DashboardDataProvider,
    datasets: &[Dataset],
) -> AppResult<(Vec<serde_json::Value>, IntegrityReport)> {
    let results = try_join_all(datasets.iter().map(|&d| fetch_checked(provider, d))).await?;
    let (payloads, checks): (Vec<_>, Vec<_>) = results.into_iter().unzip();

    let report = IntegrityReport { checks };
    report.log();
    Ok((payloads, report))
}

/// Fetch every dataset once and check it
pub async fn self_check(provider: &dyn DashboardDataProvider) -> AppResult<IntegrityReport> {
    let (_, report) = fetch_and_check(provider, &Dataset::ALL).await?;
    Ok(report)
}
