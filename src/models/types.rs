//! Dashboard payload types
//!
//! Field names and nesting are bound structurally by the dashboard UI, so every
//! struct serializes with camelCase keys and omits absent optionals.

use serde::{Deserialize, Serialize};

// ============================================
// Graphs (transaction flow, wallet clustering)
// ============================================

/// Node category in a clustering graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Cluster,
    Wallet,
}

/// Graph vertex rendered as a sized, colored bubble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Unique within its node list
    pub id: String,
    pub label: String,
    pub size: u32,
    /// Hex color, e.g. "#82e0aa"
    pub color: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    /// Owning cluster id (wallet nodes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
}

impl GraphNode {
    pub fn new(id: &str, label: &str, size: u32, color: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            size,
            color: color.to_string(),
            kind: None,
            cluster: None,
        }
    }

    pub fn cluster(id: &str, label: &str, size: u32, color: &str) -> Self {
        Self {
            kind: Some(NodeKind::Cluster),
            ..Self::new(id, label, size, color)
        }
    }

    pub fn clustered_wallet(id: &str, label: &str, size: u32, color: &str, cluster: &str) -> Self {
        Self {
            kind: Some(NodeKind::Wallet),
            cluster: Some(cluster.to_string()),
            ..Self::new(id, label, size, color)
        }
    }
}

/// Weighted edge between two node ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub value: u32,
}

impl GraphLink {
    pub fn new(source: &str, target: &str, value: u32) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            value,
        }
    }
}

/// Wallet-to-wallet transfer graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionFlowGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

// ============================================
// Anomaly timeline
// ============================================

/// Daily series; `dates` are ISO `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    pub dates: Vec<String>,
    pub values: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Must appear in the parent series dates
    pub date: String,
    pub value: u64,
    #[serde(rename = "type")]
    pub kind: String,
    /// Deviation from baseline, in percent
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnomalyData {
    #[serde(flatten)]
    pub series: TimeSeries,
    pub anomalies: Vec<Anomaly>,
}

// ============================================
// Ownership & sell-off
// ============================================

/// Share of supply held by one wallet (or the "others" bucket)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipEntry {
    pub id: String,
    pub label: String,
    /// Percent of supply
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalanceSeries {
    pub id: String,
    pub label: String,
    /// One balance per date of the parent [`SellOffData`]
    pub balances: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SellOffData {
    pub dates: Vec<String>,
    pub wallets: Vec<WalletBalanceSeries>,
}

// ============================================
// Volume
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeBracket {
    /// Human label, e.g. "$1K-$5K"
    pub bracket: String,
    pub count: u64,
}

/// Bot vs organic share of volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotVolumeSplit {
    #[serde(rename = "type")]
    pub kind: String,
    /// Percent of total volume
    pub value: f64,
}

// ============================================
// Post-rug indicators
// ============================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSeries {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
    pub rug_event: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySeries {
    pub dates: Vec<String>,
    pub transactions: Vec<u64>,
    pub rug_event: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRugIndicators {
    /// Percent of liquidity-pool funds withdrawn
    pub lp_pull: f64,
    pub price_data: PriceSeries,
    pub activity_data: ActivitySeries,
}

// ============================================
// Wallet clustering
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletAction {
    Buy,
    Sell,
    Transfer,
}

impl WalletAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletAction::Buy => "buy",
            WalletAction::Sell => "sell",
            WalletAction::Transfer => "transfer",
        }
    }
}

/// One wallet action; `target` is set only for transfers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// `YYYY-MM-DD HH:MM`
    pub time: String,
    pub wallet: String,
    pub action: WalletAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub amount: u64,
}

impl TimelineEvent {
    pub fn buy(time: &str, wallet: &str, amount: u64) -> Self {
        Self::untargeted(time, wallet, WalletAction::Buy, amount)
    }

    pub fn sell(time: &str, wallet: &str, amount: u64) -> Self {
        Self::untargeted(time, wallet, WalletAction::Sell, amount)
    }

    pub fn transfer(time: &str, wallet: &str, target: &str, amount: u64) -> Self {
        Self {
            time: time.to_string(),
            wallet: wallet.to_string(),
            action: WalletAction::Transfer,
            target: Some(target.to_string()),
            amount,
        }
    }

    fn untargeted(time: &str, wallet: &str, action: WalletAction, amount: u64) -> Self {
        Self {
            time: time.to_string(),
            wallet: wallet.to_string(),
            action,
            target: None,
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WalletClusteringData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
    pub timeline: Vec<TimelineEvent>,
}

// ============================================
// Summary
// ============================================

/// Headline counters; `*_change` fields are period-over-period deltas in percent
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_transactions: u64,
    pub transactions_change: f64,
    pub active_wallets: u64,
    pub wallets_change: f64,
    pub suspicious_activity: u64,
    pub suspicious_change: f64,
    pub bot_percentage: f64,
    pub whale_concentration: f64,
    pub anomaly_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_node_omits_optionals() {
        let node = GraphNode::new("wallet1", "Wallet 1", 20, "#82e0aa");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({"id": "wallet1", "label": "Wallet 1", "size": 20, "color": "#82e0aa"})
        );
    }

    #[test]
    fn test_clustered_wallet_serializes_type_and_cluster() {
        let node = GraphNode::clustered_wallet("wallet4", "Wallet 4", 10, "#f5cba7", "cluster2");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "wallet");
        assert_eq!(value["cluster"], "cluster2");
    }

    #[test]
    fn test_transfer_carries_target_only_for_transfers() {
        let transfer = TimelineEvent::transfer("2023-04-02 14:30", "wallet1", "wallet3", 25000);
        let buy = TimelineEvent::buy("2023-04-01 08:23", "wallet1", 50000);

        let transfer_json = serde_json::to_value(&transfer).unwrap();
        let buy_json = serde_json::to_value(&buy).unwrap();

        assert_eq!(transfer_json["action"], "transfer");
        assert_eq!(transfer_json["target"], "wallet3");
        assert_eq!(buy_json["action"], "buy");
        assert!(buy_json.get("target").is_none());
    }

    #[test]
    fn test_anomaly_series_is_flattened() {
        let data = AnomalyData {
            series: TimeSeries {
                dates: vec!["2023-04-01".into()],
                values: vec![120],
            },
            anomalies: vec![],
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value, json!({"dates": ["2023-04-01"], "values": [120], "anomalies": []}));
    }

    #[test]
    fn test_post_rug_keys_are_camel_case() {
        let value = serde_json::to_value(PostRugIndicators::default()).unwrap();
        assert!(value.get("lpPull").is_some());
        assert!(value["priceData"].get("rugEvent").is_some());
        assert!(value["activityData"].get("transactions").is_some());
    }
}
