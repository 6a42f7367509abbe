//! Hand-authored dashboard fixtures
//!
//! Built once per process and shared behind `Arc`.

use lazy_static::lazy_static;
use std::sync::Arc;

use crate::models::types::*;
use crate::utils::constants::{COLOR_BLUE, COLOR_GREEN, COLOR_ORANGE};

fn dates(days: std::ops::RangeInclusive<u32>) -> Vec<String> {
    days.map(|d| format!("2023-04-{:02}", d)).collect()
}

lazy_static! {
    pub static ref TRANSACTION_FLOW: Arc<TransactionFlowGraph> = Arc::new(TransactionFlowGraph {
        nodes: vec![
            GraphNode::new("wallet1", "Wallet 1", 20, COLOR_GREEN),
            GraphNode::new("wallet2", "Wallet 2", 15, COLOR_GREEN),
            GraphNode::new("wallet3", "Wallet 3", 25, COLOR_ORANGE),
            GraphNode::new("wallet4", "Wallet 4", 10, COLOR_GREEN),
            GraphNode::new("wallet5", "Wallet 5", 18, COLOR_ORANGE),
            GraphNode::new("wallet6", "Wallet 6", 12, COLOR_GREEN),
            GraphNode::new("wallet7", "Wallet 7", 22, COLOR_ORANGE),
            GraphNode::new("exchange1", "Exchange 1", 30, COLOR_BLUE),
            GraphNode::new("exchange2", "Exchange 2", 28, COLOR_BLUE),
        ],
        links: vec![
            GraphLink::new("wallet1", "wallet3", 5),
            GraphLink::new("wallet1", "wallet2", 3),
            GraphLink::new("wallet2", "wallet4", 2),
            GraphLink::new("wallet3", "wallet5", 7),
            GraphLink::new("wallet3", "exchange1", 10),
            GraphLink::new("wallet4", "wallet6", 1),
            GraphLink::new("wallet5", "exchange2", 8),
            GraphLink::new("wallet6", "wallet7", 4),
            GraphLink::new("wallet7", "exchange2", 6),
        ],
    });

    pub static ref ANOMALIES: Arc<AnomalyData> = Arc::new(AnomalyData {
        series: TimeSeries {
            dates: dates(1..=14),
            values: vec![120, 125, 130, 220, 190, 185, 250, 280, 275, 190, 350, 320, 310, 290],
        },
        anomalies: vec![
            Anomaly {
                date: "2023-04-04".to_string(),
                value: 220,
                kind: "spike".to_string(),
                percentage: 69.2,
            },
            Anomaly {
                date: "2023-04-11".to_string(),
                value: 350,
                kind: "spike".to_string(),
                percentage: 84.2,
            },
        ],
    });

    pub static ref OWNERSHIP: Arc<Vec<OwnershipEntry>> = {
        let whales = [25.3, 18.7, 12.4, 8.9, 6.2, 4.8, 3.5, 2.9, 2.1, 1.8];
        let mut entries: Vec<OwnershipEntry> = whales
            .iter()
            .enumerate()
            .map(|(i, &value)| OwnershipEntry {
                id: format!("wallet{}", i + 1),
                label: format!("Whale {}", i + 1),
                value,
            })
            .collect();
        entries.push(OwnershipEntry {
            id: "others".to_string(),
            label: "Others".to_string(),
            value: 13.4,
        });
        Arc::new(entries)
    };

    pub static ref SELL_OFF: Arc<SellOffData> = {
        let balances: [[u64; 7]; 4] = [
            [1_000_000, 1_000_000, 950_000, 800_000, 500_000, 200_000, 0],
            [800_000, 800_000, 800_000, 750_000, 600_000, 300_000, 100_000],
            [600_000, 600_000, 600_000, 600_000, 550_000, 400_000, 200_000],
            [400_000, 400_000, 400_000, 400_000, 400_000, 350_000, 300_000],
        ];
        Arc::new(SellOffData {
            dates: dates(1..=7),
            wallets: balances
                .iter()
                .enumerate()
                .map(|(i, series)| WalletBalanceSeries {
                    id: format!("wallet{}", i + 1),
                    label: format!("Whale {}", i + 1),
                    balances: series.to_vec(),
                })
                .collect(),
        })
    };

    pub static ref VOLUME_BRACKETS: Arc<Vec<VolumeBracket>> = Arc::new(
        [
            ("$0-$100", 1245),
            ("$100-$500", 842),
            ("$500-$1K", 433),
            ("$1K-$5K", 287),
            ("$5K-$10K", 126),
            ("$10K-$50K", 64),
            ("$50K-$100K", 28),
            ("$100K+", 12),
        ]
        .iter()
        .map(|&(bracket, count)| VolumeBracket {
            bracket: bracket.to_string(),
            count,
        })
        .collect()
    );

    pub static ref BOT_VOLUME: Arc<Vec<BotVolumeSplit>> = Arc::new(vec![
        BotVolumeSplit {
            kind: "Bot Transactions".to_string(),
            value: 42.7,
        },
        BotVolumeSplit {
            kind: "Organic Transactions".to_string(),
            value: 57.3,
        },
    ]);

    pub static ref POST_RUG: Arc<PostRugIndicators> = Arc::new(PostRugIndicators {
        lp_pull: 87.5,
        price_data: PriceSeries {
            dates: dates(1..=7),
            prices: vec![0.00012, 0.00011, 0.00010, 0.000095, 0.000025, 0.0000032, 0.0000008],
            rug_event: "2023-04-05".to_string(),
        },
        activity_data: ActivitySeries {
            dates: dates(1..=7),
            transactions: vec![1245, 1322, 1187, 1402, 1523, 245, 32],
            rug_event: "2023-04-05".to_string(),
        },
    });

    pub static ref WALLET_CLUSTERS: Arc<WalletClusteringData> = Arc::new(WalletClusteringData {
        nodes: vec![
            GraphNode::cluster("cluster1", "Cluster 1", 25, COLOR_GREEN),
            GraphNode::cluster("cluster2", "Cluster 2", 20, COLOR_ORANGE),
            GraphNode::cluster("cluster3", "Cluster 3", 15, COLOR_BLUE),
            GraphNode::clustered_wallet("wallet1", "Wallet 1", 10, COLOR_GREEN, "cluster1"),
            GraphNode::clustered_wallet("wallet2", "Wallet 2", 10, COLOR_GREEN, "cluster1"),
            GraphNode::clustered_wallet("wallet3", "Wallet 3", 10, COLOR_GREEN, "cluster1"),
            GraphNode::clustered_wallet("wallet4", "Wallet 4", 10, COLOR_ORANGE, "cluster2"),
            GraphNode::clustered_wallet("wallet5", "Wallet 5", 10, COLOR_ORANGE, "cluster2"),
            GraphNode::clustered_wallet("wallet6", "Wallet 6", 10, COLOR_BLUE, "cluster3"),
            GraphNode::clustered_wallet("wallet7", "Wallet 7", 10, COLOR_BLUE, "cluster3"),
        ],
        links: vec![
            // membership
            GraphLink::new("wallet1", "cluster1", 1),
            GraphLink::new("wallet2", "cluster1", 1),
            GraphLink::new("wallet3", "cluster1", 1),
            GraphLink::new("wallet4", "cluster2", 1),
            GraphLink::new("wallet5", "cluster2", 1),
            GraphLink::new("wallet6", "cluster3", 1),
            GraphLink::new("wallet7", "cluster3", 1),
            // intra-cluster transfers
            GraphLink::new("wallet1", "wallet2", 3),
            GraphLink::new("wallet2", "wallet3", 2),
            GraphLink::new("wallet4", "wallet5", 4),
            GraphLink::new("wallet6", "wallet7", 1),
            // cross-cluster flow
            GraphLink::new("cluster1", "cluster2", 5),
            GraphLink::new("cluster2", "cluster3", 3),
        ],
        timeline: vec![
            TimelineEvent::buy("2023-04-01 08:23", "wallet1", 50_000),
            TimelineEvent::buy("2023-04-01 09:45", "wallet2", 75_000),
            TimelineEvent::buy("2023-04-01 12:12", "wallet4", 120_000),
            TimelineEvent::transfer("2023-04-02 14:30", "wallet1", "wallet3", 25_000),
            TimelineEvent::transfer("2023-04-02 15:22", "wallet4", "wallet5", 60_000),
            TimelineEvent::buy("2023-04-03 10:15", "wallet6", 90_000),
            TimelineEvent::buy("2023-04-03 11:45", "wallet7", 45_000),
            TimelineEvent::sell("2023-04-04 09:30", "wallet3", 15_000),
            TimelineEvent::sell("2023-04-04 16:20", "wallet5", 30_000),
        ],
    });

    pub static ref DASHBOARD_SUMMARY: Arc<DashboardSummary> = Arc::new(DashboardSummary {
        total_transactions: 1234,
        transactions_change: 12.5,
        active_wallets: 567,
        wallets_change: 8.3,
        suspicious_activity: 89,
        suspicious_change: -5.2,
        bot_percentage: 42.7,
        whale_concentration: 84.7,
        anomaly_count: 5,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_dates() {
        assert_eq!(dates(1..=3), vec!["2023-04-01", "2023-04-02", "2023-04-03"]);
        assert_eq!(ANOMALIES.series.dates.last().unwrap(), "2023-04-14");
    }

    #[test]
    fn test_ownership_labels() {
        assert_eq!(OWNERSHIP.len(), 11);
        assert_eq!(OWNERSHIP[9].id, "wallet10");
        assert_eq!(OWNERSHIP[9].label, "Whale 10");
        assert_eq!(OWNERSHIP[10].id, "others");
    }

    #[test]
    fn test_sell_off_first_whale_fully_exits() {
        let whale = &SELL_OFF.wallets[0];
        assert_eq!(whale.id, "wallet1");
        assert_eq!(whale.balances.first(), Some(&1_000_000));
        assert_eq!(whale.balances.last(), Some(&0));
    }

    #[test]
    fn test_volume_brackets_order() {
        let labels: Vec<&str> = VOLUME_BRACKETS.iter().map(|b| b.bracket.as_str()).collect();
        assert_eq!(labels.first(), Some(&"$0-$100"));
        assert_eq!(labels.last(), Some(&"$100K+"));
        assert_eq!(labels.len(), 8);
    }
}
