//! Dataset catalogue
//!
//! Names the nine dashboard datasets, their URL slugs and nominal latencies.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::errors::AppError;
use crate::utils::constants::{
    ANOMALY_DELAY_MS, BOT_VOLUME_DELAY_MS, DASHBOARD_SUMMARY_DELAY_MS, OWNERSHIP_DELAY_MS,
    POST_RUG_DELAY_MS, SELL_OFF_DELAY_MS, TRANSACTION_FLOW_DELAY_MS, VOLUME_BRACKET_DELAY_MS,
    WALLET_CLUSTERING_DELAY_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dataset {
    TransactionFlow,
    Anomalies,
    Ownership,
    SellOff,
    VolumeBrackets,
    BotVolume,
    PostRug,
    WalletClusters,
    Summary,
}

impl Dataset {
    pub const ALL: [Dataset; 9] = [
        Dataset::TransactionFlow,
        Dataset::Anomalies,
        Dataset::Ownership,
        Dataset::SellOff,
        Dataset::VolumeBrackets,
        Dataset::BotVolume,
        Dataset::PostRug,
        Dataset::WalletClusters,
        Dataset::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::TransactionFlow => "transaction-flow",
            Dataset::Anomalies => "anomalies",
            Dataset::Ownership => "ownership",
            Dataset::SellOff => "sell-off",
            Dataset::VolumeBrackets => "volume-brackets",
            Dataset::BotVolume => "bot-volume",
            Dataset::PostRug => "post-rug",
            Dataset::WalletClusters => "wallet-clusters",
            Dataset::Summary => "summary",
        }
    }

    /// Simulated round trip before the payload is served
    pub fn nominal_delay(&self) -> Duration {
        let ms = match self {
            Dataset::TransactionFlow => TRANSACTION_FLOW_DELAY_MS,
            Dataset::Anomalies => ANOMALY_DELAY_MS,
            Dataset::Ownership => OWNERSHIP_DELAY_MS,
            Dataset::SellOff => SELL_OFF_DELAY_MS,
            Dataset::VolumeBrackets => VOLUME_BRACKET_DELAY_MS,
            Dataset::BotVolume => BOT_VOLUME_DELAY_MS,
            Dataset::PostRug => POST_RUG_DELAY_MS,
            Dataset::WalletClusters => WALLET_CLUSTERING_DELAY_MS,
            Dataset::Summary => DASHBOARD_SUMMARY_DELAY_MS,
        };
        Duration::from_millis(ms)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_ascii_lowercase();
        Dataset::ALL
            .into_iter()
            .find(|d| d.as_str() == slug)
            .ok_or_else(|| AppError::unknown_dataset(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;

    #[test]
    fn test_slug_roundtrip() {
        for dataset in Dataset::ALL {
            assert_eq!(dataset.as_str().parse::<Dataset>().unwrap(), dataset);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Post-Rug".parse::<Dataset>().unwrap(), Dataset::PostRug);
    }

    #[test]
    fn test_unknown_slug() {
        let err = "liquidity".parse::<Dataset>().unwrap_err();
        assert_eq!(err.code, ErrorCode::DatasetUnknown);
        assert_eq!(err.code.http_status(), 404);
    }

    #[test]
    fn test_longest_delay_is_800ms() {
        let longest = Dataset::ALL.iter().map(|d| d.nominal_delay()).max().unwrap();
        assert_eq!(longest, Duration::from_millis(800));
        assert_eq!(Dataset::Summary.nominal_delay(), Duration::from_millis(300));
    }
}
