//! Rug Radar Library
//!
//! Data layer for the Rug Radar blockchain-analytics dashboard. Serves
//! hand-authored fixtures for:
//! - Wallet-to-wallet transaction flow and wallet clustering graphs
//! - Volume anomalies, bracket histograms and bot-vs-organic splits
//! - Whale ownership concentration and sell-off balance histories
//! - Post-rug-pull price, activity and LP-pull indicators
//!
//! Callers depend on the [`DashboardDataProvider`] trait so a real analytics
//! backend can replace [`MockDashboardProvider`] without changing them.

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::integrity::{fetch_and_check, self_check, IntegrityReport};
pub use models::{AppError, AppResult, Dataset, ErrorCode, ProviderConfig, ServerConfig};
pub use providers::{fetch_dataset, DashboardDataProvider, MockDashboardProvider};
pub use utils::telemetry::{TelemetryCollector, TelemetryStats};
