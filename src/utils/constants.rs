//! Constants Module - Single Source of Truth
//!
//! Nominal fixture latencies, palette and server defaults live here so that no
//! other module hardcodes them.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "RugRadar";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// SIMULATED ROUND-TRIP LATENCY (milliseconds)
// ============================================

pub const TRANSACTION_FLOW_DELAY_MS: u64 = 800;
pub const ANOMALY_DELAY_MS: u64 = 600;
pub const OWNERSHIP_DELAY_MS: u64 = 700;
pub const SELL_OFF_DELAY_MS: u64 = 500;
pub const VOLUME_BRACKET_DELAY_MS: u64 = 600;
pub const BOT_VOLUME_DELAY_MS: u64 = 400;
pub const POST_RUG_DELAY_MS: u64 = 800;
pub const WALLET_CLUSTERING_DELAY_MS: u64 = 700;
pub const DASHBOARD_SUMMARY_DELAY_MS: u64 = 300;

/// Scale applied to every nominal delay (1.0 = as authored)
pub const DEFAULT_LATENCY_SCALE: f64 = 1.0;

// ============================================
// PALETTE
// ============================================

/// Ordinary wallets / first cluster
pub const COLOR_GREEN: &str = "#82e0aa";
/// Suspicious wallets / second cluster
pub const COLOR_ORANGE: &str = "#f5cba7";
/// Exchanges / third cluster
pub const COLOR_BLUE: &str = "#aed6f1";

// ============================================
// FIXTURE CHECKS
// ============================================

/// Allowed drift when percentages are expected to sum to 100
pub const PERCENT_SUM_TOLERANCE: f64 = 0.5;

/// Date format of daily series
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format of clustering timeline events
pub const TIMELINE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// ============================================
// SERVER DEFAULTS
// ============================================

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

pub const ENV_HOST: &str = "RUG_RADAR_HOST";
pub const ENV_PORT: &str = "RUG_RADAR_PORT";
/// Platform-provided port, takes precedence over [`ENV_PORT`]
pub const ENV_PLATFORM_PORT: &str = "PORT";
pub const ENV_LATENCY_SCALE: &str = "RUG_RADAR_LATENCY_SCALE";
