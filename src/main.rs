//! Rug Radar CLI
//!
//! Fetches dashboard datasets concurrently and prints them as JSON.
//!
//! Usage:
//!   rug_radar                      # every dataset
//!   rug_radar ownership post-rug   # selected datasets
//!
//! Environment:
//!   RUG_RADAR_LATENCY_SCALE - Multiplier for simulated latency (default: 1.0)
//!   RUST_LOG                - Log level (default: info)

use eyre::{Result, WrapErr};
use rug_radar::{fetch_and_check, Dataset, MockDashboardProvider, ProviderConfig};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays pipeable JSON
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let datasets = parse_datasets(std::env::args().skip(1))?;

    let config = ProviderConfig::from_env().wrap_err("invalid provider configuration")?;
    let provider = MockDashboardProvider::new(config);

    let start = Instant::now();
    let (payloads, report) = fetch_and_check(&provider, &datasets).await?;
    if !report.is_clean() {
        eyre::bail!("fixture self-check found {} violations", report.violation_count());
    }
    info!(
        datasets = datasets.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Fetched datasets"
    );

    let output: serde_json::Map<String, serde_json::Value> = datasets
        .iter()
        .map(|d| d.as_str().to_string())
        .zip(payloads)
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn parse_datasets(args: impl Iterator<Item = String>) -> Result<Vec<Dataset>> {
    let datasets = args
        .map(|arg| arg.parse::<Dataset>())
        .collect::<Result<Vec<_>, _>>()?;

    if datasets.is_empty() {
        Ok(Dataset::ALL.to_vec())
    } else {
        Ok(datasets)
    }
}
