//! Request telemetry
//!
//! Per-dataset request counters for the `/v1/stats` endpoint. Lock-free:
//! counters are atomics inside a DashMap keyed by dataset.

use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::models::Dataset;

#[derive(Debug, Default)]
struct Counter {
    requests: AtomicU64,
    total_latency_us: AtomicU64,
}

/// Snapshot for one dataset
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetStats {
    pub dataset: Dataset,
    pub requests: u64,
    pub avg_latency_ms: f64,
}

/// Snapshot across all datasets
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryStats {
    pub total_requests: u64,
    pub avg_latency_ms: f64,
    pub uptime_seconds: u64,
    pub datasets: Vec<DatasetStats>,
}

pub struct TelemetryCollector {
    counters: DashMap<Dataset, Counter>,
    started_at: Instant,
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryCollector {
    pub fn new() -> Self {
        let counters = DashMap::new();
        for dataset in Dataset::ALL {
            counters.insert(dataset, Counter::default());
        }
        Self {
            counters,
            started_at: Instant::now(),
        }
    }

    /// Record one served request
    pub fn record(&self, dataset: Dataset, latency: Duration) {
        let counter = self.counters.entry(dataset).or_default();
        counter.requests.fetch_add(1, Ordering::Relaxed);
        counter
            .total_latency_us
            .fetch_add(latency.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn requests(&self, dataset: Dataset) -> u64 {
        self.counters
            .get(&dataset)
            .map(|c| c.requests.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn get_stats(&self) -> TelemetryStats {
        let mut total_requests = 0;
        let mut total_latency_us = 0;

        // Catalogue order keeps the output stable for the UI
        let datasets = Dataset::ALL
            .into_iter()
            .map(|dataset| {
                let (requests, latency_us) = self
                    .counters
                    .get(&dataset)
                    .map(|c| {
                        (
                            c.requests.load(Ordering::Relaxed),
                            c.total_latency_us.load(Ordering::Relaxed),
                        )
                    })
                    .unwrap_or((0, 0));
                total_requests += requests;
                total_latency_us += latency_us;
                DatasetStats {
                    dataset,
                    requests,
                    avg_latency_ms: avg_ms(latency_us, requests),
                }
            })
            .collect();

        TelemetryStats {
            total_requests,
            avg_latency_ms: avg_ms(total_latency_us, total_requests),
            uptime_seconds: self.uptime_seconds(),
            datasets,
        }
    }
}

fn avg_ms(total_us: u64, count: u64) -> f64 {
    if count == 0 {
        0.0
    } else {
        total_us as f64 / count as f64 / 1000.0
    }
}
