//! Configuration module
//!
//! Reads environment variables on top of the defaults in utils/constants.rs.

use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

use super::dataset::Dataset;
use super::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_HOST, DEFAULT_LATENCY_SCALE, DEFAULT_PORT, ENV_HOST, ENV_LATENCY_SCALE,
    ENV_PLATFORM_PORT, ENV_PORT,
};

/// Settings for the fixture provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderConfig {
    /// Multiplier applied to each dataset's nominal delay. 0.0 disables the delay.
    pub latency_scale: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            latency_scale: DEFAULT_LATENCY_SCALE,
        }
    }
}

impl ProviderConfig {
    /// Serve fixtures immediately
    pub fn instant() -> Self {
        Self { latency_scale: 0.0 }
    }

    pub fn with_latency_scale(latency_scale: f64) -> AppResult<Self> {
        if !latency_scale.is_finite() || latency_scale < 0.0 {
            return Err(AppError::invalid_config(
                ENV_LATENCY_SCALE,
                &latency_scale.to_string(),
            ));
        }
        Ok(Self { latency_scale })
    }

    pub fn from_env() -> AppResult<Self> {
        match std::env::var(ENV_LATENCY_SCALE) {
            Ok(raw) => {
                let scale = Self::parse_scale(&raw)?;
                info!(latency_scale = scale, "Latency scale configured");
                Self::with_latency_scale(scale)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    fn parse_scale(raw: &str) -> AppResult<f64> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| AppError::invalid_config(ENV_LATENCY_SCALE, raw))
    }

    /// Effective delay for a dataset under this profile
    pub fn delay_for(&self, dataset: Dataset) -> Duration {
        let nanos = dataset.nominal_delay().as_nanos() as f64 * self.latency_scale;
        Duration::from_nanos(nanos.round() as u64)
    }
}

/// Settings for the HTTP server binary
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub provider: ProviderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            provider: ProviderConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Platform `PORT` wins over `RUG_RADAR_PORT`
    pub fn from_env() -> AppResult<Self> {
        let host = std::env::var(ENV_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = Self::resolve_port(
            std::env::var(ENV_PLATFORM_PORT).ok(),
            std::env::var(ENV_PORT).ok(),
        )?;

        Ok(Self {
            host,
            port,
            provider: ProviderConfig::from_env()?,
        })
    }

    /// Parse whichever variable supplied the port; errors name that variable
    fn resolve_port(platform: Option<String>, local: Option<String>) -> AppResult<u16> {
        let (key, raw) = match (platform, local) {
            (Some(raw), _) => (ENV_PLATFORM_PORT, raw),
            (None, Some(raw)) => (ENV_PORT, raw),
            (None, None) => return Ok(DEFAULT_PORT),
        };
        raw.trim()
            .parse::<u16>()
            .map_err(|_| AppError::invalid_config(key, &raw))
    }

    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| AppError::invalid_config(ENV_HOST, &self.host))
    }
}
