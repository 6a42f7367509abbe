//! API Request/Response Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::{AppError, Dataset};

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code_str().to_string(),
            message: err.message.clone(),
            details: std::error::Error::source(err).map(|s| s.to_string()),
        }
    }
}

/// Handler error: an [`AppError`] plus the time spent before it occurred
#[derive(Debug)]
pub struct ApiFailure {
    pub error: AppError,
    pub latency_ms: f64,
}

impl ApiFailure {
    pub fn new(error: AppError, latency_ms: f64) -> Self {
        Self { error, latency_ms }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ApiResponse::error(ApiError::from(&self.error), self.latency_ms);
        (status, Json(body)).into_response()
    }
}

// ============================================
// Catalogue
// ============================================

#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub dataset: Dataset,
    pub path: String,
    pub nominal_delay_ms: u64,
}

impl From<Dataset> for DatasetInfo {
    fn from(dataset: Dataset) -> Self {
        Self {
            dataset,
            path: format!("/v1/datasets/{}", dataset.as_str()),
            nominal_delay_ms: dataset.nominal_delay().as_millis() as u64,
        }
    }
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
