//! Centralized Error Handling Module
//!
//! Every failure carries a stable error code so API clients and log queries
//! can match on it.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - DATASET_xxx: provider / dataset errors
//! - API_xxx: HTTP surface errors
//! - CFG_xxx: configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Dataset Errors
    // ============================================
    /// Requested dataset slug does not exist
    DatasetUnknown,
    /// Backend could not produce the dataset
    DatasetUnavailable,
    /// Payload could not be encoded
    SerializationFailed,

    // ============================================
    // API Errors
    // ============================================
    /// No route matches the request path
    ApiNotFound,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DatasetUnknown => "DATASET_UNKNOWN",
            Self::DatasetUnavailable => "DATASET_UNAVAILABLE",
            Self::SerializationFailed => "SERIALIZATION_FAILED",

            Self::ApiNotFound => "API_NOT_FOUND",

            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ConfigInvalidValue => 400,
            Self::ApiNotFound | Self::DatasetUnknown => 404,
            Self::DatasetUnavailable => 503,
            Self::SerializationFailed => 500,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Unknown dataset slug
    pub fn unknown_dataset(slug: &str) -> Self {
        Self::new(
            ErrorCode::DatasetUnknown,
            format!("Unknown dataset: {}", slug),
        )
    }

    /// Dataset backend unavailable
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatasetUnavailable, msg)
    }

    /// Invalid configuration value
    pub fn invalid_config(key: &str, value: &str) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidValue,
            format!("Invalid value for {}: {:?}", key, value),
        )
    }

    /// API not found
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiNotFound, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::SerializationFailed, "JSON encode error", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::unknown_dataset("liquidity");
        assert_eq!(err.code, ErrorCode::DatasetUnknown);
        assert_eq!(err.code_str(), "DATASET_UNKNOWN");
        assert_eq!(err.to_string(), "[DATASET_UNKNOWN] Unknown dataset: liquidity");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::ConfigInvalidValue.http_status(), 400);
        assert_eq!(ErrorCode::ApiNotFound.http_status(), 404);
        assert_eq!(ErrorCode::DatasetUnavailable.http_status(), 503);
        assert_eq!(ErrorCode::SerializationFailed.http_status(), 500);
    }

    #[test]
    fn test_invalid_config_message() {
        let err = AppError::invalid_config("RUG_RADAR_PORT", "eighty");
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
        assert!(err.message.contains("RUG_RADAR_PORT"));
        assert!(err.message.contains("\"eighty\""));
    }

    #[test]
    fn test_serde_error_keeps_source() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = AppError::from(json_err);
        assert_eq!(err.code, ErrorCode::SerializationFailed);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_route_and_backend_errors() {
        let missing = AppError::not_found("No route for /v2/summary");
        assert_eq!(missing.code_str(), "API_NOT_FOUND");
        assert_eq!(missing.code.http_status(), 404);

        let offline = AppError::unavailable("analytics backend offline");
        assert_eq!(offline.code_str(), "DATASET_UNAVAILABLE");
        assert_eq!(offline.code.http_status(), 503);
    }
}
