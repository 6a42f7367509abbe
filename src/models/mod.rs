//! Models Module - Data Structures & Configuration
//!
//! Payload shapes, dataset catalogue, error codes and configuration.

pub mod config;
pub mod dataset;
pub mod errors;
pub mod types;

pub use config::*;
pub use dataset::*;
pub use errors::*;
pub use types::*;
