//! Core Module - Payload Contracts
//!
//! Integrity checks for the dashboard payload contracts.

pub mod integrity;

pub use integrity::*;
