//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, ads retrieval)
//! - Retry strategy configuration for transient collector failures

mod categorization;
mod types;

// Re-export public API
pub use categorization::get_retry_strategy;
pub use types::{CollectorError, InitializationError};
