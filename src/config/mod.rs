//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (ignore list, thresholds, retry policy, etc.)
//! - Logging option types and the library `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
