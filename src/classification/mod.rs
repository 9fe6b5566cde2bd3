//! Ad classification.
//!
//! This module provides:
//! - URL extraction from the structured and free-text fields of an ad
//! - SELF / COMPETITOR / UNKNOWN classification against an owned domain

mod classifier;
mod urls;

// Re-export public API
pub use classifier::{classify, classify_urls};
pub use urls::extract_urls;
