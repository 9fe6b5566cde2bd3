//! Ad analysis (stage 2).
//!
//! This module provides:
//! - The ad analyzer that classifies each mapped page's full ad history
//! - Per-page and global statistics, and competitor ranking

mod analyzer;
mod stats;

// Re-export public API
pub use analyzer::{build_page_analysis, AdAnalyzer};
pub use stats::{aggregate_competitors, calculate_global_stats, ratio, round2, ClassCounts};
