//! Run summaries.
//!
//! Human-readable digests of finished mappings and reports, logged at info so
//! they follow the configured log format.

mod summary;

// Re-export public API
pub use summary::{log_mapping_summary, log_report_summary};
