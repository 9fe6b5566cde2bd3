//! Data model shared by the mapping and analysis stages.
//!
//! Raw ads are read-only input; mappings and reports are the persisted
//! artifacts of the two stages.

mod ad;
mod classification;
mod mapping;
mod report;

// Re-export public API
pub use ad::{Body, Card, RawAd, Snapshot};
pub use classification::{Classification, ClassificationResult, Confidence};
pub use mapping::{MappingArtifact, PageCount, PageMapping, SiteMapping};
pub use report::{
    ClassifiedAd, ClientReport, CompetitorCount, CompetitorTotal, GlobalStats, PageAnalysis,
};
