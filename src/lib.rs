//! ad_footprint library: brand advertising footprint analysis
//!
//! Given a client and the domains it owns, this library finds the advertiser
//! pages promoting those domains in the Facebook Ads Library (stage 1,
//! mapping) and then classifies every ad of those pages as promoting the
//! owned domain, a competitor, or nothing identifiable (stage 2, analysis).
//!
//! # Example
//!
//! ```no_run
//! use ad_footprint::{run_mapping, run_analysis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     apify_token: "apify_api_xxx".to_string(),
//!     ..Default::default()
//! };
//!
//! let sites = vec!["shop.com".to_string()];
//! let mapping = run_mapping(&config, "acme", &sites, None).await?;
//! let report = run_analysis(&config, &mapping.output_path, None).await?;
//! println!("{} ads, {:.2}% competitor", report.total_ads, report.competitor_ratio);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime for the pipeline entry points. The
//! classifier and the statistics are synchronous and pure.

pub mod analysis;
pub mod apify;
mod app;
pub mod classification;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod run;
pub mod source;
pub mod storage;

// Re-export public API
pub use classification::{classify, extract_urls};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{CollectorError, InitializationError};
pub use models::{ClassificationResult, ClientReport, MappingArtifact, RawAd};
pub use run::{
    run_analysis, run_analysis_with, run_full, run_full_with, run_mapping, run_mapping_with,
    AnalysisRunReport, MappingRunReport,
};
pub use source::AdsSource;
