//! Advertiser page discovery (stage 1).
//!
//! This module provides:
//! - Domain-filtered ad collection on top of an [`crate::AdsSource`]
//! - Grouping of ads into advertiser pages
//! - The site mapper and its confidence scoring

mod collector;
mod page_extractor;
mod site_mapper;

// Re-export public API
pub use collector::{references_domain, AdsCollector};
pub use page_extractor::extract_pages;
pub use site_mapper::{calculate_confidence, SiteMapper};
