//! Stage 1 artifact: owned sites linked to the advertiser pages promoting them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classification::Confidence;

/// An advertiser page discovered in a site's ads, before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCount {
    pub page_id: String,
    pub page_name: String,
    pub ads_count: usize,
}

/// An advertiser page mapped to an owned site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMapping {
    pub page_id: String,
    pub page_name: String,
    /// Ads of this page referencing the owned site.
    pub ads_count: usize,
    pub confidence: Confidence,
}

/// All pages found for one owned site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMapping {
    pub site: String,
    /// Ads referencing the site, across all pages.
    pub total_ads: usize,
    pub fb_pages: Vec<PageMapping>,
    pub mapped_at: DateTime<Utc>,
}

/// Mapping run output for one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingArtifact {
    pub client_id: String,
    pub total_sites: usize,
    pub mappings: Vec<SiteMapping>,
    pub created_at: DateTime<Utc>,
}

impl MappingArtifact {
    /// Number of page entries across all sites.
    pub fn total_pages(&self) -> usize {
        self.mappings.iter().map(|m| m.fb_pages.len()).sum()
    }
}
