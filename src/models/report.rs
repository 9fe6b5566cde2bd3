//! Stage 2 artifact: per-page and global classification statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::classification::{Classification, Confidence};

/// Classification record for one ad of an analyzed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedAd {
    pub ad_id: Option<String>,
    pub classification: Classification,
    pub confidence: Confidence,
    pub reason: String,
    pub destination_url: Option<String>,
    pub competitor_domain: Option<String>,
    pub ad_creation_time: Option<Value>,
    pub ad_delivery_start_time: Option<Value>,
}

/// Ads of one page pointing at one competitor domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorCount {
    pub domain: String,
    pub ads_count: usize,
}

/// Ads pointing at one competitor domain, summed over all analyzed pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorTotal {
    pub domain: String,
    pub total_ads: usize,
}

/// Full classification picture of one advertiser page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageAnalysis {
    pub page_id: String,
    pub page_name: String,
    pub owned_domain: String,
    pub total_ads: usize,
    pub self_ads: usize,
    pub competitor_ads: usize,
    pub unknown_ads: usize,
    /// Percentage of the page's ads classified SELF (0 when the page has no ads).
    pub self_ratio: f64,
    pub competitor_ratio: f64,
    pub unknown_ratio: f64,
    /// Competitor domains, most advertised first.
    pub competitors: Vec<CompetitorCount>,
    pub classified_ads: Vec<ClassifiedAd>,
}

/// Counts summed over every analyzed page; ratios rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total_ads: usize,
    pub self_ads: usize,
    pub competitor_ads: usize,
    pub unknown_ads: usize,
    pub self_ratio: f64,
    pub competitor_ratio: f64,
    pub unknown_ratio: f64,
}

/// Analysis run output for one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientReport {
    pub client_id: String,
    pub analyzed_at: DateTime<Utc>,
    pub pages_analyzed: usize,
    pub global_stats: GlobalStats,
    /// At most `TOP_COMPETITORS_LIMIT` entries.
    pub top_competitors: Vec<CompetitorTotal>,
    pub page_details: Vec<PageAnalysis>,
}
