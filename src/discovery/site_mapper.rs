//! Stage 1: mapping owned sites to the advertiser pages that promote them.

use chrono::Utc;
use log::info;

use crate::config::{HIGH_CONFIDENCE_RATIO, MEDIUM_CONFIDENCE_RATIO};
use crate::error_handling::CollectorError;
use crate::models::{Confidence, MappingArtifact, PageMapping, SiteMapping};
use crate::source::AdsSource;

use super::collector::AdsCollector;
use super::page_extractor::extract_pages;

/// Scores how dominantly a page advertises a site.
///
/// `high` when the page carries at least 70% of the site's ads, `medium` from
/// 30%, `low` otherwise. A site without ads maps every page with `low`.
pub fn calculate_confidence(page_ads: usize, total_ads: usize) -> Confidence {
    if total_ads == 0 {
        return Confidence::Low;
    }

    let ratio = page_ads as f64 / total_ads as f64;
    if ratio >= HIGH_CONFIDENCE_RATIO {
        Confidence::High
    } else if ratio >= MEDIUM_CONFIDENCE_RATIO {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Builds the site-to-page mapping of a client.
pub struct SiteMapper<S> {
    collector: AdsCollector<S>,
}

impl<S: AdsSource> SiteMapper<S> {
    pub fn new(source: S) -> Self {
        Self {
            collector: AdsCollector::new(source),
        }
    }

    /// Maps every site of a client, one after the other.
    ///
    /// # Errors
    ///
    /// Returns the first collector failure; no partial mapping is produced.
    pub async fn map_client_sites(
        &self,
        client_id: &str,
        sites: &[String],
    ) -> Result<MappingArtifact, CollectorError> {
        info!(
            "Mapping client {client_id}: {} site{}",
            sites.len(),
            if sites.len() == 1 { "" } else { "s" }
        );

        let mut mappings = Vec::with_capacity(sites.len());
        for site in sites {
            mappings.push(self.map_site(site).await?);
        }

        info!("Mapping finished for {client_id}");

        Ok(MappingArtifact {
            client_id: client_id.to_string(),
            total_sites: sites.len(),
            mappings,
            created_at: Utc::now(),
        })
    }

    /// Maps a single site: collects its ads, groups them by page and scores
    /// each page.
    pub async fn map_site(&self, site: &str) -> Result<SiteMapping, CollectorError> {
        info!("Processing site: {site}");

        let ads = self.collector.collect_ads_for_domain(site).await?;
        let total_ads = ads.len();

        let fb_pages: Vec<PageMapping> = extract_pages(&ads)
            .into_iter()
            .map(|page| PageMapping {
                confidence: calculate_confidence(page.ads_count, total_ads),
                page_id: page.page_id,
                page_name: page.page_name,
                ads_count: page.ads_count,
            })
            .collect();

        for page in &fb_pages {
            info!(
                "   {} ({}): {} ads, {} confidence",
                page.page_name, page.page_id, page.ads_count, page.confidence
            );
        }
        info!(
            "Mapped {site}: {} page(s) using the domain across {total_ads} ads",
            fb_pages.len()
        );

        Ok(SiteMapping {
            site: site.to_string(),
            total_ads,
            fb_pages,
            mapped_at: Utc::now(),
        })
    }
}
