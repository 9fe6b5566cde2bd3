//! Stage 2: classifying the complete ad history of every mapped page.

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;

use crate::classification::classify;
use crate::config::{LOGGED_COMPETITORS_PER_PAGE, TOP_COMPETITORS_LIMIT};
use crate::models::{
    ClassifiedAd, ClientReport, MappingArtifact, PageAnalysis, PageMapping, RawAd,
};
use crate::source::AdsSource;

use super::stats::{
    aggregate_competitors, calculate_global_stats, rank_page_competitors, ratio, ClassCounts,
};

/// Classifies every ad of the pages found by the site mapper.
pub struct AdAnalyzer<S> {
    source: S,
}

impl<S: AdsSource> AdAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Analyzes every page of every site in the mapping, in order.
    ///
    /// Each page is re-fetched in full (not only the ads that referenced the
    /// owned site during mapping) and classified against its site's domain.
    ///
    /// # Errors
    ///
    /// Fails on the first page whose ads cannot be retrieved.
    pub async fn analyze_client(&self, mapping: &MappingArtifact) -> Result<ClientReport> {
        info!(
            "Analyzing client {}: {} page(s) across {} site(s)",
            mapping.client_id,
            mapping.total_pages(),
            mapping.mappings.len()
        );

        let mut page_details = Vec::with_capacity(mapping.total_pages());
        for site_mapping in &mapping.mappings {
            info!("Owned domain: {}", site_mapping.site);
            for page in &site_mapping.fb_pages {
                page_details.push(self.analyze_page(page, &site_mapping.site).await?);
            }
        }

        let global_stats = calculate_global_stats(&page_details);
        let mut top_competitors = aggregate_competitors(&page_details);
        info!(
            "Analysis finished for {}: {} ads, {} competitor domain(s)",
            mapping.client_id,
            global_stats.total_ads,
            top_competitors.len()
        );
        top_competitors.truncate(TOP_COMPETITORS_LIMIT);

        Ok(ClientReport {
            client_id: mapping.client_id.clone(),
            analyzed_at: Utc::now(),
            pages_analyzed: page_details.len(),
            global_stats,
            top_competitors,
            page_details,
        })
    }

    /// Fetches and classifies the complete ad history of one page.
    pub async fn analyze_page(&self, page: &PageMapping, owned_domain: &str) -> Result<PageAnalysis> {
        info!("Page: {} ({})", page.page_name, page.page_id);

        let ads = self
            .source
            .get_all_ads_by_page_id(&page.page_id)
            .await
            .with_context(|| format!("Failed to fetch ads for page {}", page.page_id))?;
        info!("   {} ads retrieved, classifying", ads.len());

        let analysis = build_page_analysis(page, owned_domain, &ads);

        info!(
            "   SELF: {} ({:.1}%), COMPETITOR: {} ({:.1}%), UNKNOWN: {}",
            analysis.self_ads,
            analysis.self_ratio,
            analysis.competitor_ads,
            analysis.competitor_ratio,
            analysis.unknown_ads
        );
        for competitor in analysis.competitors.iter().take(LOGGED_COMPETITORS_PER_PAGE) {
            info!("      {}: {} ads", competitor.domain, competitor.ads_count);
        }

        Ok(analysis)
    }
}

/// Classifies a page's ads and computes its statistics.
pub fn build_page_analysis(page: &PageMapping, owned_domain: &str, ads: &[RawAd]) -> PageAnalysis {
    let classified_ads: Vec<ClassifiedAd> = ads
        .iter()
        .map(|ad| classify_ad_record(ad, owned_domain))
        .collect();

    let counts = ClassCounts::tally(&classified_ads);
    let competitors = rank_page_competitors(&classified_ads);

    PageAnalysis {
        page_id: page.page_id.clone(),
        page_name: page.page_name.clone(),
        owned_domain: owned_domain.to_string(),
        total_ads: counts.total,
        self_ads: counts.owned,
        competitor_ads: counts.competitor,
        unknown_ads: counts.unknown,
        self_ratio: ratio(counts.owned, counts.total),
        competitor_ratio: ratio(counts.competitor, counts.total),
        unknown_ratio: ratio(counts.unknown, counts.total),
        competitors,
        classified_ads,
    }
}

fn classify_ad_record(ad: &RawAd, owned_domain: &str) -> ClassifiedAd {
    let result = classify(ad, owned_domain);
    ClassifiedAd {
        ad_id: ad.ad_archive_id.clone(),
        classification: result.classification,
        confidence: result.confidence,
        reason: result.reason,
        destination_url: result.destination_url,
        competitor_domain: result.competitor_domain,
        ad_creation_time: ad.ad_creation_time.clone(),
        ad_delivery_start_time: ad.ad_delivery_start_time.clone(),
    }
}
