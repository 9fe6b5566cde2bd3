use log::info;

use crate::models::{ClientReport, MappingArtifact};

/// Competitors listed in the report digest.
const SUMMARY_COMPETITORS: usize = 10;

/// Logs every site of a mapping with its pages and their confidence.
pub fn log_mapping_summary(mapping: &MappingArtifact) {
    info!(
        "Mapping summary for {}: {} site(s), {} page(s)",
        mapping.client_id,
        mapping.total_sites,
        mapping.total_pages()
    );
    for site in &mapping.mappings {
        if site.fb_pages.is_empty() {
            info!("   {}: no advertiser page found ({} ads)", site.site, site.total_ads);
            continue;
        }
        info!("   {}: {} ads", site.site, site.total_ads);
        for page in &site.fb_pages {
            info!(
                "      {} ({}): {} ads, {} confidence",
                page.page_name, page.page_id, page.ads_count, page.confidence
            );
        }
    }
}

/// Logs the global statistics and the head of the competitor ranking.
pub fn log_report_summary(report: &ClientReport) {
    let stats = &report.global_stats;
    info!(
        "Analysis summary for {}: {} page(s), {} ads",
        report.client_id, report.pages_analyzed, stats.total_ads
    );
    info!(
        "   SELF: {} ({:.2}%), COMPETITOR: {} ({:.2}%), UNKNOWN: {} ({:.2}%)",
        stats.self_ads,
        stats.self_ratio,
        stats.competitor_ads,
        stats.competitor_ratio,
        stats.unknown_ads,
        stats.unknown_ratio
    );

    if report.top_competitors.is_empty() {
        info!("   No competitor domains found");
        return;
    }
    info!("   Top competitors:");
    for (rank, competitor) in report
        .top_competitors
        .iter()
        .take(SUMMARY_COMPETITORS)
        .enumerate()
    {
        info!(
            "      {}. {}: {} ads",
            rank + 1,
            competitor.domain,
            competitor.total_ads
        );
    }
}
