//! Counting, ratios and competitor ranking.
//!
//! Everything here is a pure fold over its input: the per-page competitor
//! histogram and the cross-page merge are local accumulators that are sorted
//! into ranked vectors before being returned.

use std::collections::HashMap;

use crate::models::{
    Classification, ClassifiedAd, CompetitorCount, CompetitorTotal, GlobalStats, PageAnalysis,
};

/// Frequency table that remembers first-insertion order.
///
/// Ranking sorts by count descending with a stable sort, so equal counts stay
/// in the order their keys were first seen.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub(crate) fn add(&mut self, key: &str, count: usize) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), count));
            }
        }
    }

    pub(crate) fn into_ranked(self) -> Vec<(String, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

/// Classification counts of a set of ads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub total: usize,
    pub owned: usize,
    pub competitor: usize,
    pub unknown: usize,
}

impl ClassCounts {
    pub fn tally(ads: &[ClassifiedAd]) -> Self {
        ads.iter().fold(Self::default(), |mut counts, ad| {
            counts.total += 1;
            match ad.classification {
                Classification::Owned => counts.owned += 1,
                Classification::Competitor => counts.competitor += 1,
                Classification::Unknown => counts.unknown += 1,
            }
            counts
        })
    }
}

/// Percentage of `count` in `total`, or 0 when `total` is 0.
pub fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Rounds to 2 decimal places, exact halves to even (3.125 -> 3.12).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Ranks the competitor domains of one page's classified ads.
///
/// Only ads classified COMPETITOR are counted.
pub fn rank_page_competitors(ads: &[ClassifiedAd]) -> Vec<CompetitorCount> {
    let mut tally = Tally::default();
    for ad in ads {
        if ad.classification != Classification::Competitor {
            continue;
        }
        if let Some(domain) = ad.competitor_domain.as_deref() {
            tally.add(domain, 1);
        }
    }

    tally
        .into_ranked()
        .into_iter()
        .map(|(domain, ads_count)| CompetitorCount { domain, ads_count })
        .collect()
}

/// Sums the counts of every analyzed page; ratios are rounded to 2 decimals.
pub fn calculate_global_stats(pages: &[PageAnalysis]) -> GlobalStats {
    let total_ads: usize = pages.iter().map(|p| p.total_ads).sum();
    let self_ads: usize = pages.iter().map(|p| p.self_ads).sum();
    let competitor_ads: usize = pages.iter().map(|p| p.competitor_ads).sum();
    let unknown_ads: usize = pages.iter().map(|p| p.unknown_ads).sum();

    GlobalStats {
        total_ads,
        self_ads,
        competitor_ads,
        unknown_ads,
        self_ratio: round2(ratio(self_ads, total_ads)),
        competitor_ratio: round2(ratio(competitor_ads, total_ads)),
        unknown_ratio: round2(ratio(unknown_ads, total_ads)),
    }
}

/// Merges the competitor lists of every page and ranks the result.
///
/// Returns the full list; reports keep only the head of it.
pub fn aggregate_competitors(pages: &[PageAnalysis]) -> Vec<CompetitorTotal> {
    let mut tally = Tally::default();
    for page in pages {
        for competitor in &page.competitors {
            tally.add(&competitor.domain, competitor.ads_count);
        }
    }

    tally
        .into_ranked()
        .into_iter()
        .map(|(domain, total_ads)| CompetitorTotal { domain, total_ads })
        .collect()
}
