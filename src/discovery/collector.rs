//! Domain-filtered ad collection.

use log::info;

use crate::classification::extract_urls;
use crate::domain::contains_domain;
use crate::error_handling::CollectorError;
use crate::models::RawAd;
use crate::source::AdsSource;

/// Collects the ads whose destination references a given domain.
#[derive(Debug, Clone)]
pub struct AdsCollector<S> {
    source: S,
}

impl<S: AdsSource> AdsCollector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Searches the archive for `domain` and keeps only the ads with at least
    /// one extracted URL containing it.
    ///
    /// Keyword search also returns ads that mention the domain in unrelated
    /// text; those are dropped here.
    pub async fn collect_ads_for_domain(&self, domain: &str) -> Result<Vec<RawAd>, CollectorError> {
        info!("Searching ads for domain: {domain}");
        let ads = self.source.search_ads(domain).await?;
        let found = ads.len();

        let matching: Vec<RawAd> = ads
            .into_iter()
            .filter(|ad| references_domain(ad, domain))
            .collect();

        info!(
            "{} of {} ads found for {} use the domain as destination",
            matching.len(),
            found,
            domain
        );
        Ok(matching)
    }
}

/// Returns true when any URL extracted from the ad contains `domain`.
pub fn references_domain(ad: &RawAd, domain: &str) -> bool {
    extract_urls(ad)
        .iter()
        .any(|url| contains_domain(url, domain))
}
