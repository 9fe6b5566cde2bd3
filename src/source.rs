//! Ads archive seam.
//!
//! The pipeline reads ads only through [`AdsSource`]. The production
//! implementation is [`crate::apify::ApifyAdsClient`]; tests plug in-memory
//! fakes here.

use crate::error_handling::CollectorError;
use crate::models::RawAd;

/// Read access to an ads archive.
#[allow(async_fn_in_trait)]
pub trait AdsSource {
    /// Keyword search for ads mentioning `domain`, unfiltered.
    ///
    /// Results may include ads that merely mention the domain in passing;
    /// [`crate::discovery::AdsCollector`] applies the strict destination filter.
    async fn search_ads(&self, domain: &str) -> Result<Vec<RawAd>, CollectorError>;

    /// Complete ad history of an advertiser page, unfiltered.
    async fn get_all_ads_by_page_id(&self, page_id: &str) -> Result<Vec<RawAd>, CollectorError>;
}

impl<S: AdsSource> AdsSource for &S {
    async fn search_ads(&self, domain: &str) -> Result<Vec<RawAd>, CollectorError> {
        (**self).search_ads(domain).await
    }

    async fn get_all_ads_by_page_id(&self, page_id: &str) -> Result<Vec<RawAd>, CollectorError> {
        (**self).get_all_ads_by_page_id(page_id).await
    }
}
