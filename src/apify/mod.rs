//! Apify REST API client for the Facebook Ads Library scraper.
//!
//! Each query is one actor run: start the run, long-poll until it finishes,
//! then read the run's default dataset. Individual HTTP calls are retried on
//! transient failures; a run that ends in a non-success state is an error.

mod types;

use std::sync::Arc;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_retry::RetryIf;

use crate::config::{Config, ADS_LIBRARY_URL, APIFY_WAIT_FOR_FINISH_SECS};
use crate::error_handling::{get_retry_strategy, CollectorError, InitializationError};
use crate::models::RawAd;
use crate::source::AdsSource;

pub use types::{AdsScraperInput, ApiResponse, RunData, RunState, StartUrl};

/// Ads archive client backed by an Apify actor.
#[derive(Debug, Clone)]
pub struct ApifyAdsClient {
    client: Arc<reqwest::Client>,
    token: String,
    base_url: String,
    actor_id: String,
    country: String,
    max_results: u32,
}

impl ApifyAdsClient {
    /// Creates a client from the shared HTTP client and the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::MissingConfigError` when no API token is set.
    pub fn new(client: Arc<reqwest::Client>, config: &Config) -> Result<Self, InitializationError> {
        if config.apify_token.trim().is_empty() {
            return Err(InitializationError::MissingConfigError(
                "Apify API token (APIFY_API_TOKEN)",
            ));
        }

        Ok(Self {
            client,
            token: config.apify_token.trim().to_string(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            actor_id: config.actor_id.clone(),
            country: config.country.clone(),
            max_results: config.max_results,
        })
    }

    /// Ads Library keyword search for a domain.
    pub fn domain_search_url(&self, domain: &str) -> String {
        ads_library_url(&[
            ("active_status", "all"),
            ("ad_type", "all"),
            ("country", self.country.as_str()),
            ("q", domain),
            ("search_type", "keyword_unordered"),
            ("media_type", "all"),
        ])
    }

    /// Ads Library view of every ad run by a page.
    pub fn page_url(&self, page_id: &str) -> String {
        ads_library_url(&[
            ("active_status", "all"),
            ("ad_type", "all"),
            ("country", self.country.as_str()),
            ("view_all_page_id", page_id),
            ("search_type", "page"),
            ("media_type", "all"),
        ])
    }

    /// Starts an actor run. Returns immediately with run metadata.
    ///
    /// Each POST creates a billable run, so it is only resent when the API
    /// cannot have started one (refused connection or 429).
    pub async fn start_run(&self, input: &AdsScraperInput) -> Result<RunData, CollectorError> {
        let url = format!("{}/acts/{}/runs", self.base_url, self.actor_id);
        let response: ApiResponse<RunData> = self
            .send_with_retry(CollectorError::is_safe_to_resend, || {
                self.client.post(&url).bearer_auth(&self.token).json(input)
            })
            .await?;
        Ok(response.data)
    }

    /// Polls until a run reaches a terminal state.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData, CollectorError> {
        let url = format!("{}/actor-runs/{}", self.base_url, run_id);
        loop {
            let response: ApiResponse<RunData> = self
                .send_with_retry(CollectorError::is_retriable, || {
                    self.client
                        .get(&url)
                        .bearer_auth(&self.token)
                        .query(&[("waitForFinish", APIFY_WAIT_FOR_FINISH_SECS)])
                })
                .await?;

            let run = response.data;
            match run.state() {
                RunState::Succeeded => return Ok(run),
                RunState::Failed => {
                    return Err(CollectorError::RunFailed {
                        run_id: run.id,
                        status: run.status,
                    })
                }
                RunState::InProgress => {
                    debug!("Run {} still in progress ({})", run.id, run.status);
                }
            }
        }
    }

    /// Fetches the items of a dataset.
    pub async fn get_dataset_items<T: DeserializeOwned>(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<T>, CollectorError> {
        let url = format!("{}/datasets/{}/items", self.base_url, dataset_id);
        self.send_with_retry(CollectorError::is_retriable, || {
            self.client
                .get(&url)
                .bearer_auth(&self.token)
                .query(&[("format", "json"), ("clean", "true")])
        })
        .await
    }

    /// Scrapes one Ads Library URL end-to-end: start run, poll, fetch results.
    pub async fn scrape_ads(&self, library_url: String) -> Result<Vec<RawAd>, CollectorError> {
        debug!("Scraping {library_url}");
        let input = AdsScraperInput {
            urls: vec![StartUrl { url: library_url }],
            count: self.max_results,
            scrape_ad_details: false,
        };

        let run = self.start_run(&input).await?;
        info!("Apify run {} started, polling for completion", run.id);

        let completed = self.wait_for_run(&run.id).await?;
        let items: Vec<Value> = self
            .get_dataset_items(&completed.default_dataset_id)
            .await?;

        let fetched = items.len();
        let ads = decode_ads(items);
        if ads.len() < fetched {
            warn!(
                "Dropped {} malformed or non-ad dataset item(s) from run {}",
                fetched - ads.len(),
                completed.id
            );
        }
        info!("Fetched {} ads from run {}", ads.len(), completed.id);
        Ok(ads)
    }

    async fn send_with_retry<T, F>(
        &self,
        should_retry: fn(&CollectorError) -> bool,
        build: F,
    ) -> Result<T, CollectorError>
    where
        T: DeserializeOwned,
        F: Fn() -> reqwest::RequestBuilder,
    {
        let build = &build;
        RetryIf::spawn(
            get_retry_strategy(),
            move || async move {
                let response = build().send().await?;
                read_json::<T>(response).await
            },
            |e: &CollectorError| {
                let retriable = should_retry(e);
                if retriable {
                    warn!("Transient Apify error, retrying: {e}");
                }
                retriable
            },
        )
        .await
    }
}

impl AdsSource for ApifyAdsClient {
    async fn search_ads(&self, domain: &str) -> Result<Vec<RawAd>, CollectorError> {
        self.scrape_ads(self.domain_search_url(domain)).await
    }

    async fn get_all_ads_by_page_id(&self, page_id: &str) -> Result<Vec<RawAd>, CollectorError> {
        self.scrape_ads(self.page_url(page_id)).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CollectorError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CollectorError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn ads_library_url(params: &[(&str, &str)]) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{ADS_LIBRARY_URL}?{query}")
}

/// Decodes dataset items one by one so a malformed item costs only itself.
fn decode_ads(items: Vec<Value>) -> Vec<RawAd> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<RawAd>(item) {
            Ok(ad) => Some(ad).filter(is_ad_record),
            Err(e) => {
                warn!("Skipping malformed dataset item: {e}");
                None
            }
        })
        .collect()
}

/// Scraper datasets can carry error or notice items next to the ads.
fn is_ad_record(ad: &RawAd) -> bool {
    ad.ad_archive_id.is_some() || ad.snapshot.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(country: &str) -> ApifyAdsClient {
        let config = Config {
            apify_token: "token".into(),
            country: country.into(),
            ..Default::default()
        };
        ApifyAdsClient::new(Arc::new(reqwest::Client::new()), &config).unwrap()
    }

    #[test]
    fn test_new_requires_token() {
        let config = Config::default();
        let result = ApifyAdsClient::new(Arc::new(reqwest::Client::new()), &config);
        assert!(matches!(
            result,
            Err(InitializationError::MissingConfigError(_))
        ));
    }

    #[test]
    fn test_domain_search_url() {
        let url = client("TN").domain_search_url("tbshopp.com");
        assert!(url.starts_with("https://www.facebook.com/ads/library/?"));
        assert!(url.contains("q=tbshopp.com"));
        assert!(url.contains("country=TN"));
        assert!(url.contains("search_type=keyword_unordered"));
        assert!(url.contains("active_status=all"));
    }

    #[test]
    fn test_page_url() {
        let url = client("ALL").page_url("123456");
        assert!(url.contains("view_all_page_id=123456"));
        assert!(url.contains("country=ALL"));
    }

    #[test]
    fn test_search_terms_are_encoded() {
        let url = client("ALL").domain_search_url("shop & co.com");
        assert!(url.contains("q=shop+%26+co.com"));
    }

    #[test]
    fn test_is_ad_record() {
        assert!(!is_ad_record(&RawAd::default()));
        let ad: RawAd = serde_json::from_value(serde_json::json!({"ad_archive_id": "1"})).unwrap();
        assert!(is_ad_record(&ad));
        let ad: RawAd = serde_json::from_value(serde_json::json!({"snapshot": {}})).unwrap();
        assert!(is_ad_record(&ad));
    }

    #[test]
    fn test_decode_ads_skips_bad_items() {
        let items = vec![
            serde_json::json!({"ad_archive_id": "1", "snapshot": {"cards": [null]}}),
            serde_json::json!({"ad_archive_id": "2", "snapshot": "not an object"}),
            serde_json::json!("stray string"),
            serde_json::json!({"error": "rate limited"}),
            serde_json::json!({"ad_archive_id": 3}),
        ];
        let ids: Vec<String> = decode_ads(items)
            .into_iter()
            .filter_map(|ad| ad.ad_archive_id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
