// Shared test helpers: ad builders and an in-memory ads archive.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use ad_footprint::{AdsSource, CollectorError, RawAd};
use serde_json::json;

/// Builds an ad of `page_id` whose creative links to `link_url`.
pub fn ad(id: &str, page_id: &str, page_name: &str, link_url: &str) -> RawAd {
    serde_json::from_value(json!({
        "ad_archive_id": id,
        "page_id": page_id,
        "page_name": page_name,
        "snapshot": {"link_url": link_url}
    }))
    .expect("ad should deserialize")
}

/// Builds an ad whose only content is body text.
#[allow(dead_code)]
pub fn text_ad(id: &str, page_id: &str, body: &str) -> RawAd {
    serde_json::from_value(json!({
        "ad_archive_id": id,
        "page_id": page_id,
        "snapshot": {"body": {"text": body}}
    }))
    .expect("ad should deserialize")
}

/// In-memory ads archive keyed by search term and page id.
#[derive(Default)]
pub struct FakeSource {
    searches: HashMap<String, Vec<RawAd>>,
    pages: HashMap<String, Vec<RawAd>>,
    failing_pages: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, domain: &str, ads: Vec<RawAd>) -> Self {
        self.searches.insert(domain.to_string(), ads);
        self
    }

    pub fn with_page(mut self, page_id: &str, ads: Vec<RawAd>) -> Self {
        self.pages.insert(page_id.to_string(), ads);
        self
    }

    pub fn failing_page(mut self, page_id: &str) -> Self {
        self.failing_pages.insert(page_id.to_string());
        self
    }

    /// Calls received so far, as `search:<domain>` or `page:<id>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl AdsSource for FakeSource {
    async fn search_ads(&self, domain: &str) -> Result<Vec<RawAd>, CollectorError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(format!("search:{domain}"));
        Ok(self.searches.get(domain).cloned().unwrap_or_default())
    }

    async fn get_all_ads_by_page_id(&self, page_id: &str) -> Result<Vec<RawAd>, CollectorError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(format!("page:{page_id}"));
        if self.failing_pages.contains(page_id) {
            return Err(CollectorError::Api {
                status: 500,
                message: "actor crashed".to_string(),
            });
        }
        Ok(self.pages.get(page_id).cloned().unwrap_or_default())
    }
}
