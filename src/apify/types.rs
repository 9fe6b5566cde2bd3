use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for the Facebook Ads Library scraper actor.
#[derive(Debug, Clone, Serialize)]
pub struct AdsScraperInput {
    pub urls: Vec<StartUrl>,
    pub count: u32,
    #[serde(rename = "scrapeAdDetails")]
    pub scrape_ad_details: bool,
}

/// One Ads Library page for the actor to scrape.
#[derive(Debug, Clone, Serialize)]
pub struct StartUrl {
    pub url: String,
}

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: String,
    #[serde(rename = "startedAt", default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt", default)]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Lifecycle state of an actor run, as far as polling is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Succeeded,
    Failed,
    InProgress,
}

impl RunData {
    pub fn state(&self) -> RunState {
        match self.status.as_str() {
            "SUCCEEDED" => RunState::Succeeded,
            "FAILED" | "ABORTED" | "TIMED-OUT" => RunState::Failed,
            _ => RunState::InProgress,
        }
    }
}
