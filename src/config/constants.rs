//! Configuration constants.
//!
//! This module defines the constants used throughout the application: the
//! classification ignore list, confidence thresholds, report limits, retry
//! policy, and Apify defaults.

// Classification
/// Platform and link-shortener domains that are never commercial destinations.
///
/// Matched as case-insensitive substrings of the extracted host, so
/// `m.facebook.com` and `l.instagram.com` are covered as well.
pub const IGNORED_DOMAINS: &[&str] = &[
    "facebook.com",
    "instagram.com",
    "fb.com",
    "fb.me",
    "bit.ly",
    "tinyurl.com",
    "l.facebook.com",
    "l.instagram.com",
];

/// Pattern used to pull URLs out of free text (captions, bodies).
pub const URL_TEXT_PATTERN: &str = r#"https?://[^\s<>"]+"#;

/// Characters stripped from the end of every extracted URL.
pub const URL_TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

// Site mapping
/// Share of a site's ads a page must carry to be mapped with high confidence.
pub const HIGH_CONFIDENCE_RATIO: f64 = 0.7;
/// Share of a site's ads a page must carry to be mapped with medium confidence.
pub const MEDIUM_CONFIDENCE_RATIO: f64 = 0.3;
/// Page name used when no ad of the page carries one.
pub const UNKNOWN_PAGE_NAME: &str = "Unknown";

// Analysis
/// Number of competitors kept in a report's headline list.
pub const TOP_COMPETITORS_LIMIT: usize = 20;
/// Number of competitors logged per page while analyzing.
pub const LOGGED_COMPETITORS_PER_PAGE: usize = 5;

// Persistence
/// Default directory for stage 1 mapping artifacts.
pub const DEFAULT_MAPPINGS_DIR: &str = "./data/mappings";
/// Default directory for stage 2 analysis reports.
pub const DEFAULT_REPORTS_DIR: &str = "./data/reports";
/// Timestamp format used in generated artifact filenames.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Apify
/// Apify REST API base URL.
pub const APIFY_BASE_URL: &str = "https://api.apify.com/v2";
/// Facebook Ads Library scraper actor (`owner~name` form is accepted by the API).
pub const DEFAULT_ADS_ACTOR_ID: &str = "curious_coder~facebook-ads-library-scraper";
/// Ads Library country filter (`ALL` searches every country).
pub const DEFAULT_ADS_COUNTRY: &str = "ALL";
/// Maximum number of ads requested per actor run.
pub const DEFAULT_MAX_RESULTS: u32 = 500;
/// Long-poll window for actor run status requests, in seconds.
pub const APIFY_WAIT_FOR_FINISH_SECS: u64 = 60;
/// Per-request HTTP timeout in seconds.
///
/// Must exceed `APIFY_WAIT_FOR_FINISH_SECS` so long-polls are not cut short.
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;
/// Facebook Ads Library search page.
pub const ADS_LIBRARY_URL: &str = "https://www.facebook.com/ads/library/";

// Retry strategy
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Maximum number of retries after the initial attempt
pub const RETRY_MAX_RETRIES: usize = 3;

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
