//! Configuration types.
//!
//! This module defines the enums and the library `Config` struct. The CLI in
//! `main.rs` maps its flags onto `Config`; the library never parses arguments.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    APIFY_BASE_URL, DEFAULT_ADS_ACTOR_ID, DEFAULT_ADS_COUNTRY, DEFAULT_MAPPINGS_DIR,
    DEFAULT_MAX_RESULTS, DEFAULT_REPORTS_DIR, DEFAULT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use ad_footprint::Config;
///
/// let config = Config {
///     apify_token: "apify_api_xxx".to_string(),
///     country: "TN".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Apify API token
    pub apify_token: String,

    /// Apify actor that scrapes the Facebook Ads Library
    pub actor_id: String,

    /// Apify API base URL (overridable for tests and proxies)
    pub api_base_url: String,

    /// Ads Library country filter
    pub country: String,

    /// Maximum ads requested per actor run
    pub max_results: u32,

    /// Per-request HTTP timeout in seconds
    pub timeout_seconds: u64,

    /// Directory where mapping artifacts are written
    pub mappings_dir: PathBuf,

    /// Directory where analysis reports are written
    pub reports_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            apify_token: String::new(),
            actor_id: DEFAULT_ADS_ACTOR_ID.to_string(),
            api_base_url: APIFY_BASE_URL.to_string(),
            country: DEFAULT_ADS_COUNTRY.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            mappings_dir: PathBuf::from(DEFAULT_MAPPINGS_DIR),
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
        }
    }
}
