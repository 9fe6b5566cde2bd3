//! Command-line interface definitions.
//!
//! Parsing lives in the library so the binary stays a thin wrapper and the
//! argument surface can be tested directly.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    Config, LogFormat, LogLevel, APIFY_BASE_URL, DEFAULT_ADS_ACTOR_ID, DEFAULT_ADS_COUNTRY,
    DEFAULT_MAPPINGS_DIR, DEFAULT_MAX_RESULTS, DEFAULT_REPORTS_DIR, DEFAULT_TIMEOUT_SECS,
};

/// Brand advertising footprint analyzer.
#[derive(Debug, Parser)]
#[command(name = "ad_footprint", version, about)]
pub struct Cli {
    /// Settings shared by every subcommand
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Stage to run
    #[command(subcommand)]
    pub command: Command,
}

/// Pipeline stages.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Map a client's owned sites to the advertiser pages promoting them
    Map {
        /// Client identifier, used in artifact file names
        client_id: String,
        /// Owned domains (e.g. shop.com)
        #[arg(required = true, num_args = 1..)]
        sites: Vec<String>,
        /// Mapping file name inside the mappings directory
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Classify every ad of the pages in a saved mapping
    Analyze {
        /// Mapping file produced by `map`
        mapping_file: PathBuf,
        /// Report file name inside the reports directory
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Map the sites, then analyze the resulting mapping
    Run {
        /// Client identifier, used in artifact file names
        client_id: String,
        /// Owned domains (e.g. shop.com)
        #[arg(required = true, num_args = 1..)]
        sites: Vec<String>,
    },
}

/// Global flags, mapped onto [`Config`].
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Apify API token
    #[arg(long, env = "APIFY_API_TOKEN", hide_env_values = true, global = true)]
    pub apify_token: Option<String>,

    /// Apify actor scraping the Facebook Ads Library
    #[arg(long, env = "APIFY_ACTOR_ID", default_value = DEFAULT_ADS_ACTOR_ID, global = true)]
    pub actor_id: String,

    /// Apify API base URL
    #[arg(long, default_value = APIFY_BASE_URL, global = true, hide = true)]
    pub api_base_url: String,

    /// Ads Library country filter (ISO code or ALL)
    #[arg(long, default_value = DEFAULT_ADS_COUNTRY, global = true)]
    pub country: String,

    /// Maximum ads requested per scraper run
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_RESULTS,
        value_parser = clap::value_parser!(u32).range(1..),
        global = true
    )]
    pub max_results: u32,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// Directory for mapping files
    #[arg(long, env = "AD_FOOTPRINT_MAPPINGS_DIR", default_value = DEFAULT_MAPPINGS_DIR, global = true)]
    pub mappings_dir: PathBuf,

    /// Directory for analysis reports
    #[arg(long, env = "AD_FOOTPRINT_REPORTS_DIR", default_value = DEFAULT_REPORTS_DIR, global = true)]
    pub reports_dir: PathBuf,
}

impl GlobalArgs {
    /// Builds the library configuration from the parsed flags.
    pub fn to_config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            apify_token: self.apify_token.clone().unwrap_or_default(),
            actor_id: self.actor_id.clone(),
            api_base_url: self.api_base_url.clone(),
            country: self.country.to_uppercase(),
            max_results: self.max_results,
            timeout_seconds: self.timeout_seconds,
            mappings_dir: self.mappings_dir.clone(),
            reports_dir: self.reports_dir.clone(),
        }
    }
}
