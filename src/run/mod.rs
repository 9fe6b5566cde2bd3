//! Pipeline entry points.
//!
//! Each stage loads its input, drives the core component against an
//! [`AdsSource`], persists the resulting artifact and reports what it did.
//! The `*_with` variants take the source explicitly; the others build the
//! Apify client from the configuration.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::analysis::AdAnalyzer;
use crate::apify::ApifyAdsClient;
use crate::app::{log_mapping_summary, log_report_summary};
use crate::config::Config;
use crate::discovery::SiteMapper;
use crate::initialization::init_client;
use crate::source::AdsSource;
use crate::storage::{load_mapping, save_mapping, save_report};

/// Outcome of a mapping run.
#[derive(Debug, Clone)]
pub struct MappingRunReport {
    /// Client the mapping belongs to
    pub client_id: String,
    /// Number of sites mapped
    pub sites: usize,
    /// Number of page entries across all sites
    pub pages: usize,
    /// Path of the saved mapping file
    pub output_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Outcome of an analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisRunReport {
    /// Client the report belongs to
    pub client_id: String,
    /// Number of pages analyzed
    pub pages_analyzed: usize,
    /// Number of ads classified
    pub total_ads: usize,
    /// Global SELF percentage
    pub self_ratio: f64,
    /// Global COMPETITOR percentage
    pub competitor_ratio: f64,
    /// Most advertised competitor domain, if any
    pub top_competitor: Option<String>,
    /// Path of the saved report file
    pub output_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Builds the production ads source from the configuration.
///
/// # Errors
///
/// Fails when the API token is missing or the HTTP client cannot be built.
pub fn build_source(config: &Config) -> Result<ApifyAdsClient> {
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let source = ApifyAdsClient::new(client, config).context("Failed to initialize Apify client")?;
    Ok(source)
}

/// Stage 1 against the Apify archive.
pub async fn run_mapping(
    config: &Config,
    client_id: &str,
    sites: &[String],
    output: Option<&Path>,
) -> Result<MappingRunReport> {
    let source = build_source(config)?;
    run_mapping_with(&source, config, client_id, sites, output).await
}

/// Maps the client's sites and saves the mapping under the mappings directory.
///
/// # Errors
///
/// Fails on empty input, on the first collector error, or when the mapping
/// cannot be written.
pub async fn run_mapping_with<S: AdsSource>(
    source: S,
    config: &Config,
    client_id: &str,
    sites: &[String],
    output: Option<&Path>,
) -> Result<MappingRunReport> {
    let client_id = client_id.trim();
    if client_id.is_empty() {
        anyhow::bail!("Client id must not be empty");
    }
    let sites = normalize_sites(sites);
    if sites.is_empty() {
        anyhow::bail!("No sites to map for client {client_id}");
    }

    let start_time = Instant::now();
    let mapping = SiteMapper::new(source)
        .map_client_sites(client_id, &sites)
        .await
        .with_context(|| format!("Failed to map sites for client {client_id}"))?;

    log_mapping_summary(&mapping);
    let output_path = save_mapping(&mapping, &config.mappings_dir, output).await?;

    Ok(MappingRunReport {
        client_id: mapping.client_id.clone(),
        sites: mapping.total_sites,
        pages: mapping.total_pages(),
        output_path,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}

/// Stage 2 against the Apify archive.
pub async fn run_analysis(
    config: &Config,
    mapping_path: &Path,
    output: Option<&Path>,
) -> Result<AnalysisRunReport> {
    let source = build_source(config)?;
    run_analysis_with(&source, config, mapping_path, output).await
}

/// Analyzes a saved mapping and saves the report under the reports directory.
///
/// # Errors
///
/// Fails when the mapping cannot be loaded, on the first page whose ads cannot
/// be fetched, or when the report cannot be written.
pub async fn run_analysis_with<S: AdsSource>(
    source: S,
    config: &Config,
    mapping_path: &Path,
    output: Option<&Path>,
) -> Result<AnalysisRunReport> {
    let start_time = Instant::now();
    let mapping = load_mapping(mapping_path).await?;
    if mapping.total_pages() == 0 {
        log::warn!(
            "Mapping for {} contains no pages; the report will be empty",
            mapping.client_id
        );
    }

    let report = AdAnalyzer::new(source).analyze_client(&mapping).await?;

    log_report_summary(&report);
    let output_path = save_report(&report, &config.reports_dir, output).await?;

    Ok(AnalysisRunReport {
        client_id: report.client_id.clone(),
        pages_analyzed: report.pages_analyzed,
        total_ads: report.global_stats.total_ads,
        self_ratio: report.global_stats.self_ratio,
        competitor_ratio: report.global_stats.competitor_ratio,
        top_competitor: report.top_competitors.first().map(|c| c.domain.clone()),
        output_path,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}

/// Both stages back to back, sharing one Apify client.
pub async fn run_full(
    config: &Config,
    client_id: &str,
    sites: &[String],
) -> Result<(MappingRunReport, AnalysisRunReport)> {
    let source = build_source(config)?;
    run_full_with(&source, config, client_id, sites).await
}

/// Maps the sites, then analyzes the mapping file just written.
pub async fn run_full_with<S: AdsSource>(
    source: &S,
    config: &Config,
    client_id: &str,
    sites: &[String],
) -> Result<(MappingRunReport, AnalysisRunReport)> {
    let mapping = run_mapping_with(source, config, client_id, sites, None).await?;
    info!("Stage 1 done, analyzing {}", mapping.output_path.display());
    let analysis = run_analysis_with(source, config, &mapping.output_path, None).await?;
    Ok((mapping, analysis))
}

/// Trims entries and drops blanks; order and duplicates are kept.
fn normalize_sites(sites: &[String]) -> Vec<String> {
    sites
        .iter()
        .map(|site| site.trim())
        .filter(|site| !site.is_empty())
        .map(str::to_string)
        .collect()
}
