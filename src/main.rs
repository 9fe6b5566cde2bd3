//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ad_footprint` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ad_footprint::cli::{Cli, Command};
use ad_footprint::initialization::init_logger_with;
use ad_footprint::{run_analysis, run_full, run_mapping, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load APIFY_API_TOKEN and friends from .env, next to the executable as a fallback
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = cli.global.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = execute(cli.command, &config).await {
        eprintln!("ad_footprint error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn execute(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Map {
            client_id,
            sites,
            output,
        } => {
            let report = run_mapping(config, &client_id, &sites, output.as_deref()).await?;
            println!(
                "Mapped {} site{} to {} page{} in {:.1}s",
                report.sites,
                if report.sites == 1 { "" } else { "s" },
                report.pages,
                if report.pages == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Mapping saved in {}", report.output_path.display());
        }
        Command::Analyze {
            mapping_file,
            output,
        } => {
            let report = run_analysis(config, &mapping_file, output.as_deref()).await?;
            print_analysis(&report);
        }
        Command::Run { client_id, sites } => {
            let (mapping, analysis) = run_full(config, &client_id, &sites).await?;
            println!("Mapping saved in {}", mapping.output_path.display());
            print_analysis(&analysis);
        }
    }
    Ok(())
}

fn print_analysis(report: &ad_footprint::AnalysisRunReport) {
    println!(
        "Analyzed {} ads on {} page{} in {:.1}s: {:.2}% self, {:.2}% competitor{}",
        report.total_ads,
        report.pages_analyzed,
        if report.pages_analyzed == 1 { "" } else { "s" },
        report.elapsed_seconds,
        report.self_ratio,
        report.competitor_ratio,
        report
            .top_competitor
            .as_deref()
            .map(|domain| format!(" (top competitor: {domain})"))
            .unwrap_or_default()
    );
    println!("Report saved in {}", report.output_path.display());
}
