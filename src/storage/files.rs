use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::config::FILENAME_TIMESTAMP_FORMAT;
use crate::models::{ClientReport, MappingArtifact};

/// Kind of artifact, used in generated file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactKind {
    Mapping,
    Analysis,
}

/// `{client_id}_{kind}_{YYYYMMDD_HHMMSS}.json`
pub fn default_filename(client_id: &str, kind: ArtifactKind, at: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}.json",
        client_id,
        kind,
        at.format(FILENAME_TIMESTAMP_FORMAT)
    )
}

/// Writes a mapping artifact under `dir` and returns the file path.
///
/// Without an explicit `filename` the name is derived from the client id and
/// the mapping's creation time. An absolute `filename` is used as-is.
pub async fn save_mapping(
    mapping: &MappingArtifact,
    dir: &Path,
    filename: Option<&Path>,
) -> Result<PathBuf> {
    let path = match filename {
        Some(name) => dir.join(name),
        None => dir.join(default_filename(
            &mapping.client_id,
            ArtifactKind::Mapping,
            mapping.created_at,
        )),
    };
    write_json(mapping, &path).await?;
    info!("Mapping saved to {}", path.display());
    Ok(path)
}

/// Reads a mapping artifact written by [`save_mapping`].
pub async fn load_mapping(path: &Path) -> Result<MappingArtifact> {
    let contents = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read mapping file: {}", path.display()))?;
    let mapping: MappingArtifact = serde_json::from_slice(&contents)
        .with_context(|| format!("Invalid mapping file: {}", path.display()))?;
    info!(
        "Loaded mapping for {} ({} site(s), {} page(s))",
        mapping.client_id,
        mapping.mappings.len(),
        mapping.total_pages()
    );
    Ok(mapping)
}

/// Writes an analysis report under `dir` and returns the file path.
pub async fn save_report(
    report: &ClientReport,
    dir: &Path,
    filename: Option<&Path>,
) -> Result<PathBuf> {
    let path = match filename {
        Some(name) => dir.join(name),
        None => dir.join(default_filename(
            &report.client_id,
            ArtifactKind::Analysis,
            report.analyzed_at,
        )),
    };
    write_json(report, &path).await?;
    info!("Report saved to {}", path.display());
    Ok(path)
}

async fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_vec_pretty(value).context("Failed to serialize artifact")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
