//! Classification outcome types.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Where an ad sends its audience relative to the owned domain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Classification {
    /// The destination is the owned domain.
    #[serde(rename = "SELF")]
    #[strum(serialize = "SELF")]
    Owned,
    /// The destination is another commercial domain.
    #[serde(rename = "COMPETITOR")]
    #[strum(serialize = "COMPETITOR")]
    Competitor,
    /// No commercial destination could be resolved.
    #[serde(rename = "UNKNOWN")]
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

/// Qualitative strength of a classification or a page-to-site mapping.
///
/// Variants are ordered `Low < Medium < High`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Decision for a single ad.
///
/// `competitor_domain` is `Some` exactly when `classification` is
/// [`Classification::Competitor`]; the constructors below are the only way the
/// classifier builds results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub classification: Classification,
    pub confidence: Confidence,
    pub reason: String,
    pub destination_url: Option<String>,
    pub competitor_domain: Option<String>,
}

impl ClassificationResult {
    pub(crate) fn owned(url: &str, owned_domain: &str) -> Self {
        Self {
            classification: Classification::Owned,
            confidence: Confidence::High,
            reason: format!("URL contains the owned domain: {owned_domain}"),
            destination_url: Some(url.to_string()),
            competitor_domain: None,
        }
    }

    pub(crate) fn competitor(url: &str, host: String) -> Self {
        Self {
            classification: Classification::Competitor,
            confidence: Confidence::High,
            reason: format!("URL points to a competitor domain: {host}"),
            destination_url: Some(url.to_string()),
            competitor_domain: Some(host),
        }
    }

    pub(crate) fn no_url() -> Self {
        Self {
            classification: Classification::Unknown,
            confidence: Confidence::Low,
            reason: "No URL found in the ad".to_string(),
            destination_url: None,
            competitor_domain: None,
        }
    }

    pub(crate) fn no_commercial_url(first_candidate: &str) -> Self {
        Self {
            classification: Classification::Unknown,
            confidence: Confidence::Medium,
            reason: "No commercial URL identified".to_string(),
            destination_url: Some(first_candidate.to_string()),
            competitor_domain: None,
        }
    }
}
