//! Per-ad classification against an owned domain.

use log::debug;

use crate::domain::{contains_domain, is_ignored_domain, try_extract_host};
use crate::models::{ClassificationResult, RawAd};

use super::urls::extract_urls;

/// Classifies an ad as SELF, COMPETITOR, or UNKNOWN for `owned_domain`.
///
/// Candidate URLs are examined in extraction order and the first decisive
/// one wins:
/// - a URL containing `owned_domain` (case-insensitive substring) is SELF/high
/// - a URL whose host parses and is not a platform/redirect domain is
///   COMPETITOR/high, attributed to that host
///
/// Unparseable and ignored URLs are skipped. With no candidates the result is
/// UNKNOWN/low; with only skipped candidates it is UNKNOWN/medium, reporting
/// the first candidate as destination.
///
/// Pure and infallible: the same inputs always yield the same result.
pub fn classify(ad: &RawAd, owned_domain: &str) -> ClassificationResult {
    let urls = extract_urls(ad);
    classify_urls(&urls, owned_domain)
}

/// Classifies an already extracted candidate list.
pub fn classify_urls(urls: &[String], owned_domain: &str) -> ClassificationResult {
    let Some(first) = urls.first() else {
        return ClassificationResult::no_url();
    };

    for url in urls {
        if contains_domain(url, owned_domain) {
            return ClassificationResult::owned(url, owned_domain);
        }

        let Some(host) = try_extract_host(url) else {
            continue;
        };

        if is_ignored_domain(&host) {
            debug!("Skipping platform URL {url} (host {host})");
            continue;
        }

        return ClassificationResult::competitor(url, host);
    }

    ClassificationResult::no_commercial_url(first)
}
