//! Host extraction and domain matching utilities.
//!
//! Key functions:
//! - `try_extract_host()` - Extracts the normalized host of a URL, if any
//! - `contains_domain()` - Case-insensitive substring match of a domain in a URL
//! - `is_ignored_domain()` - Whether a host is a platform or redirect domain

use log::debug;

use crate::config::IGNORED_DOMAINS;

/// Extracts the host of a URL for competitor attribution.
///
/// URLs without an `http://` or `https://` scheme are parsed as `http://`.
/// Anything after a `:` in the host is dropped before parsing, so a
/// non-numeric port does not make the URL unparseable. Internationalized
/// hosts come back in Unicode form; the host is lowercased and a leading
/// `www.` is removed.
///
/// # Returns
///
/// The host (e.g., "boutique.com" from "https://www.boutique.com:8080/p"), or
/// `None` when the URL cannot be parsed or has no host. Failures are logged at
/// debug level and never propagated.
pub fn try_extract_host(url: &str) -> Option<String> {
    let lower = url.to_ascii_lowercase();
    let candidate = if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{url}")
    };
    let candidate = strip_port(&candidate);

    let parsed = match url::Url::parse(&candidate) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Failed to extract host from {url}: {e}");
            return None;
        }
    };

    let host = match parsed.host() {
        Some(url::Host::Domain(domain)) => idna::domain_to_unicode(domain).0,
        Some(other) => other.to_string(),
        None => {
            debug!("URL has no host component: {url}");
            return None;
        }
    };

    let host = host.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}

/// Removes `:port` (numeric or not) from the authority of a URL with a scheme.
/// Bracketed IPv6 hosts are left alone.
fn strip_port(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority_start = scheme_end + 3;
    let authority_end = url[authority_start..]
        .find(['/', '?', '#'])
        .map_or(url.len(), |i| authority_start + i);
    let authority = &url[authority_start..authority_end];
    let host_start = authority_start + authority.rfind('@').map_or(0, |i| i + 1);

    let host_and_port = &url[host_start..authority_end];
    if host_and_port.starts_with('[') {
        return url.to_string();
    }
    match host_and_port.find(':') {
        Some(colon) => format!("{}{}", &url[..host_start + colon], &url[authority_end..]),
        None => url.to_string(),
    }
}

/// Returns true when `domain` appears anywhere in `url`, ignoring case.
///
/// This is a substring test, not a host comparison: a URL carrying the domain
/// in its path or query also matches. An empty domain never matches, so no ad
/// is attributed to a blank owned domain.
pub fn contains_domain(url: &str, domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }
    url.to_lowercase().contains(&domain.to_lowercase())
}

/// Returns true when the host belongs to a platform or link-shortener domain.
pub fn is_ignored_domain(host: &str) -> bool {
    let host = host.to_lowercase();
    IGNORED_DOMAINS.iter().any(|ignored| host.contains(ignored))
}
