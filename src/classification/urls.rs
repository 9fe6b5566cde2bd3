//! Candidate destination URL extraction from raw ads.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{URL_TEXT_PATTERN, URL_TRAILING_PUNCTUATION};
use crate::models::RawAd;

static URL_IN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_TEXT_PATTERN).expect("URL_TEXT_PATTERN is a valid regex"));

/// Extracts every candidate destination URL of an ad.
///
/// Sources are read in priority order:
/// 1. `snapshot.link_url`
/// 2. each card's `link_url`, in card order
/// 3. `http(s)://` URLs found in the caption
/// 4. `http(s)://` URLs found in the body text
///
/// Each URL is trimmed of whitespace and trailing punctuation. Duplicates are
/// dropped by exact string comparison, keeping the first occurrence.
/// Returns an empty vector when the ad carries no URL.
pub fn extract_urls(ad: &RawAd) -> Vec<String> {
    let mut urls = UrlList::default();

    if let Some(link_url) = ad.link_url() {
        urls.push(link_url);
    }

    for card_url in ad.card_link_urls() {
        urls.push(card_url);
    }

    if let Some(caption) = ad.caption() {
        for found in URL_IN_TEXT.find_iter(caption) {
            urls.push(found.as_str());
        }
    }

    if let Some(body) = ad.body_text() {
        for found in URL_IN_TEXT.find_iter(&body) {
            urls.push(found.as_str());
        }
    }

    urls.into_inner()
}

/// Order-preserving set of cleaned URLs.
#[derive(Default)]
struct UrlList {
    urls: Vec<String>,
    seen: HashSet<String>,
}

impl UrlList {
    fn push(&mut self, raw: &str) {
        let cleaned = clean_url(raw);
        if cleaned.is_empty() || self.seen.contains(cleaned) {
            return;
        }
        self.seen.insert(cleaned.to_string());
        self.urls.push(cleaned.to_string());
    }

    fn into_inner(self) -> Vec<String> {
        self.urls
    }
}

fn clean_url(raw: &str) -> &str {
    raw.trim().trim_end_matches(URL_TRAILING_PUNCTUATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse(value: Value) -> RawAd {
        serde_json::from_value(value).expect("ad should deserialize")
    }

    #[test]
    fn test_url_pattern_compiles() {
        assert!(URL_IN_TEXT.is_match("see https://example.com"));
    }

    #[test]
    fn test_no_urls() {
        assert!(extract_urls(&RawAd::default()).is_empty());
        let ad = parse(json!({"snapshot": {"caption": "no links", "body": {"text": "none"}}}));
        assert!(extract_urls(&ad).is_empty());
    }

    #[test]
    fn test_priority_order() {
        let ad = parse(json!({"snapshot": {
            "link_url": "https://main.com",
            "cards": [{"link_url": "https://card1.com"}, {"link_url": "https://card2.com"}],
            "caption": "https://caption.com",
            "body": {"text": "Buy at https://body.com today"}
        }}));
        assert_eq!(
            extract_urls(&ad),
            vec![
                "https://main.com",
                "https://card1.com",
                "https://card2.com",
                "https://caption.com",
                "https://body.com",
            ]
        );
    }

    #[test]
    fn test_deduplicates_keeping_first() {
        let ad = parse(json!({"snapshot": {
            "link_url": "https://shop.com/a",
            "cards": [{"link_url": "https://shop.com/a"}, {"link_url": "https://shop.com/b"}],
            "body": "https://shop.com/b and https://shop.com/a"
        }}));
        assert_eq!(
            extract_urls(&ad),
            vec!["https://shop.com/a", "https://shop.com/b"]
        );
    }

    #[test]
    fn test_deduplication_is_case_sensitive() {
        let ad = parse(json!({"snapshot": {
            "link_url": "https://Shop.com/a",
            "cards": [{"link_url": "https://shop.com/a"}]
        }}));
        assert_eq!(extract_urls(&ad).len(), 2);
    }

    #[test]
    fn test_trailing_punctuation_is_stripped() {
        let ad = parse(json!({"snapshot": {
            "body": "Order now (https://shop.com/sale). Or https://other.com/x!? Also https://third.com,"
        }}));
        assert_eq!(
            extract_urls(&ad),
            vec![
                "https://shop.com/sale",
                "https://other.com/x",
                "https://third.com",
            ]
        );
    }

    #[test]
    fn test_link_url_is_trimmed() {
        let ad = parse(json!({"snapshot": {"link_url": "  https://shop.com/p.  "}}));
        assert_eq!(extract_urls(&ad), vec!["https://shop.com/p"]);
    }

    #[test]
    fn test_blank_link_url_is_dropped() {
        let ad = parse(json!({"snapshot": {"link_url": "   ", "cards": [{"link_url": ""}]}}));
        assert!(extract_urls(&ad).is_empty());
    }

    #[test]
    fn test_text_urls_stop_at_quotes_and_brackets() {
        let ad = parse(json!({"snapshot": {
            "caption": "<a href=\"https://shop.com/x\">shop</a>"
        }}));
        assert_eq!(extract_urls(&ad), vec!["https://shop.com/x"]);
    }

    #[test]
    fn test_caption_without_scheme_is_not_a_url() {
        // Captions usually show a bare display domain
        let ad = parse(json!({"snapshot": {"caption": "SHOP.COM"}}));
        assert!(extract_urls(&ad).is_empty());
    }

    #[test]
    fn test_link_url_without_scheme_is_kept() {
        let ad = parse(json!({"snapshot": {"link_url": "shop.com/landing"}}));
        assert_eq!(extract_urls(&ad), vec!["shop.com/landing"]);
    }

    #[test]
    fn test_plain_string_body() {
        let ad = parse(json!({"snapshot": {"body": "Visit http://plain.com now"}}));
        assert_eq!(extract_urls(&ad), vec!["http://plain.com"]);
    }

    #[test]
    fn test_urls_found_in_array_body() {
        let ad = parse(json!({"snapshot": {"body": [{"t": "Deal"}, "https://a.com/x"]}}));
        assert_eq!(extract_urls(&ad), vec!["https://a.com/x"]);
    }
}
