//! Grouping of ads into advertiser pages.

use std::collections::HashMap;

use log::debug;

use crate::config::UNKNOWN_PAGE_NAME;
use crate::models::{PageCount, RawAd};

/// Groups ads by advertiser page and counts them.
///
/// Ads without a page identifier are skipped. A page's name is taken from the
/// first of its ads that carries one, falling back to `"Unknown"`. Pages are
/// returned most active first; ties keep first-seen order.
pub fn extract_pages(ads: &[RawAd]) -> Vec<PageCount> {
    let mut pages: Vec<(PageCount, bool)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for ad in ads {
        let Some(page_id) = ad.page_id() else {
            debug!(
                "Skipping ad without page id: {}",
                ad.ad_archive_id.as_deref().unwrap_or("<no id>")
            );
            continue;
        };

        let slot = *index.entry(page_id).or_insert_with(|| {
            pages.push((
                PageCount {
                    page_id: page_id.to_string(),
                    page_name: UNKNOWN_PAGE_NAME.to_string(),
                    ads_count: 0,
                },
                false,
            ));
            pages.len() - 1
        });

        let (page, named) = &mut pages[slot];
        page.ads_count += 1;
        if !*named {
            if let Some(name) = ad.page_name() {
                page.page_name = name.to_string();
                *named = true;
            }
        }
    }

    let mut pages: Vec<PageCount> = pages.into_iter().map(|(page, _)| page).collect();
    pages.sort_by(|a, b| b.ads_count.cmp(&a.ads_count));
    pages
}
