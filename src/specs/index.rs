// src/specs/index.rs
//! Scraping *spec* for the CSP index page.
//!
//! Purpose:
//! - Read the remote HTML of `policy-configuration-service-provider` and pull
//!   out every `policy-csp*` slug it links to, in first-seen order.
//!
//! Non-Responsibilities:
//! - No networking and no caching; `scrape::rebuild_index` does both.

use crate::config::consts::{SLUG_MARKER, SLUG_PREFIX};
use crate::config::options::Options;
use crate::core::html::href_values;
use crate::store::CspIndex;

/// Ordered slug → URL map built from every link target on the page.
///
/// Each `href` is split at `#`; a part survives if it starts with `policy-csp`
/// and contains `policy-`. The first sighting of a slug wins.
pub fn extract_slugs(doc: &str, options: &Options) -> CspIndex {
    let mut out = CspIndex::new();

    for href in href_values(doc) {
        for part in href.split('#') {
            if !part.starts_with(SLUG_PREFIX) || !part.contains(SLUG_MARKER) {
                continue;
            }
            if !out.contains_key(part) {
                out.insert(s!(part), options.page_url(part));
            }
        }
    }
    out
}
