// src/scrape.rs
//! Network-facing steps: rebuild the CSP index, fetch one CSP page.

use crate::{
    config::options::Options,
    core::Fetch,
    error::{FetchError, Result},
    specs,
    store::{CacheStore, CspIndex},
};

/// Fetch the index page, extract slugs, replace the cache.
///
/// The cache is only cleared after the page arrived, so a failed fetch leaves
/// the previous file in place. A failure during clear/save leaves it in an
/// unknown state.
pub fn rebuild_index(
    fetcher: &dyn Fetch,
    store: &mut dyn CacheStore,
    options: &Options,
) -> Result<CspIndex> {
    let url = options.index_url();
    let doc = fetcher.get(&url)?;

    let index = specs::index::extract_slugs(&doc, options);
    logf!("Found {} CSP pages at {}", index.len(), url);

    store.clear()?;
    store.save(&index)?;
    Ok(index)
}

/// Raw HTML for one CSP page.
pub fn fetch_detail(fetcher: &dyn Fetch, options: &Options, slug: &str) -> std::result::Result<String, FetchError> {
    fetcher.get(&options.page_url(slug.trim()))
}
