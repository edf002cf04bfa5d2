// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;

use csp_lookup::config::options::Options;
use csp_lookup::core::Fetch;
use csp_lookup::error::FetchError;

pub const INDEX_HTML: &str = include_str!("../fixtures/index.html");
pub const ABOVELOCK_HTML: &str = include_str!("../fixtures/policy-csp-abovelock.html");

/// Canned pages keyed by URL; anything else is a 404.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    /// Index + AboveLock pages under the default base URL.
    pub fn docs() -> Self {
        let o = Options::default();
        Self::new()
            .page(&o.index_url(), INDEX_HTML)
            .page(&o.page_url("policy-csp-abovelock"), ABOVELOCK_HTML)
    }
}

impl Fetch for FakeFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.pages.get(url).cloned().ok_or_else(|| FetchError::status(url, 404))
    }
}
