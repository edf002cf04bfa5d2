// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Runtime settings. Defaults come from `consts`; the CLI overrides them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Documentation base, always ending in '/'.
    base_url: String,
    pub cache_path: PathBuf,
    pub timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: s!(DOCS_BASE_URL),
            cache_path: default_cache_path(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Options {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, url: &str) {
        let url = url.trim();
        self.base_url = if url.ends_with('/') { s!(url) } else { join!(url, "/") };
    }

    pub fn index_url(&self) -> String {
        self.page_url(INDEX_SLUG)
    }

    pub fn page_url(&self, slug: &str) -> String {
        join!(&self.base_url, slug)
    }
}

pub fn default_cache_path() -> PathBuf {
    std::env::temp_dir().join(CACHE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let mut o = Options::default();
        o.set_base_url("http://localhost:8080/docs");
        assert_eq!(o.page_url("policy-csp-foo"), "http://localhost:8080/docs/policy-csp-foo");
    }

    #[test]
    fn default_index_url() {
        let o = Options::default();
        assert_eq!(
            o.index_url(),
            "https://learn.microsoft.com/en-us/windows/client-management/mdm/policy-configuration-service-provider"
        );
        assert!(o.cache_path.ends_with("policiesFound.json"));
    }
}
