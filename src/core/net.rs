// src/core/net.rs

// Blocking HTTP GET. One request in flight, no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Anything that can turn a URL into a page body.
/// The frontend only talks to this, so tests can swap in canned pages.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::transport("", format!("could not build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        logd!("GET {url}");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| match e.status() {
                Some(code) => FetchError::status(url, code.as_u16()),
                None => FetchError::transport(url, e.to_string()),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }
        let body = resp.text().map_err(|e| FetchError::transport(url, e.to_string()))?;
        logd!("GET {url} -> {} ({} bytes)", status.as_u16(), body.len());
        Ok(body)
    }
}
