// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Network or HTTP failure while fetching a docs page.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed with status {status}: {url}")]
    Status { url: String, status: u16 },

    #[error("Request failed: {url} ({message})")]
    Transport { url: String, message: String },
}

impl FetchError {
    pub fn status(url: &str, status: u16) -> Self {
        Self::Status { url: s!(url), status }
    }

    pub fn transport(url: &str, message: impl Into<String>) -> Self {
        Self::Transport { url: s!(url), message: message.into() }
    }

    /// HTTP status code, when the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Transport { url, .. } => url,
        }
    }
}

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Could not write cache {path}: {source}")]
    Write { path: PathBuf, #[source] source: io::Error },

    #[error("Could not read cache {path}: {source}")]
    Read { path: PathBuf, #[source] source: io::Error },

    #[error("Cache {path} is not valid JSON: {source}")]
    Decode { path: PathBuf, #[source] source: serde_json::Error },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}
