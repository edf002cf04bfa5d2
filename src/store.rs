// src/store.rs
//! Local persistence for the CSP index (slug → URL).
//!
//! The list builder writes it, the query frontend and the completion provider
//! read it. Everything goes through [`CacheStore`] so none of them hardcode the
//! temp-file location.

use std::{fs, io, path::{Path, PathBuf}};

use indexmap::IndexMap;

use crate::error::CacheError;

/// Ordered slug → documentation URL. Order is first-seen order on the index page.
pub type CspIndex = IndexMap<String, String>;

pub trait CacheStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<CspIndex>, CacheError>;
    fn save(&mut self, index: &CspIndex) -> Result<(), CacheError>;
    fn clear(&mut self) -> Result<(), CacheError>;
}

pub fn to_json(index: &CspIndex) -> String {
    // IndexMap<String, String> always serializes.
    serde_json::to_string_pretty(index).unwrap_or_default()
}

/* ---------------- File-backed ---------------- */

/// JSON file cache, by default `<temp>/policiesFound.json`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CacheStore for FileStore {
    fn load(&self) -> Result<Option<CspIndex>, CacheError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::Read { path: self.path.clone(), source }),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| CacheError::Decode { path: self.path.clone(), source })
    }

    fn save(&mut self, index: &CspIndex) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|source| CacheError::Write { path: self.path.clone(), source })?;
            }
        }
        fs::write(&self.path, to_json(index))
            .map_err(|source| CacheError::Write { path: self.path.clone(), source })?;
        logd!("Wrote {} slugs to {}", index.len(), self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CacheError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CacheError::Write { path: self.path.clone(), source }),
        }
    }
}

/* ---------------- In-memory ---------------- */

/// Keeps the serialized JSON in memory; same bytes a `FileStore` would write.
#[derive(Default)]
pub struct MemoryStore {
    json: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with raw text, e.g. to simulate a corrupted cache.
    pub fn with_raw(json: &str) -> Self {
        Self { json: Some(s!(json)) }
    }

    pub fn raw(&self) -> Option<&str> {
        self.json.as_deref()
    }
}

impl CacheStore for MemoryStore {
    fn load(&self) -> Result<Option<CspIndex>, CacheError> {
        let Some(json) = &self.json else { return Ok(None) };
        serde_json::from_str(json)
            .map(Some)
            .map_err(|source| CacheError::Decode { path: PathBuf::from("<memory>"), source })
    }

    fn save(&mut self, index: &CspIndex) -> Result<(), CacheError> {
        self.json = Some(to_json(index));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CacheError> {
        self.json = None;
        Ok(())
    }
}
