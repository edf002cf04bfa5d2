// src/complete.rs
//! Completion provider: cached slugs filtered by a partial name.
//! Read-only and offline; a missing or broken cache just means no suggestions.

use serde::Serialize;

use crate::store::CacheStore;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
    /// Detail page URL.
    pub hint: String,
}

/// Slugs containing `partial` (case-insensitive), in cache order.
pub fn complete(store: &dyn CacheStore, partial: &str) -> Vec<Suggestion> {
    let index = match store.load() {
        Ok(Some(index)) => index,
        Ok(None) => return Vec::new(),
        Err(e) => {
            logd!("Completion skipped: {e}");
            return Vec::new();
        }
    };

    let needle = partial.to_lowercase();
    index
        .into_iter()
        .filter(|(slug, _)| slug.to_lowercase().contains(&needle))
        .map(|(slug, url)| Suggestion { label: slug.clone(), value: slug, hint: url })
        .collect()
}
