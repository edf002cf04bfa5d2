// src/query.rs
//! Query frontend: always rebuild the index, then either list the cached slugs
//! or show one CSP's support table. Failures are reported through
//! [`Progress`] and the returned [`QueryOutcome`]; nothing escapes as an error.

use crate::{
    config::{consts::FINISHED, options::Options},
    core::Fetch,
    progress::Progress,
    scrape,
    specs::support::{reshape, SupportRow},
    store::CacheStore,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryRequest {
    pub slug: Option<String>,
    /// List every cached slug instead; `slug` is ignored.
    pub display_all: bool,
}

impl QueryRequest {
    pub fn slug(slug: &str) -> Self {
        Self { slug: Some(s!(slug)), display_all: false }
    }

    pub fn display_all() -> Self {
        Self { slug: None, display_all: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryOutcome {
    Rows(Vec<SupportRow>),
    Slugs(Vec<String>),
    /// Already reported; carries the same message.
    Failed(String),
}

impl QueryOutcome {
    pub fn rows(&self) -> &[SupportRow] {
        match self {
            Self::Rows(rows) => rows,
            _ => &[],
        }
    }
}

pub fn query(
    fetcher: &dyn Fetch,
    store: &mut dyn CacheStore,
    options: &Options,
    request: &QueryRequest,
    progress: &mut dyn Progress,
) -> QueryOutcome {
    let outcome = run(fetcher, store, options, request, progress);
    progress.finish(FINISHED);
    outcome
}

/// [`query`] without the closing status line. Callers that print the outcome
/// themselves call `progress.finish` once it is written.
pub fn run(
    fetcher: &dyn Fetch,
    store: &mut dyn CacheStore,
    options: &Options,
    request: &QueryRequest,
    progress: &mut dyn Progress,
) -> QueryOutcome {
    // The detail fetch doesn't read the cache, so a failed rebuild is reported
    // and the query carries on.
    if let Err(e) = scrape::rebuild_index(fetcher, store, options) {
        report(progress, &e.to_string());
    }

    if request.display_all {
        return match store.load() {
            Ok(Some(index)) => QueryOutcome::Slugs(index.into_keys().collect()),
            Ok(None) => QueryOutcome::Slugs(Vec::new()),
            Err(e) => fail(progress, &e.to_string()),
        };
    }

    let Some(slug) = request.slug.as_deref().filter(|s| !s.trim().is_empty()) else {
        return fail(progress, "No CSP name given; pass one or use --display-all");
    };

    match scrape::fetch_detail(fetcher, options, slug) {
        Ok(raw) => {
            let rows = reshape(&raw);
            logf!("{slug}: {} support row(s)", rows.len());
            QueryOutcome::Rows(rows)
        }
        Err(e) => fail(progress, &e.to_string()),
    }
}

fn report(progress: &mut dyn Progress, msg: &str) {
    loge!("{msg}");
    progress.log(msg);
}

fn fail(progress: &mut dyn Progress, msg: &str) -> QueryOutcome {
    report(progress, msg);
    QueryOutcome::Failed(s!(msg))
}
