// tests/query.rs
//
// Query frontend: rebuild, then list or fetch + reshape; failures are reported, never raised.
//
mod common;

use common::FakeFetcher;
use csp_lookup::config::options::Options;
use csp_lookup::progress::RecordingProgress;
use csp_lookup::query::{query, QueryOutcome, QueryRequest};
use csp_lookup::store::{CacheStore, MemoryStore};

#[test]
fn slug_query_returns_rows_and_finishes() {
    let fetcher = FakeFetcher::docs();
    let mut store = MemoryStore::new();
    let mut progress = RecordingProgress::default();

    let out = query(&fetcher, &mut store, &Options::default(), &QueryRequest::slug("policy-csp-abovelock"), &mut progress);

    assert_eq!(out.rows().len(), 6);
    assert_eq!(out.rows()[0].edition, "Pro");
    assert_eq!(progress.finished.as_deref(), Some("Finished!"));
    assert!(progress.lines.is_empty());
    // cache was rebuilt on the way
    assert_eq!(store.load().unwrap().map(|i| i.len()), Some(4));
}

#[test]
fn display_all_lists_slugs_and_skips_detail() {
    // Only the index exists; a detail fetch would 404 and show up in the log.
    let o = Options::default();
    let fetcher = FakeFetcher::new().page(&o.index_url(), common::INDEX_HTML);
    let mut store = MemoryStore::new();
    let mut progress = RecordingProgress::default();

    let request = QueryRequest { slug: Some("ignored".into()), display_all: true };
    let out = query(&fetcher, &mut store, &o, &request, &mut progress);

    assert_eq!(
        out,
        QueryOutcome::Slugs(vec![
            "policy-csp-abovelock".into(),
            "policy-csp-accounts".into(),
            "policy-csp-update".into(),
            "policy-csp-admx-backed".into(),
        ])
    );
    assert!(progress.lines.is_empty());
    assert_eq!(progress.finished.as_deref(), Some("Finished!"));
}

#[test]
fn missing_page_reports_status_and_url() {
    let o = Options::default();
    let fetcher = FakeFetcher::docs();
    let mut store = MemoryStore::new();
    let mut progress = RecordingProgress::default();

    let out = query(&fetcher, &mut store, &o, &QueryRequest::slug("policy-csp-nope"), &mut progress);

    let url = o.page_url("policy-csp-nope");
    assert!(out.rows().is_empty());
    match &out {
        QueryOutcome::Failed(msg) => {
            assert!(msg.contains("404"));
            assert!(msg.contains(&url));
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(progress.lines.len(), 1);
    assert_eq!(progress.finished.as_deref(), Some("Finished!"));
}

#[test]
fn index_failure_does_not_block_detail() {
    let o = Options::default();
    let fetcher = FakeFetcher::new().page(&o.page_url("policy-csp-abovelock"), common::ABOVELOCK_HTML);
    let mut store = MemoryStore::new();
    let mut progress = RecordingProgress::default();

    let out = query(&fetcher, &mut store, &o, &QueryRequest::slug("policy-csp-abovelock"), &mut progress);

    assert_eq!(out.rows().len(), 6);
    assert_eq!(progress.lines.len(), 1);
    assert!(progress.lines[0].contains(&o.index_url()));
}

#[test]
fn no_slug_is_reported() {
    let fetcher = FakeFetcher::docs();
    let mut store = MemoryStore::new();
    let mut progress = RecordingProgress::default();

    let out = query(&fetcher, &mut store, &Options::default(), &QueryRequest::default(), &mut progress);

    assert!(matches!(out, QueryOutcome::Failed(_)));
    assert_eq!(progress.finished.as_deref(), Some("Finished!"));
}

#[test]
fn display_all_with_broken_cache_reports() {
    // Index fetch fails, so the corrupted cache survives to the load.
    let fetcher = FakeFetcher::new();
    let mut store = MemoryStore::with_raw("{ not json");
    let mut progress = RecordingProgress::default();

    let out = query(&fetcher, &mut store, &Options::default(), &QueryRequest::display_all(), &mut progress);

    assert!(matches!(out, QueryOutcome::Failed(_)));
    assert_eq!(progress.lines.len(), 2);
}
