// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific extraction for the CSP docs. Each spec knows where the data
//! lives in one page's HTML and how to pull it out; none of them fetch, cache,
//! or print.
//!
//! ## Typical call chain
//! ```text
//! cli → query::query → scrape::rebuild_index → specs::index::extract_slugs
//!                    ↘ scrape::fetch_detail  → specs::support::reshape
//! ```
//!
//! ## Testing notes
//! - Specs are pure functions over `&str`, tested offline against small
//!   captured fragments.
pub mod index;
pub mod support;
