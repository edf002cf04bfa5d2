// src/specs/support.rs
//! Scraping *spec* for a single CSP page's edition support table.
//!
//! The page has no stable structure to select on, so the table is rebuilt from
//! a flat token stream:
//!
//! ```text
//! raw html ─┬─ recover_policy_names ───────────────┐
//!           └─ table_text → clean_tokens ─ group_rows ─→ Vec<SupportRow>
//! ```
//!
//! Rows are groups of three tokens: edition, Windows 10, Windows 11. Policy
//! names come from the page's self-bookmark anchors and are handed out in
//! order, moving to the next name after each "Education" row (the last edition
//! of every table on these pages).

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::consts::{EDITION_ADVANCE, NO_POLICIES};
use crate::core::{html::tokens, sanitize::{contains_any, strip_all}};

const TABLE_MARKUP: [&str; 10] = [
    "<th>", "</th>", "<tr>", "</tr>", "<td>", "</td>", "<tbody>", "</tbody>", "<table>", "</table>",
];
const NOISE_WORDS: [&str; 5] = ["Edition", "Windows", "10", "11", ", "];
const BOOKMARK_NOISE: [&str; 3] = [r#"data-linktype="self-bookmark">"#, "</a>", "</dt>"];
const SELF_BOOKMARK: &str = r#"data-linktype="self-bookmark""#;

static BOOKMARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"^href="#[^"]+"$"##).expect("bookmark pattern"));

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SupportRow {
    #[serde(rename = "Policy")]
    pub policy: String,
    #[serde(rename = "Edition")]
    pub edition: String,
    #[serde(rename = "Windows10")]
    pub windows10: String,
    #[serde(rename = "Windows11")]
    pub windows11: String,
}

impl SupportRow {
    pub const HEADERS: [&'static str; 4] = ["Policy", "Edition", "Windows10", "Windows11"];

    pub fn cells(&self) -> [&str; 4] {
        [&self.policy, &self.edition, &self.windows10, &self.windows11]
    }
}

/// What the bookmark scan found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyNames {
    None,
    /// Exactly one name; every row gets it.
    Single(String),
    /// Handed out positionally.
    Many(Vec<String>),
}

impl PolicyNames {
    pub fn from_vec(mut names: Vec<String>) -> Self {
        match names.len() {
            0 => Self::None,
            1 => Self::Single(names.remove(0)),
            _ => Self::Many(names),
        }
    }

    fn name_for(&self, counter: usize) -> &str {
        match self {
            Self::None => NO_POLICIES,
            Self::Single(name) => name.as_str(),
            // Past the end (more Education rows than anchors) the row gets the
            // sentinel, not an empty name.
            Self::Many(names) => names.get(counter).map(String::as_str).unwrap_or(NO_POLICIES),
        }
    }
}

/// Full pipeline: raw page → ordered rows. A page without a table gives no rows.
pub fn reshape(raw: &str) -> Vec<SupportRow> {
    let names = recover_policy_names(raw);
    let cleaned = clean_tokens(&table_text(raw));
    let stream: Vec<&str> = cleaned.iter().map(String::as_str).collect();
    group_rows(&stream, &names)
}

/// Policy names from `href="#anchor" data-linktype="self-bookmark">Name</a>` pairs.
pub fn recover_policy_names(raw: &str) -> PolicyNames {
    let toks = tokens(raw);
    let mut names = Vec::new();

    for pair in toks.windows(2) {
        let (marker, label) = (pair[0], pair[1]);
        if !BOOKMARK.is_match(marker) || !label.contains(SELF_BOOKMARK) {
            continue;
        }
        let name = strip_all(label, &BOOKMARK_NOISE).trim().to_string();
        if !name.is_empty() {
            names.push(name);
        }
    }
    logd!("Recovered {} policy name(s)", names.len());
    PolicyNames::from_vec(names)
}

/// Table cell text: tokens carrying table markup, markup removed, space-joined.
pub fn table_text(raw: &str) -> String {
    tokens(raw)
        .into_iter()
        .filter(|t| contains_any(t, &TABLE_MARKUP))
        .map(|t| strip_all(t, &TABLE_MARKUP))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drop header noise ("Windows 10", "Edition", ...) and re-split.
pub fn clean_tokens(joined: &str) -> Vec<String> {
    tokens(&strip_all(joined, &NOISE_WORDS))
        .into_iter()
        .map(String::from)
        .collect()
}

/// Regroup the flat stream into rows of three; a short trailing group is dropped.
pub fn group_rows(stream: &[&str], names: &PolicyNames) -> Vec<SupportRow> {
    let mut rows = Vec::with_capacity(stream.len() / 3);
    let mut counter = 0usize;

    for group in stream.chunks_exact(3) {
        let (edition, win10, win11) = (group[0], group[1], group[2]);

        rows.push(SupportRow {
            policy: s!(names.name_for(counter)),
            edition: if edition == "SE" { s!("Windows SE") } else { s!(edition) },
            windows10: win10.replace("Yes1607", "Yes, starting in Windows 10 build 1607"),
            windows11: s!(win11),
        });

        if edition == EDITION_ADVANCE {
            counter += 1;
        }
    }
    rows
}
