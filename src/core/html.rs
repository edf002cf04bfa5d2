// src/core/html.rs
// Tolerant markup helpers. No DOM; just scanning.

/// Whitespace-split tokens with empties already dropped.
pub fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Every `href=` attribute value in document order.
/// Handles double, single and unquoted values; attribute name is case-insensitive.
pub fn href_values(doc: &str) -> Vec<&str> {
    // ASCII lowercasing keeps byte offsets aligned with `doc`.
    let lc = doc.to_ascii_lowercase();
    let mut out = Vec::new();
    let mut from = 0usize;

    while let Some(rel) = lc[from..].find("href=") {
        let start = from + rel + "href=".len();
        let val = &doc[start..];
        let (quote, off) = match val.as_bytes().first() {
            Some(b'"') => (Some('"'), 1),
            Some(b'\'') => (Some('\''), 1),
            _ => (None, 0),
        };
        let end = match quote {
            Some(q) => val[off..].find(q).map(|e| off + e),
            None => val.find(|c: char| c.is_ascii_whitespace() || c == '>'),
        }
        .unwrap_or(val.len());

        out.push(&val[off..end]);
        from = start + end.max(off);
    }
    out
}
