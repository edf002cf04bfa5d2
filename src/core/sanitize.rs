// src/core/sanitize.rs

/// Remove every occurrence of each pattern, applied in order.
pub fn strip_all(s: &str, patterns: &[&str]) -> String {
    let mut out = s!(s);
    for p in patterns {
        if out.contains(p) {
            out = out.replace(p, "");
        }
    }
    out
}

/// True when `s` contains any of `patterns`.
pub fn contains_any(s: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| s.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_is_ordered() {
        assert_eq!(strip_all("Windows 10 Edition", &["Edition", "Windows", "10"]), "  ");
        assert_eq!(strip_all("a, b", &[", "]), "ab");
    }

    #[test]
    fn contains_any_matches_substrings() {
        assert!(contains_any("<td>Pro</td>", &["<th>", "</td>"]));
        assert!(!contains_any("Pro", &["<th>", "</td>"]));
    }
}
