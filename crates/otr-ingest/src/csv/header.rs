//! Header normalization and column name lookup.

use std::collections::HashMap;

/// Normalizes a header value: strips a UTF-8 BOM, trims, and collapses
/// internal whitespace runs to a single space.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim_matches('\u{feff}').trim();
    let mut normalized = String::with_capacity(trimmed.len());
    for part in trimmed.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(part);
    }
    normalized
}

/// Maps contract column names onto the names actually present in a frame.
///
/// Matching is exact after [`normalize_header`], falling back to an ASCII
/// case-insensitive match.
#[derive(Debug, Clone)]
pub struct ColumnLookup {
    exact: HashMap<String, String>,
    folded: HashMap<String, String>,
}

impl ColumnLookup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exact = HashMap::new();
        let mut folded = HashMap::new();
        for name in names {
            let name = name.as_ref();
            let normalized = normalize_header(name);
            folded
                .entry(normalized.to_ascii_uppercase())
                .or_insert_with(|| name.to_string());
            exact.entry(normalized).or_insert_with(|| name.to_string());
        }
        Self { exact, folded }
    }

    /// Returns the frame's column name for `wanted`, if present.
    pub fn get(&self, wanted: &str) -> Option<&str> {
        let normalized = normalize_header(wanted);
        self.exact
            .get(&normalized)
            .or_else(|| self.folded.get(&normalized.to_ascii_uppercase()))
            .map(String::as_str)
    }
}
