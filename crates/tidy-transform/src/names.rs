//! Column name canonicalization.
//!
//! Arbitrary header labels (`Order Date`, `Product Price $`, `ProductPrice`)
//! become lowercase, underscore-separated identifiers drawn from `[a-z0-9_]`.

use serde_json::{Map, Value};

/// Converts a column label to a canonical snake_case identifier.
///
/// # Algorithm
///
/// 1. Split case transitions: before an uppercase letter that starts an
///    `Upper+lower` run, and between a lowercase letter or digit and a
///    following uppercase letter.
/// 2. Lowercase.
/// 3. Replace anything outside `[a-z0-9_]` with `_`.
/// 4. Collapse repeated underscores and strip them from both ends.
///
/// The result is stable under repeated application.
pub fn standardize_column_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut split = String::with_capacity(name.len() + 4);
    for (idx, &ch) in chars.iter().enumerate() {
        if idx > 0 && ch.is_ascii_uppercase() {
            let prev = chars[idx - 1];
            let next_is_lower = chars.get(idx + 1).is_some_and(char::is_ascii_lowercase);
            let after_lower_or_digit = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            if next_is_lower || after_lower_or_digit {
                split.push('_');
            }
        }
        split.push(ch);
    }

    let cleaned: String = split
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    cleaned
        .split('_')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Original header to standardized identifier, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnNameMapping {
    pairs: Vec<(String, String)>,
}

impl ColumnNameMapping {
    /// Standardizes every header of one table.
    ///
    /// Two headers that standardize to the same identifier keep the first as is
    /// and suffix later ones with `_2`, `_3`, ... so names stay unique. A header
    /// with no alphanumeric characters becomes `column`.
    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for header in headers {
            let mut base = standardize_column_name(header);
            if base.is_empty() {
                base = "column".to_string();
            }
            let mut candidate = base.clone();
            let mut suffix = 2usize;
            while pairs.iter().any(|(_, taken)| *taken == candidate) {
                candidate = format!("{base}_{suffix}");
                suffix += 1;
            }
            pairs.push((header.to_string(), candidate));
        }
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn standardized(&self, original: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(from, _)| from == original)
            .map(|(_, to)| to.as_str())
    }

    /// Renders the mapping as a JSON object keyed by original header.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .pairs
            .iter()
            .map(|(from, to)| (from.clone(), Value::String(to.clone())))
            .collect();
        Value::Object(map)
    }
}
