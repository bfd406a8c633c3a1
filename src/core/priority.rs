use regex::Regex;
use std::sync::LazyLock;

static MODERATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)moderate").expect("moderate pattern is valid"));

/// `"2 - High"` -> `"High"`, `"3 - Moderate"` -> `"Medium"`.
///
/// Assumes a single-word label: everything after the first character is lower-cased.
pub fn normalize_priority(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '-')
        .collect();
    let label = MODERATE.replace_all(stripped.trim(), "Medium");

    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
