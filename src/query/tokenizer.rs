/// Splits a whitespace-delimited term list into individual tokens.
///
/// Runs of whitespace count as a single separator and empty entries are
/// dropped, so absent, empty, or whitespace-only input yields zero tokens.
/// Callers treat an empty result as "field not present": it must not emit
/// an operator or description fragment.
pub fn tokenize_terms(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split_whitespace()
        .map(|term| term.to_string())
        .collect()
}
