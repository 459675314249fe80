use super::types::{NormalizedResult, RawRecord};
use serde_json::Value;

const DEFAULT_TITLE: &str = "No title";
const DEFAULT_SNIPPET: &str = "No snippet available";

/// Maps provider records into the stable result shape.
///
/// Records without a usable URL are dropped entirely. Missing or blank titles
/// and snippets get display defaults. Output order matches input order after
/// filtering; no deduplication, re-sorting, or ranking happens here.
pub fn normalize_results(records: &[RawRecord]) -> Vec<NormalizedResult> {
    records.iter().filter_map(normalize_record).collect()
}

/// Parses untyped JSON values record-by-record before normalizing.
///
/// A value that does not parse as a record is dropped silently; one malformed
/// entry never fails the batch.
pub fn normalize_values(values: &[Value]) -> Vec<NormalizedResult> {
    values
        .iter()
        .filter_map(|value| serde_json::from_value::<RawRecord>(value.clone()).ok())
        .filter_map(|record| normalize_record(&record))
        .collect()
}

fn normalize_record(record: &RawRecord) -> Option<NormalizedResult> {
    let url = record.link.as_deref().map(str::trim).filter(|u| !u.is_empty())?;

    Some(NormalizedResult {
        title: display_or(record.title.as_deref(), DEFAULT_TITLE),
        url: url.to_string(),
        snippet: display_or(record.snippet.as_deref(), DEFAULT_SNIPPET),
    })
}

fn display_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_string(),
        None => default.to_string(),
    }
}
