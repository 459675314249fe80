use serde_json::Value;

/// Keys under which known providers nest their result arrays.
///
/// Checked in order; the first key holding an array wins. A payload that is
/// itself a bare array is also accepted.
pub const RESULT_ARRAY_KEYS: &[&str] = &["results", "organic_results", "items"];

/// Extracts the raw result records from a provider response body.
///
/// Returns an empty vec when the payload carries no recognizable array, which
/// downstream treats as "zero results", not an error.
pub fn extract_records(payload: &Value) -> Vec<Value> {
    if let Some(array) = payload.as_array() {
        return array.clone();
    }
    for key in RESULT_ARRAY_KEYS {
        if let Some(array) = payload.get(key).and_then(Value::as_array) {
            return array.clone();
        }
    }
    Vec::new()
}
