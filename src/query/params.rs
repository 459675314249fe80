//! Auxiliary Parameter Mapping
//!
//! Two independent pure mappings that derive upstream request parameters
//! from the date range and locale selection. These travel alongside the
//! compiled query string but never inside it.

use super::types::DateRange;
use std::collections::HashMap;

/// Request parameter carrying the recency filter.
pub const PARAM_TIME_RANGE: &str = "time_range";
/// Request parameter carrying the geolocation code.
pub const PARAM_REGION: &str = "gl";
/// Request parameter carrying the interface language code.
pub const PARAM_LANGUAGE: &str = "hl";

const DEFAULT_REGION: &str = "us";
const DEFAULT_LANGUAGE: &str = "en";

/// Maps the date range onto its single-letter time-filter token.
///
/// `Any` means no filtering: the key is omitted entirely rather than sent
/// with an empty value.
pub fn map_date_range(range: DateRange) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let token = match range {
        DateRange::Any => return params,
        DateRange::Day => "d",
        DateRange::Week => "w",
        DateRange::Month => "m",
        DateRange::Year => "y",
    };
    params.insert(PARAM_TIME_RANGE.to_string(), token.to_string());
    params
}

/// Maps the locale selection onto region and language parameters.
///
/// Absent or blank values fall back to "us" / "en". Codes are passed through
/// as-is; validating them against a real locale list is the upstream's job.
pub fn map_locale(language: Option<&str>, region: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert(
        PARAM_REGION.to_string(),
        non_blank(region).unwrap_or(DEFAULT_REGION).to_string(),
    );
    params.insert(
        PARAM_LANGUAGE.to_string(),
        non_blank(language).unwrap_or(DEFAULT_LANGUAGE).to_string(),
    );
    params
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
