//! Query Engine Data Types
//!
//! Defines the structured input accepted by the compiler, the compiled output
//! handed to the transport layer, and the single error the engine can raise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured search input accepted by the advanced compiler.
///
/// Only `domain` is mandatory; every other field may be absent, and blank or
/// whitespace-only values behave exactly like absent ones. Term-list fields
/// (`all_terms`, `any_terms`, `include_terms`, `exclude_terms`) hold
/// whitespace-delimited words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConstraints {
    /// Host-like domain all results are scoped to (e.g. "docs.example.com").
    pub domain: String,
    /// Words that must all appear (AND semantics).
    pub all_terms: Option<String>,
    /// Words of which at least one must appear (OR semantics).
    pub any_terms: Option<String>,
    /// A phrase matched verbatim, quoted in the compiled query.
    pub exact_phrase: Option<String>,
    /// Words softly preferred, appended without an operator prefix.
    pub include_terms: Option<String>,
    /// Words that must not appear (NOT semantics).
    pub exclude_terms: Option<String>,
    /// Single file extension filter (e.g. "pdf").
    pub file_type: Option<String>,
    /// Recency filter, mapped to an auxiliary parameter rather than the query.
    #[serde(default)]
    pub date_range: DateRange,
    /// Interface language code (e.g. "en"). Passed through unvalidated.
    pub language: Option<String>,
    /// Geolocation code (e.g. "us"). Passed through unvalidated.
    pub region: Option<String>,
}

/// Recency window applied to upstream results.
///
/// `Any` means no filtering and emits no request parameter at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    Any,
    Day,
    Week,
    Month,
    Year,
}

impl DateRange {
    /// Lenient parse used at the API boundary: unrecognized or absent
    /// values fall back to `Any` rather than failing the request.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("day") => DateRange::Day,
            Some("week") => DateRange::Week,
            Some("month") => DateRange::Month,
            Some("year") => DateRange::Year,
            _ => DateRange::Any,
        }
    }
}

/// Output of query assembly, ready to hand to an upstream search provider.
///
/// `operators` holds one human-readable descriptor per input field that
/// contributed a fragment, in compilation order. `description` is the
/// comma-joined prose summary shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledQuery {
    pub query: String,
    pub operators: Vec<String>,
    pub description: String,
}

/// The only error the compiler raises.
///
/// Every optional field degrades gracefully to "absent"; the domain is the
/// single structural precondition, validated once before any compilation.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("invalid domain: {domain:?}")]
    InvalidDomain { domain: String },
}
