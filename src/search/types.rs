//! Search API Data Types
//!
//! Defines the Data Transfer Objects (DTOs) for API communication. Incoming
//! shapes keep every optional field as a plain string so blank and malformed
//! values can degrade leniently instead of failing deserialization.

use crate::query::types::{DateRange, SearchConstraints};
use crate::results::types::NormalizedResult;
use serde::{Deserialize, Serialize};

/// Query-string parameters of the basic search endpoint.
#[derive(Debug, Deserialize)]
pub struct BasicSearchParams {
    pub domain: String,
    #[serde(default)]
    pub q: String,
    pub date_range: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub user: Option<String>,
}

/// JSON body of the advanced search endpoint.
#[derive(Debug, Deserialize)]
pub struct AdvancedSearchRequest {
    pub domain: String,
    pub all_terms: Option<String>,
    pub any_terms: Option<String>,
    pub exact_phrase: Option<String>,
    pub include_terms: Option<String>,
    pub exclude_terms: Option<String>,
    pub file_type: Option<String>,
    pub date_range: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub user: Option<String>,
}

impl AdvancedSearchRequest {
    /// Lowers the wire shape into engine constraints, parsing the date range
    /// leniently (unrecognized values behave as "any").
    pub fn into_constraints(self) -> SearchConstraints {
        SearchConstraints {
            domain: self.domain,
            all_terms: self.all_terms,
            any_terms: self.any_terms,
            exact_phrase: self.exact_phrase,
            include_terms: self.include_terms,
            exclude_terms: self.exclude_terms,
            file_type: self.file_type,
            date_range: DateRange::parse(self.date_range.as_deref()),
            language: self.language,
            region: self.region,
        }
    }
}

/// Response returned by both search endpoints.
///
/// `operators` and `description` expose the compiled query's structure to the
/// client for transparency; `status` distinguishes success from the two
/// failure modes (invalid domain, upstream failure).
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: String,
    pub query: String,
    pub operators: Vec<String>,
    pub description: String,
    pub count: usize,
    pub results: Vec<NormalizedResult>,
}

impl SearchResponse {
    pub fn error(status: &str) -> Self {
        Self {
            status: status.to_string(),
            query: String::new(),
            operators: Vec::new(),
            description: String::new(),
            count: 0,
            results: Vec::new(),
        }
    }
}
