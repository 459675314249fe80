//! Result Data Types
//!
//! The boundary type parsed from untyped provider payloads and the stable
//! internal representation handed to downstream collaborators.

use serde::{Deserialize, Serialize};

/// One record as the upstream provider returns it.
///
/// Every field is optional: presence is never trusted. Providers disagree on
/// field names, so the link accepts `link` or `url` and the snippet accepts
/// `snippet` or `description`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "url")]
    pub link: Option<String>,
    #[serde(default, alias = "description")]
    pub snippet: Option<String>,
}

/// The stable, provider-agnostic result shape.
///
/// Constructed fresh per search invocation and never mutated afterwards.
/// `url` is always present: records without one are dropped during
/// normalization rather than given a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}
