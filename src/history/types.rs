//! History Data Types

use serde::{Deserialize, Serialize};

/// One recorded search.
///
/// Stores the compiled query string (not the raw constraints) together with
/// the human-readable description, so a later reader sees exactly what was
/// sent upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub user: String,
    pub query: String,
    pub description: String,
    pub result_count: usize,
    /// Unix timestamp (seconds) of when the search ran.
    pub searched_at: u64,
}

/// Response for the history listing endpoint.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub user: String,
    pub count: usize,
    pub entries: Vec<HistoryEntry>,
}

/// Response for the history clear endpoint.
#[derive(Debug, Serialize)]
pub struct ClearHistoryResponse {
    pub user: String,
    pub removed: usize,
}
