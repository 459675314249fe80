use super::types::HistoryEntry;
use dashmap::DashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Concurrent in-memory history store, keyed by user id.
///
/// Entries for one user are kept in insertion order internally and returned
/// newest-first. The store holds no locks across calls and is safe to share
/// behind an `Arc` between request handlers.
pub struct HistoryStore {
    entries: DashMap<String, Vec<HistoryEntry>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Records one executed search for the given user.
    pub fn record(&self, user: &str, query: &str, description: &str, result_count: usize) {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            user: user.to_string(),
            query: query.to_string(),
            description: description.to_string(),
            result_count,
            searched_at: unix_now(),
        };

        self.entries
            .entry(user.to_string())
            .or_default()
            .push(entry);
    }

    /// Returns the user's history, newest first.
    pub fn list(&self, user: &str) -> Vec<HistoryEntry> {
        match self.entries.get(user) {
            Some(entries) => entries.iter().rev().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Removes all entries for the user, returning how many were dropped.
    pub fn clear(&self, user: &str) -> usize {
        match self.entries.remove(user) {
            Some((_, entries)) => entries.len(),
            None => 0,
        }
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
