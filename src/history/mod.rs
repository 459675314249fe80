//! Search History Module
//!
//! Per-user history of executed searches, kept in a concurrent in-memory store.
//!
//! ## Overview
//! After every successful search carrying a user id, the engine records the
//! compiled query string, its human-readable description, and the result count.
//! The store is process-local: durable persistence is a deliberate non-goal.
//!
//! ## Submodules
//! - **`memory`**: The `HistoryStore` backed by a `DashMap`.
//! - **`handlers`**: HTTP endpoints for listing and clearing a user's history.
//! - **`types`**: `HistoryEntry` and API response shapes.

pub mod handlers;
pub mod memory;
pub mod types;
