//! Domain-Scoped Search Service Library
//!
//! This library crate defines the core modules that make up the search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`query`**: The query compilation engine. Turns structured search constraints
//!   (domain restriction, term lists, exact phrase, exclusions, file type) into a
//!   single upstream-ready query string plus auxiliary request parameters.
//! - **`results`**: The normalization layer. Maps heterogeneous provider result
//!   payloads into a stable `{title, url, snippet}` shape.
//! - **`provider`**: The upstream transport. An injectable client that forwards
//!   compiled queries to a third-party search API and returns raw records.
//! - **`search`**: The HTTP API layer. Axum handlers and the orchestration pipeline
//!   (compile, fetch, normalize, record).
//! - **`history`**: Per-user search history kept in a concurrent in-memory store.

pub mod history;
pub mod provider;
pub mod query;
pub mod results;
pub mod search;
