//! Search Service Module
//!
//! The HTTP API layer and the orchestration pipeline that ties the service together.
//!
//! ## Overview
//! Handlers accept basic (domain + keyword) and advanced (full constraint set)
//! search requests, run them through the compile / fetch / normalize pipeline,
//! record the outcome in the user's history, and echo the compiled operators
//! back to the client as a transparency aid.
//!
//! ## Responsibilities
//! - **Orchestration**: The engine pipeline over injected provider and history
//!   dependencies.
//! - **API**: Request parsing (lenient date-range strings, optional fields) and
//!   response shaping.
//!
//! ## Submodules
//! - **`engine`**: Compile, fetch, normalize, record.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
