//! Upstream Provider Module
//!
//! The transport that carries compiled queries to a third-party search API.
//!
//! ## Overview
//! The engine never talks to the network itself: it depends on the
//! `SearchProvider` trait, injected as a constructed dependency at startup.
//! The HTTP-backed implementation lives in `client` and owns all
//! provider-shape tolerance (where the result array hides in the payload);
//! everything past that boundary is untyped `serde_json::Value` handed to the
//! results normalizer.
//!
//! ## Submodules
//! - **`client`**: The `SearchProvider` trait and its reqwest implementation.
//! - **`types`**: The payload envelope parsed from provider responses.

pub mod client;
pub mod types;
