//! Result Normalization Module
//!
//! Maps provider-specific result records into the stable shape consumed by
//! rendering, export, and persistence collaborators.
//!
//! ## Overview
//! Upstream payloads are duck-typed JSON whose field names vary by provider.
//! This module parses each record defensively, fills display defaults for
//! missing titles and snippets, and drops records that lack a usable URL.
//! A malformed record is never fatal to the batch.
//!
//! ## Submodules
//! - **`normalizer`**: The per-record mapping and filtering logic.
//! - **`types`**: `RawRecord` (boundary parse target) and `NormalizedResult`.

pub mod normalizer;
pub mod types;

#[cfg(test)]
mod tests;
