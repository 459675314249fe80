//! Query Compilation Module
//!
//! The core component responsible for turning structured search constraints into
//! a single upstream-ready query string.
//!
//! ## Overview
//! This module implements the pure, stateless compilation pipeline of the service.
//! Given a domain plus optional operator-style constraints, it deterministically
//! produces the compiled query, a parallel list of human-readable operator labels,
//! and a prose description shown to users as a transparency aid.
//!
//! ## Responsibilities
//! - **Tokenization**: Splitting whitespace-delimited term lists into clean tokens.
//! - **Operator compilation**: One pure function per field kind (site restriction,
//!   all-of, any-of, exact phrase, inclusion, exclusion, file type).
//! - **Assembly**: Combining fragments in a fixed field order so the same input
//!   always yields a byte-identical query.
//! - **Auxiliary parameters**: Mapping date range and locale into upstream request
//!   parameters independent of the query string.
//!
//! ## Submodules
//! - **`tokenizer`**: Term list normalization.
//! - **`operators`**: Per-field fragment compilers.
//! - **`assembler`**: Field ordering, domain validation, and the public entry points.
//! - **`params`**: Date-range and locale parameter mapping.
//! - **`types`**: `SearchConstraints`, `CompiledQuery`, `DateRange`, `QueryError`.

pub mod assembler;
pub mod operators;
pub mod params;
pub mod tokenizer;
pub mod types;
