//! High-level workflows composing the engine into complete operations.
//!
//! A workflow wires the packing search, the pattern selectors, and the
//! molecular model together behind a single entry point, reporting progress
//! through [`crate::engine::progress::ProgressReporter`].

pub mod build;
