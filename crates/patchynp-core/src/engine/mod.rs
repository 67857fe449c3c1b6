//! # Engine Module
//!
//! This module implements the geometric point-pattern engine of patchynp:
//! the algorithms that pack beads onto a sphere and partition a uniform
//! surface sample into coated and bare regions.
//!
//! ## Overview
//!
//! Two tightly coupled components form the engine. The packing search finds
//! the maximum number of core beads that fit on a sphere without overlap,
//! bounding a binary search with a regression estimate. The pattern selector
//! filters an isotropic Fibonacci sample through one of eight named geometric
//! membership rules, guaranteeing that the retained subset and its complement
//! partition the candidate set exactly.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Builder-validated workflow parameters
//! - **Packing Search** ([`packing`]) - Maximum non-overlapping core bead count
//! - **Pattern Selection** ([`patterns`]) - Named surface coating patterns and
//!   patch/complement accounting
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error kinds
//!
//! Everything here is pure, synchronous, CPU-bound computation; the only
//! randomness is the explicitly seeded generator of the random pattern.

pub mod config;
pub mod error;
pub mod packing;
pub mod patterns;
pub mod progress;
