//! # patchynp Core Library
//!
//! A library for building coarse-grained, bead-based models of spherical
//! nanoparticles decorated with tethered polymer chains in prescribed surface
//! patterns ("patchy" coatings), intended as input generators for
//! molecular-dynamics simulations.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Nanoparticle`,
//!   `Bead`, `ChainTopology`), pure geometric primitives (the Fibonacci sphere
//!   sampler, spherical-coordinate conversions), and I/O utilities.
//!
//! - **[`engine`]: The Logic Core.** Implements the geometric point-pattern engine:
//!   the maximum non-overlapping core packing search and the surface pattern
//!   selectors that partition a uniform sphere sample into coated and bare regions.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to assemble complete tethered
//!   nanoparticle models ready for export.

pub mod core;
pub mod engine;
pub mod workflows;
