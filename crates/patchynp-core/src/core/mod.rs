//! # Core Module
//!
//! This module provides the fundamental building blocks for coarse-grained
//! nanoparticle modeling in patchynp, serving as the stateless foundation of
//! the library.
//!
//! ## Overview
//!
//! The core module implements the essential data structures and pure geometric
//! algorithms required to represent and generate tethered-nanoparticle models.
//! Nothing in this layer holds mutable global state; every function is a pure
//! computation over its inputs.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Geometric Primitives** ([`geometry`]) - Deterministic sphere sampling and
//!   coordinate-system conversions
//! - **Molecular Representation** ([`models`]) - Data structures for beads, bonds,
//!   chain prototypes, and assembled nanoparticles
//! - **File I/O** ([`io`]) - Export of assembled models and raw point sets

pub mod geometry;
pub mod io;
pub mod models;
