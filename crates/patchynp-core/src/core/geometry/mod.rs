//! Pure geometric primitives shared by the packing and pattern engines.
//!
//! This module contains the deterministic Fibonacci sphere sampler and the
//! spherical/Cartesian coordinate conversions. All functions here are pure and
//! operate on `nalgebra` points in nanometer units.

pub mod sphere;
pub mod spherical;
