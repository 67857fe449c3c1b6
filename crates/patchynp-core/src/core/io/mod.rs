//! Export of assembled nanoparticles and raw point sets.
//!
//! Only the XYZ hand-off format is supported; simulation-engine formats are
//! the responsibility of the downstream topology layer.

pub mod xyz;
