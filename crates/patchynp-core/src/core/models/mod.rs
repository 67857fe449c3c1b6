//! Data structures for coarse-grained nanoparticle models.
//!
//! A [`nanoparticle::Nanoparticle`] is the assembled product: core beads,
//! tethered chain beads, and the bonds connecting them, stored in slot maps
//! with stable insertion order for export. [`chain::ChainTopology`] describes
//! the straight CG-chain prototype that is replicated onto each anchor point.

pub mod bead;
pub mod chain;
pub mod ids;
pub mod nanoparticle;
pub mod topology;
