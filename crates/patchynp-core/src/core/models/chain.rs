use nalgebra::Point3;
use serde::Deserialize;

/// Default distance between consecutive chain beads, in nanometers.
///
/// Matches the port separation of the 3:1 coarse-grained alkane bead model.
pub const DEFAULT_BEAD_SPACING: f64 = 0.15;

/// Prototype of a straight, tethered coarse-grained chain.
///
/// One copy of this prototype is grown outward along the surface normal of
/// every anchor point the pattern selector retains. The default species names
/// follow the 3:1 CG alkane model: `_MMM` body beads (a CH2-CH2-CH2 group)
/// with an optional `_MME` terminal bead (CH2-CH2-CH3).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainTopology {
    /// Number of body beads in the chain.
    pub length: usize,
    /// Distance between consecutive beads along the chain axis, in nm.
    pub spacing: f64,
    /// Species name of the body beads.
    pub bead_name: String,
    /// Species name of the terminal cap bead, if the chain is capped.
    pub cap_name: Option<String>,
}

impl ChainTopology {
    /// A capped CG alkane chain with `length` body beads.
    pub fn cg_alkane(length: usize) -> Self {
        Self {
            length,
            spacing: DEFAULT_BEAD_SPACING,
            bead_name: "_MMM".to_string(),
            cap_name: Some("_MME".to_string()),
        }
    }

    /// Total number of beads this prototype materializes, cap included.
    pub fn bead_count(&self) -> usize {
        self.length + usize::from(self.cap_name.is_some())
    }

    /// Species names of the chain beads, in growth order from the anchor.
    pub fn bead_names(&self) -> impl Iterator<Item = &str> {
        std::iter::repeat_n(self.bead_name.as_str(), self.length)
            .chain(self.cap_name.as_deref())
    }

    /// Bead positions for a chain grown outward from `anchor`.
    ///
    /// The growth direction is the outward surface normal, which for an
    /// origin-centered sphere is the normalized anchor vector. The first bead
    /// sits one spacing above the anchor.
    pub fn positions(&self, anchor: &Point3<f64>) -> Vec<Point3<f64>> {
        let normal = anchor.coords.normalize();
        (1..=self.bead_count())
            .map(|i| anchor + normal * (self.spacing * i as f64))
            .collect()
    }
}
