use super::bead::{Bead, BeadRole};
use super::ids::BeadId;
use super::topology::Bond;
use slotmap::{SecondaryMap, SlotMap};

/// An assembled coarse-grained nanoparticle: core shell, tethered chains, and
/// the bonds connecting them.
///
/// Beads are stored in a slot map for cheap ID-based lookup; the explicit
/// insertion-order list guarantees export order matches assembly order (core
/// shell first, then chains anchor by anchor).
#[derive(Debug, Clone, Default)]
pub struct Nanoparticle {
    beads: SlotMap<BeadId, Bead>,
    bead_order: Vec<BeadId>,
    bonds: Vec<Bond>,
    bond_adjacency: SecondaryMap<BeadId, Vec<BeadId>>,
}

impl Nanoparticle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bead and returns its ID.
    pub fn add_bead(&mut self, bead: Bead) -> BeadId {
        let id = self.beads.insert(bead);
        self.bead_order.push(id);
        self.bond_adjacency.insert(id, Vec::new());
        id
    }

    /// Adds a bond between two existing beads.
    ///
    /// Returns `None` if either bead does not exist. Re-adding an existing
    /// bond is idempotent.
    pub fn add_bond(&mut self, bead1_id: BeadId, bead2_id: BeadId) -> Option<()> {
        if !self.beads.contains_key(bead1_id) || !self.beads.contains_key(bead2_id) {
            return None;
        }

        if let Some(neighbors) = self.bond_adjacency.get(bead1_id) {
            if neighbors.contains(&bead2_id) {
                return Some(());
            }
        }

        self.bonds.push(Bond::new(bead1_id, bead2_id));
        self.bond_adjacency[bead1_id].push(bead2_id);
        self.bond_adjacency[bead2_id].push(bead1_id);
        Some(())
    }

    pub fn bead(&self, id: BeadId) -> Option<&Bead> {
        self.beads.get(id)
    }

    /// Iterates beads in insertion order.
    pub fn beads_iter(&self) -> impl Iterator<Item = (BeadId, &Bead)> {
        self.bead_order.iter().map(|&id| (id, &self.beads[id]))
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// IDs of beads directly bonded to the given bead.
    pub fn bonded_neighbors(&self, id: BeadId) -> &[BeadId] {
        self.bond_adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    pub fn bead_count(&self) -> usize {
        self.beads.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Number of beads with the given role.
    pub fn count_role(&self, role: BeadRole) -> usize {
        self.beads.values().filter(|b| b.role == role).count()
    }
}
