use super::ids::BeadId;

/// A harmonic bond between two beads.
///
/// The coarse-grained model uses a single bond species; anything beyond
/// connectivity (force constants, equilibrium lengths) is assigned by the
/// downstream force-field layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub bead1_id: BeadId,
    pub bead2_id: BeadId,
}

impl Bond {
    pub fn new(bead1_id: BeadId, bead2_id: BeadId) -> Self {
        Self { bead1_id, bead2_id }
    }

    pub fn contains(&self, bead_id: BeadId) -> bool {
        self.bead1_id == bead_id || self.bead2_id == bead_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_bead_id(n: u64) -> BeadId {
        BeadId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn bond_new_initializes_fields() {
        let a = dummy_bead_id(1);
        let b = dummy_bead_id(2);
        let bond = Bond::new(a, b);
        assert_eq!(bond.bead1_id, a);
        assert_eq!(bond.bead2_id, b);
    }

    #[test]
    fn bond_contains_both_endpoints_only() {
        let a = dummy_bead_id(10);
        let b = dummy_bead_id(20);
        let bond = Bond::new(a, b);
        assert!(bond.contains(a));
        assert!(bond.contains(b));
        assert!(!bond.contains(dummy_bead_id(30)));
    }
}
