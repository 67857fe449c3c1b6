use nalgebra::Point3;
use std::str::FromStr;

/// Classifies a bead by its function in the assembled nanoparticle.
///
/// Coarse-grained models treat the rigid silica core and the tethered polymer
/// chains as distinct bead species; downstream force-field assignment keys off
/// this role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum BeadRole {
    /// Bead belonging to the rigid nanoparticle core shell.
    #[default]
    Core,
    /// Bead belonging to a tethered coating chain.
    Chain,
    /// Bead belonging to a backfill chain grown on an excluded patch position.
    Backfill,
}

impl FromStr for BeadRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "core" => Ok(BeadRole::Core),
            "chain" => Ok(BeadRole::Chain),
            "backfill" => Ok(BeadRole::Backfill),
            _ => Err(()),
        }
    }
}

/// A single coarse-grained bead: one simulation particle standing in for a
/// cluster of atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct Bead {
    /// The bead species name (e.g., "_CGN", "_MMM", "_MME").
    pub name: String,
    /// The functional role of the bead in the nanoparticle.
    pub role: BeadRole,
    /// The 3D coordinates of the bead in nanometers.
    pub position: Point3<f64>,
}

impl Bead {
    pub fn new(name: &str, role: BeadRole, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            role,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bead_stores_fields() {
        let bead = Bead::new("_CGN", BeadRole::Core, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(bead.name, "_CGN");
        assert_eq!(bead.role, BeadRole::Core);
        assert_eq!(bead.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn bead_role_default_is_core() {
        assert_eq!(BeadRole::default(), BeadRole::Core);
    }

    #[test]
    fn from_str_parses_roles_case_insensitively() {
        assert_eq!(BeadRole::from_str("core"), Ok(BeadRole::Core));
        assert_eq!(BeadRole::from_str("Chain"), Ok(BeadRole::Chain));
        assert_eq!(BeadRole::from_str("BACKFILL"), Ok(BeadRole::Backfill));
        assert_eq!(BeadRole::from_str("solvent"), Err(()));
    }
}
