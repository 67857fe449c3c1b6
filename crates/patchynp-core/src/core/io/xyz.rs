use crate::core::geometry::sphere::PointSet;
use crate::core::models::nanoparticle::Nanoparticle;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Writer for the plain XYZ coordinate format.
///
/// One record per bead or point, emitted in generation order: a count line,
/// a comment line, then `NAME x y z` rows. This is the minimal visualization
/// hand-off; simulation topologies are assembled elsewhere.
pub struct XyzFile;

impl XyzFile {
    /// Writes an assembled nanoparticle, beads in insertion order.
    pub fn write_to(
        particle: &Nanoparticle,
        comment: &str,
        writer: &mut impl Write,
    ) -> Result<(), XyzError> {
        writeln!(writer, "{}", particle.bead_count())?;
        writeln!(writer, "{}", comment)?;
        for (_, bead) in particle.beads_iter() {
            writeln!(
                writer,
                "{} {:.6} {:.6} {:.6}",
                bead.name, bead.position.x, bead.position.y, bead.position.z
            )?;
        }
        Ok(())
    }

    /// Writes a bare point set under a single placeholder species name.
    pub fn write_points_to(
        points: &PointSet,
        name: &str,
        comment: &str,
        writer: &mut impl Write,
    ) -> Result<(), XyzError> {
        writeln!(writer, "{}", points.len())?;
        writeln!(writer, "{}", comment)?;
        for point in points {
            writeln!(
                writer,
                "{} {:.6} {:.6} {:.6}",
                name, point.x, point.y, point.z
            )?;
        }
        Ok(())
    }

    /// Writes an assembled nanoparticle to a file path.
    pub fn write_to_path<P: AsRef<Path>>(
        particle: &Nanoparticle,
        comment: &str,
        path: P,
    ) -> Result<(), XyzError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(particle, comment, &mut writer)
    }

    /// Writes a bare point set to a file path.
    pub fn write_points_to_path<P: AsRef<Path>>(
        points: &PointSet,
        name: &str,
        comment: &str,
        path: P,
    ) -> Result<(), XyzError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_points_to(points, name, comment, &mut writer)
    }
}
