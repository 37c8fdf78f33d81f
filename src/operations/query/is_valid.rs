use crate::error::{OperationError, Result};
use crate::math::{Point3, COORD_TOLERANCE};
use crate::topology::{Solid, MIN_SOLID_FACES};

use super::Volume;

/// Validates the topological and geometric consistency of a solid.
///
/// A valid solid has at least four faces, every face has at least three
/// vertices lying on its plane, every directed edge is matched by the
/// reverse edge of another face (closed and consistently wound), and the
/// enclosed volume is positive (normals point outward).
pub struct IsValid<'a> {
    solid: &'a Solid,
}

impl<'a> IsValid<'a> {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the validation, returning `true` if the solid is valid.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.check().is_ok()
    }

    /// Like [`Self::execute`], but says what is wrong.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Failed`] describing the first defect found.
    pub fn check(&self) -> Result<()> {
        let solid = self.solid;
        if solid.faces.len() < MIN_SOLID_FACES {
            return Err(fail(format!("{} has only {} faces", solid.id, solid.faces.len())));
        }

        for face in &solid.faces {
            if face.vertices.len() < 3 {
                return Err(fail(format!("{} has fewer than 3 vertices", face.id)));
            }
            if let Some(off) = face.points().find(|p| !face.plane.contains(p, COORD_TOLERANCE)) {
                return Err(fail(format!("{} is not planar at {off}", face.id)));
            }
        }

        let edges: Vec<(&Point3, &Point3)> = solid.faces.iter().flat_map(|f| f.edges()).collect();
        for (from, to) in &edges {
            let twinned = edges
                .iter()
                .any(|(a, b)| same_point(a, to) && same_point(b, from));
            if !twinned {
                return Err(fail(format!(
                    "{} has an unmatched edge {from} -> {to}",
                    solid.id
                )));
            }
        }

        let volume = Volume::new(solid).signed();
        if volume <= 0.0 {
            return Err(fail(format!(
                "{} encloses a non-positive volume ({volume})",
                solid.id
            )));
        }
        Ok(())
    }
}

fn same_point(a: &Point3, b: &Point3) -> bool {
    (a - b).norm() < COORD_TOLERANCE
}

fn fail(message: String) -> crate::error::BrushError {
    OperationError::Failed(message).into()
}
