use crate::error::{OperationError, Result};
use crate::geometry::Aabb;
use crate::math::{polygon_3d, Point3};

use super::color::Color;
use super::face::Face;
use super::ids::ObjectId;

/// Minimum number of faces that can enclose a volume.
pub const MIN_SOLID_FACES: usize = 4;

/// A closed volume bounded by planar faces.
///
/// The solid exclusively owns its faces. Faces keep the solid's id as a
/// back-reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub id: ObjectId,
    pub color: Color,
    pub faces: Vec<Face>,
    pub bounding_box: Aabb,
}

impl Solid {
    /// Creates a solid from faces already built for it.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than [`MIN_SOLID_FACES`] faces are given or a
    /// face belongs to a different solid.
    pub fn from_faces(id: ObjectId, color: Color, faces: Vec<Face>) -> Result<Self> {
        if faces.len() < MIN_SOLID_FACES {
            return Err(OperationError::InvalidInput(format!(
                "a solid needs at least {MIN_SOLID_FACES} faces, got {}",
                faces.len()
            ))
            .into());
        }
        if let Some(stray) = faces.iter().find(|f| f.solid != id) {
            return Err(OperationError::InvalidInput(format!(
                "{} belongs to {}, not {id}",
                stray.id, stray.solid
            ))
            .into());
        }
        let mut solid = Self {
            id,
            color,
            bounding_box: faces[0].bounding_box,
            faces,
        };
        solid.update_bounding_box();
        Ok(solid)
    }

    /// Recomputes the bounding box as the union of the face boxes.
    pub fn update_bounding_box(&mut self) {
        if let Some(aabb) = Aabb::union_all(self.faces.iter().map(|f| f.bounding_box)) {
            self.bounding_box = aabb;
        }
    }

    /// Iterates over all face vertex positions. Shared corners repeat.
    pub fn points(&self) -> impl Iterator<Item = &Point3> + '_ {
        self.faces.iter().flat_map(Face::points)
    }

    /// Mean of the distinct corner positions.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let mut corners: Vec<Point3> = Vec::new();
        for p in self.points() {
            if !corners.contains(p) {
                corners.push(*p);
            }
        }
        polygon_3d::centroid(&corners).unwrap_or_else(|| self.bounding_box.min)
    }
}
