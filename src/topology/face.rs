use crate::error::{GeometryError, Result};
use crate::geometry::{Aabb, Plane};
use crate::math::Point3;

use super::color::Color;
use super::ids::{FaceId, ObjectId};
use super::texture::{TextureAlignment, TextureRef};
use super::vertex::Vertex;

/// A planar polygon bounding a solid.
///
/// Vertices run clockwise when viewed from outside the solid; the plane is
/// taken from the first three of them, so its normal points outward.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub id: FaceId,
    /// The solid that owns this face.
    pub solid: ObjectId,
    pub plane: Plane,
    pub vertices: Vec<Vertex>,
    pub texture: TextureAlignment,
    pub color: Color,
    pub bounding_box: Aabb,
}

impl Face {
    /// Builds a face from a wound ring of points.
    ///
    /// The texture gets a world-aligned projection and the bounding box is
    /// computed from the ring.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring has fewer than three points or its first
    /// three points are collinear.
    pub fn from_ring(
        id: FaceId,
        solid: ObjectId,
        ring: &[Point3],
        texture: TextureRef,
        color: Color,
    ) -> Result<Self> {
        let [p1, p2, p3, ..] = ring else {
            return Err(GeometryError::Degenerate(format!(
                "face needs at least 3 points, got {}",
                ring.len()
            ))
            .into());
        };
        let plane = Plane::from_points(p1, p2, p3)?;
        let vertices = ring.iter().map(|p| Vertex::new(*p, id)).collect();
        let mut face = Self {
            id,
            solid,
            plane,
            vertices,
            texture: TextureAlignment::world_aligned(texture, &plane),
            color,
            bounding_box: Aabb::new(*p1, *p1),
        };
        face.update_bounding_box();
        Ok(face)
    }

    /// Iterates over the vertex positions in winding order.
    pub fn points(&self) -> impl Iterator<Item = &Point3> + '_ {
        self.vertices.iter().map(|v| &v.position)
    }

    /// Recomputes the bounding box from the vertices.
    pub fn update_bounding_box(&mut self) {
        if let Some(aabb) = Aabb::from_points(self.points()) {
            self.bounding_box = aabb;
        }
    }

    /// Re-applies the default world-aligned texture projection.
    pub fn align_texture_to_world(&mut self) {
        self.texture.align_to_world(&self.plane);
    }

    /// Texture-space `(u, v)` of every vertex, in winding order.
    #[must_use]
    pub fn texture_coordinates(&self) -> Vec<(f64, f64)> {
        self.points().map(|p| self.texture.project(p)).collect()
    }

    /// Iterates over the directed edges `(from, to)` of the face boundary.
    pub fn edges(&self) -> impl Iterator<Item = (&Point3, &Point3)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            (
                &self.vertices[i].position,
                &self.vertices[(i + 1) % n].position,
            )
        })
    }
}
