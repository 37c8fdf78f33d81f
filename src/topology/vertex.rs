use crate::math::Point3;

use super::FaceId;

/// A corner of a face.
///
/// `face` refers back to the owning face for texture-space lookups; it does
/// not keep the face alive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// The 3D position of the vertex.
    pub position: Point3,
    /// The face this vertex belongs to.
    pub face: FaceId,
}

impl Vertex {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(position: Point3, face: FaceId) -> Self {
        Self { position, face }
    }
}
