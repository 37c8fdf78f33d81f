use crate::error::Result;
use crate::topology::{Color, Face, IdAllocator, Solid, TextureRef};

use super::ring::Ring;

/// Builds a [`Solid`] from wound face rings.
///
/// Allocates the solid's id first and then one face id per ring, in ring
/// order. Every face gets the texture with a world-aligned projection and
/// the solid's colour.
pub struct MakeSolid<'a> {
    rings: &'a [Ring],
    texture: &'a TextureRef,
    color: Color,
}

impl<'a> MakeSolid<'a> {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(rings: &'a [Ring], texture: &'a TextureRef, color: Color) -> Self {
        Self {
            rings,
            texture,
            color,
        }
    }

    /// Executes the operation, drawing identifiers from `ids`.
    ///
    /// Identifiers drawn before a failure stay consumed.
    ///
    /// # Errors
    ///
    /// Returns an error if a ring is degenerate or there are too few rings
    /// to enclose a volume.
    pub fn execute(&self, ids: &mut IdAllocator) -> Result<Solid> {
        let solid_id = ids.next_object_id();
        let faces = self
            .rings
            .iter()
            .map(|ring| {
                Face::from_ring(
                    ids.next_face_id(),
                    solid_id,
                    ring,
                    self.texture.clone(),
                    self.color,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Solid::from_faces(solid_id, self.color, faces)
    }
}
