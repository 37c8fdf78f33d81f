use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::operations::ring::templates::wedge;
use crate::topology::{Solid, TextureRef};

use super::check_bounds;

/// Creates a ramp that climbs from the front bottom edge (minimum Y) to the
/// back top edge (maximum Y) of a bounding volume.
pub struct MakeWedge {
    bounds: BoundingVolume,
}

impl MakeWedge {
    /// Creates a new `MakeWedge` operation.
    #[must_use]
    pub fn new(bounds: BoundingVolume) -> Self {
        Self { bounds }
    }

    /// Executes the operation, returning the single five-face solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume is flat or collapses on the grid.
    pub fn execute(&self, ctx: &mut BuildContext, texture: &TextureRef) -> Result<Solid> {
        check_bounds(&self.bounds)?;
        let grid = ctx.grid();
        let rings = wedge(
            &grid.round_point(self.bounds.start()),
            &grid.round_point(self.bounds.end()),
        );
        ctx.make_solid(&rings, texture)
    }
}
