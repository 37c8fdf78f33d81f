use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::math::{Point3, Vector3};
use crate::operations::ring::templates::prism;
use crate::topology::{Solid, TextureRef};

use super::check_bounds;

/// Creates a box solid filling a bounding volume.
pub struct MakeBlock {
    bounds: BoundingVolume,
}

impl MakeBlock {
    /// Creates a new `MakeBlock` operation.
    #[must_use]
    pub fn new(bounds: BoundingVolume) -> Self {
        Self { bounds }
    }

    /// Executes the operation, returning the single box solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the volume is flat or collapses on the grid.
    pub fn execute(&self, ctx: &mut BuildContext, texture: &TextureRef) -> Result<Solid> {
        check_bounds(&self.bounds)?;
        let grid = ctx.grid();
        let min = grid.round_point(self.bounds.start());
        let max = grid.round_point(self.bounds.end());
        let base = [
            Point3::new(min.x, min.y, min.z),
            Point3::new(max.x, min.y, min.z),
            Point3::new(max.x, max.y, min.z),
            Point3::new(min.x, max.y, min.z),
        ];
        let rings = prism(&base, &Vector3::new(0.0, 0.0, max.z - min.z));
        ctx.make_solid(&rings, texture)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{IsValid, Volume};

    #[test]
    fn block_fills_bounds() {
        let mut ctx = BuildContext::default();
        let bounds =
            BoundingVolume::new(Point3::new(-32.0, 0.0, 0.0), Point3::new(32.0, 16.0, 8.0));
        let solid = MakeBlock::new(bounds).execute(&mut ctx, &TextureRef::new("t")).unwrap();
        assert_eq!(solid.faces.len(), 6);
        assert_eq!(solid.bounding_box.min, *bounds.start());
        assert_eq!(solid.bounding_box.max, *bounds.end());
        assert!((Volume::new(&solid).execute() - 8192.0).abs() < 1e-9);
        assert!(IsValid::new(&solid).execute());
    }

    #[test]
    fn corners_snap_to_grid() {
        let mut ctx = BuildContext::default();
        let bounds = BoundingVolume::new(Point3::new(0.4, 0.0, 0.0), Point3::new(9.6, 10.2, 4.0));
        let solid = MakeBlock::new(bounds).execute(&mut ctx, &TextureRef::new("t")).unwrap();
        assert_eq!(solid.bounding_box.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(solid.bounding_box.max, Point3::new(10.0, 10.0, 4.0));
    }

    #[test]
    fn flat_bounds_fail() {
        let mut ctx = BuildContext::default();
        let bounds = BoundingVolume::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 0.0));
        assert!(MakeBlock::new(bounds).execute(&mut ctx, &TextureRef::new("t")).is_err());
    }
}
