use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::math::Point3;
use crate::operations::ring::templates::pyramid;
use crate::operations::ring::Ellipse;
use crate::topology::{Solid, TextureRef};

use super::{check_bounds, check_sides};

/// Creates an elliptical pyramid standing on the bottom of a bounding volume
/// with its apex at the centre of the top.
pub struct MakeCone {
    sides: usize,
    bounds: BoundingVolume,
}

impl MakeCone {
    /// Creates a new `MakeCone` operation.
    #[must_use]
    pub fn new(sides: usize, bounds: BoundingVolume) -> Self {
        Self { sides, bounds }
    }

    /// Executes the operation, returning one solid with `sides + 1` faces.
    ///
    /// # Errors
    ///
    /// Returns an error if `sides < 3`, the volume is flat, or the profile
    /// collapses on the grid.
    pub fn execute(&self, ctx: &mut BuildContext, texture: &TextureRef) -> Result<Solid> {
        check_sides(self.sides)?;
        check_bounds(&self.bounds)?;
        let grid = ctx.grid();
        let center = self.bounds.center();

        let profile = Ellipse::new(
            Point3::new(center.x, center.y, grid.round(self.bounds.start().z)),
            self.bounds.width() / 2.0,
            self.bounds.length() / 2.0,
        );
        let base = profile.polygon(self.sides, grid);
        let apex = grid.round_point(&Point3::new(center.x, center.y, self.bounds.end().z));
        ctx.make_solid(&pyramid(&base, &apex), texture)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{IsValid, Volume};
    use approx::assert_relative_eq;

    #[test]
    fn square_cone_volume() {
        let mut ctx = BuildContext::default();
        let bounds =
            BoundingVolume::new(Point3::new(-64.0, -64.0, 0.0), Point3::new(64.0, 64.0, 96.0));
        let solid = MakeCone::new(4, bounds)
            .execute(&mut ctx, &TextureRef::new("t"))
            .unwrap();
        assert_eq!(solid.faces.len(), 5);
        assert!(IsValid::new(&solid).execute());
        // Base is a square with diagonals of 128.
        assert_relative_eq!(Volume::new(&solid).execute(), 8192.0 * 96.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn apex_sits_on_top_centre() {
        let mut ctx = BuildContext::default();
        let bounds = BoundingVolume::new(Point3::new(0.0, 0.0, 0.0), Point3::new(64.0, 32.0, 48.0));
        let solid = MakeCone::new(12, bounds)
            .execute(&mut ctx, &TextureRef::new("t"))
            .unwrap();
        assert_eq!(solid.faces.len(), 13);
        let apex = Point3::new(32.0, 16.0, 48.0);
        assert!(solid.points().any(|p| *p == apex));
        assert!(IsValid::new(&solid).execute());
    }
}
