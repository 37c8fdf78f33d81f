use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::math::{Point3, Vector3};
use crate::operations::ring::templates::prism;
use crate::operations::ring::Ellipse;
use crate::topology::{Solid, TextureRef};

use super::{check_bounds, check_sides};

/// Creates an elliptical prism inscribed in a bounding volume.
///
/// The profile is a regular `sides`-gon stretched to the volume's width and
/// length, with its first corner on the +X side.
pub struct MakeCylinder {
    sides: usize,
    bounds: BoundingVolume,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(sides: usize, bounds: BoundingVolume) -> Self {
        Self { sides, bounds }
    }

    /// Executes the operation, returning one solid with `sides + 2` faces.
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
        let bottom = grid.round(self.bounds.start().z);
        let top = grid.round(self.bounds.end().z);

        let profile = Ellipse::new(
            Point3::new(center.x, center.y, bottom),
            self.bounds.width() / 2.0,
            self.bounds.length() / 2.0,
        );
        let base = profile.polygon(self.sides, grid);
        let rings = prism(&base, &Vector3::new(0.0, 0.0, top - bottom));
        ctx.make_solid(&rings, texture)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::{IsValid, Volume};
    use approx::assert_relative_eq;

    fn bounds() -> BoundingVolume {
        BoundingVolume::new(Point3::new(-100.0, -50.0, 0.0), Point3::new(100.0, 50.0, 64.0))
    }

    #[test]
    fn octagonal_cylinder() {
        let mut ctx = BuildContext::default();
        let solid = MakeCylinder::new(8, bounds())
            .execute(&mut ctx, &TextureRef::new("t"))
            .unwrap();
        assert_eq!(solid.faces.len(), 10);
        assert!(IsValid::new(&solid).execute());
        assert_eq!(solid.bounding_box.min.z, 0.0);
        assert_eq!(solid.bounding_box.max.z, 64.0);
    }

    #[test]
    fn diamond_volume() {
        let mut ctx = BuildContext::default();
        let solid = MakeCylinder::new(4, bounds())
            .execute(&mut ctx, &TextureRef::new("t"))
            .unwrap();
        // Rhombus with diagonals 200 and 100.
        assert_relative_eq!(Volume::new(&solid).execute(), 10_000.0 * 64.0, epsilon = 1e-6);
    }

    #[test]
    fn too_few_sides() {
        let mut ctx = BuildContext::default();
        let result = MakeCylinder::new(2, bounds()).execute(&mut ctx, &TextureRef::new("t"));
        assert!(result.is_err());
        assert_eq!(ctx.ids().peek_object_id().get(), 1);
    }
}
