use crate::config::BrushConfig;
use crate::error::Result;
use crate::math::GridPrecision;
use crate::operations::assembly::MakeSolid;
use crate::operations::query::IsValid;
use crate::operations::ring::Ring;
use crate::topology::{Color, IdAllocator, Palette, Solid, TextureRef};

/// Per-session state threaded through every generation call.
///
/// Owns the session's [`IdAllocator`], the colour [`Palette`] and the grid
/// precision generated coordinates snap to. Generation is serialized per
/// session, so the context is passed by `&mut` and never shared.
#[derive(Debug, Clone)]
pub struct BuildContext {
    ids: IdAllocator,
    palette: Palette,
    grid: GridPrecision,
}

impl BuildContext {
    /// Creates a context with a fresh allocator.
    #[must_use]
    pub fn new(config: &BrushConfig) -> Self {
        Self::with_ids(config, IdAllocator::new())
    }

    /// Creates a context continuing from an existing allocator.
    #[must_use]
    pub fn with_ids(config: &BrushConfig, ids: IdAllocator) -> Self {
        let palette = config
            .color_seed
            .map_or_else(Palette::from_entropy, Palette::seeded);
        Self {
            ids,
            palette,
            grid: config.grid(),
        }
    }

    #[must_use]
    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    /// Hands the allocator back, e.g. when the session ends.
    #[must_use]
    pub fn into_ids(self) -> IdAllocator {
        self.ids
    }

    #[must_use]
    pub fn grid(&self) -> GridPrecision {
        self.grid
    }

    pub fn next_color(&mut self) -> Color {
        self.palette.next_color()
    }

    /// Assembles one solid with its own colour from wound face rings.
    ///
    /// The solid must pass [`IsValid`]. Nothing is allocated if assembly
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns an error if a ring is degenerate (see [`MakeSolid::execute`])
    /// or the assembled solid is open or inside out.
    pub fn make_solid(&mut self, rings: &[Ring], texture: &TextureRef) -> Result<Solid> {
        let mut scratch = self.clone();
        let solid = scratch.assemble(rings, texture)?;
        *self = scratch;
        Ok(solid)
    }

    /// Assembles every solid, or none if any of them fails.
    ///
    /// # Errors
    ///
    /// Returns the first assembly or validation error.
    pub fn make_solids(
        &mut self,
        solids: &[Vec<Ring>],
        texture: &TextureRef,
    ) -> Result<Vec<Solid>> {
        let mut scratch = self.clone();
        let built = solids
            .iter()
            .map(|rings| scratch.assemble(rings, texture))
            .collect::<Result<Vec<_>>>()?;
        *self = scratch;
        Ok(built)
    }

    fn assemble(&mut self, rings: &[Ring], texture: &TextureRef) -> Result<Solid> {
        let color = self.next_color();
        let solid = MakeSolid::new(rings, texture, color).execute(&mut self.ids)?;
        IsValid::new(&solid).check()?;
        Ok(solid)
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new(&BrushConfig::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::ring::templates::prism;

    fn cube() -> Vec<Ring> {
        let base = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 4.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ];
        prism(&base, &Vector3::new(0.0, 0.0, 4.0))
    }

    #[test]
    fn config_drives_grid_and_colours() {
        let config = BrushConfig {
            grid_decimals: 3,
            color_seed: Some(5),
        };
        let mut a = BuildContext::new(&config);
        let mut b = BuildContext::new(&config);
        assert_eq!(a.grid().decimals(), 3);
        assert_eq!(a.next_color(), b.next_color());
    }

    #[test]
    fn each_solid_gets_its_own_colour() {
        let config = BrushConfig {
            color_seed: Some(1),
            ..BrushConfig::default()
        };
        let mut ctx = BuildContext::new(&config);
        let texture = TextureRef::new("t");
        let solids = ctx.make_solids(&[cube(), cube()], &texture).unwrap();
        assert_eq!(solids.len(), 2);
        assert_ne!(solids[0].color, solids[1].color);
        assert!(solids[1].id > solids[0].id);
    }

    #[test]
    fn failed_assembly_allocates_nothing() {
        let mut ctx = BuildContext::default();
        let texture = TextureRef::new("t");
        let mut broken = cube();
        broken[3] = vec![Point3::origin(); 4];
        assert!(ctx.make_solids(&[cube(), broken], &texture).is_err());
        assert_eq!(ctx.ids().peek_object_id().get(), 1);
        assert_eq!(ctx.ids().peek_face_id().get(), 1);
    }

    #[test]
    fn inside_out_solid_is_rejected() {
        let mut ctx = BuildContext::default();
        let texture = TextureRef::new("t");
        let inverted: Vec<Ring> = cube()
            .into_iter()
            .map(|ring| ring.into_iter().rev().collect())
            .collect();
        let err = ctx.make_solids(&[cube(), inverted], &texture).unwrap_err();
        assert!(err.to_string().contains("non-positive volume"), "{err}");
        assert_eq!(ctx.ids().peek_object_id().get(), 1);
        assert_eq!(ctx.ids().peek_face_id().get(), 1);
    }

    #[test]
    fn continues_existing_allocator() {
        let ctx = BuildContext::with_ids(&BrushConfig::default(), IdAllocator::starting_at(7, 70));
        assert_eq!(ctx.ids().peek_object_id().get(), 7);
        assert_eq!(ctx.into_ids().peek_face_id().get(), 70);
    }
}
