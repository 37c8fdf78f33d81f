//! The brush tools offered by the editor.
//!
//! Each brush owns a [`ParameterSet`] and turns it, together with the
//! volume the user dragged out, into solids. [`Brush::create`] never fails:
//! rejected parameters and degenerate geometry yield an empty sequence and a
//! log record.

mod arch;
mod block;
mod cone;
mod cylinder;
mod pipe;
mod wedge;

pub use arch::ArchBrush;
pub use block::BlockBrush;
pub use cone::ConeBrush;
pub use cylinder::CylinderBrush;
pub use pipe::PipeBrush;
pub use wedge::WedgeBrush;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{DEFAULT_SIDES, MAX_SIDES, MIN_SIDES};
use crate::context::BuildContext;
use crate::error::{BrushError, OperationError, ParameterError, Result};
use crate::geometry::BoundingVolume;
use crate::parameters::{Parameter, ParameterSet};
use crate::topology::{Solid, TextureRef};

/// A parametric solid generator.
pub trait Brush {
    /// Display name.
    fn name(&self) -> &'static str;

    fn parameters(&self) -> &ParameterSet;

    fn parameters_mut(&mut self) -> &mut ParameterSet;

    /// Builds the solids for `bounds`, or the first error met.
    ///
    /// Implementations validate their parameters before allocating any id.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is out of range or the geometry
    /// cannot be assembled.
    fn try_create(
        &self,
        ctx: &mut BuildContext,
        bounds: &BoundingVolume,
        texture: &TextureRef,
    ) -> Result<Vec<Solid>>;

    /// Builds the solids for `bounds`, or nothing if the inputs are invalid.
    fn create(
        &self,
        ctx: &mut BuildContext,
        bounds: &BoundingVolume,
        texture: &TextureRef,
    ) -> Vec<Solid> {
        let first_id = ctx.ids().peek_object_id();
        match self.try_create(ctx, bounds, texture) {
            Ok(solids) => {
                debug!(
                    brush = self.name(),
                    solids = solids.len(),
                    first_id = %first_id,
                    next_id = %ctx.ids().peek_object_id(),
                    "created brush"
                );
                solids
            }
            Err(
                err @ (BrushError::Parameter(_)
                | BrushError::Operation(OperationError::InvalidInput(_))),
            ) => {
                debug!(brush = self.name(), error = %err, "rejected brush parameters");
                Vec::new()
            }
            Err(err) => {
                warn!(brush = self.name(), error = %err, "brush geometry could not be assembled");
                Vec::new()
            }
        }
    }
}

/// The brush menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrushKind {
    Block,
    Wedge,
    Cylinder,
    Cone,
    Pipe,
    Arch,
}

impl BrushKind {
    /// Every brush, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Block,
        Self::Wedge,
        Self::Cylinder,
        Self::Cone,
        Self::Pipe,
        Self::Arch,
    ];

    /// A fresh brush of this kind with default parameters.
    #[must_use]
    pub fn build(self) -> Box<dyn Brush> {
        match self {
            Self::Block => Box::new(BlockBrush::new()),
            Self::Wedge => Box::new(WedgeBrush::new()),
            Self::Cylinder => Box::new(CylinderBrush::new()),
            Self::Cone => Box::new(ConeBrush::new()),
            Self::Pipe => Box::new(PipeBrush::new()),
            Self::Arch => Box::new(ArchBrush::new()),
        }
    }
}

const SIDES: &str = "sides";
const WALL_WIDTH: &str = "wall_width";

fn sides_parameter() -> Parameter {
    Parameter::numeric(SIDES, "Num. sides", MIN_SIDES, MAX_SIDES, DEFAULT_SIDES)
}

/// Reads the side count, truncating any fraction.
fn side_count(parameters: &ParameterSet) -> std::result::Result<usize, ParameterError> {
    let sides = parameters.numeric(SIDES)?;
    if !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
        return Err(ParameterError::OutOfRange {
            key: SIDES,
            value: sides,
            min: MIN_SIDES,
            max: MAX_SIDES,
        });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = sides as usize;
    Ok(count)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use crate::config::BrushConfig;
    use crate::math::Point3;
    use crate::operations::query::IsValid;

    /// Routes `tracing` output to the test harness.
    pub(crate) fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    pub(crate) fn seeded_context() -> BuildContext {
        BuildContext::new(&BrushConfig {
            color_seed: Some(42),
            ..BrushConfig::default()
        })
    }

    pub(crate) fn volume() -> BoundingVolume {
        BoundingVolume::new(Point3::new(-100.0, -100.0, 0.0), Point3::new(100.0, 100.0, 100.0))
    }

    /// Every face of every solid faces away from the solid's centroid.
    pub(crate) fn assert_outward(solids: &[Solid]) {
        for solid in solids {
            let center = solid.centroid();
            for face in &solid.faces {
                let corners: Vec<Point3> = face.points().copied().collect();
                let face_center = crate::math::polygon_3d::centroid(&corners).unwrap();
                assert!(
                    face.plane.normal().dot(&(face_center - center)) > 0.0,
                    "{} of {} faces inward",
                    face.id,
                    solid.id
                );
            }
            assert!(IsValid::new(solid).execute(), "{} is not a valid solid", solid.id);
        }
    }

    #[test]
    fn every_kind_builds_valid_solids() {
        init_tracing();
        let mut ctx = seeded_context();
        let texture = TextureRef::new("AAATRIGGER");
        for kind in BrushKind::ALL {
            let brush = kind.build();
            let solids = brush.create(&mut ctx, &volume(), &texture);
            assert!(!solids.is_empty(), "{} built nothing", brush.name());
            assert_outward(&solids);
            for solid in &solids {
                assert!(solid.faces.iter().all(|f| f.texture.texture == texture));
            }
        }
    }

    #[test]
    fn ids_keep_increasing_across_brushes() {
        let mut ctx = seeded_context();
        let texture = TextureRef::new("t");
        let mut last = 0;
        for kind in BrushKind::ALL {
            for solid in kind.build().create(&mut ctx, &volume(), &texture) {
                assert!(solid.id.get() > last);
                last = solid.id.get();
            }
        }
    }

    #[test]
    fn flat_volume_builds_nothing() {
        init_tracing();
        let mut ctx = seeded_context();
        let flat = BoundingVolume::new(Point3::new(0.0, 0.0, 0.0), Point3::new(64.0, 64.0, 0.0));
        for kind in BrushKind::ALL {
            assert!(kind.build().create(&mut ctx, &flat, &TextureRef::new("t")).is_empty());
        }
        assert_eq!(ctx.ids().peek_object_id().get(), 1);
    }

    #[test]
    fn fractional_sides_truncate() {
        let mut params = ParameterSet::new(vec![sides_parameter()]);
        params.set(SIDES, 7.9).unwrap();
        assert_eq!(side_count(&params).unwrap(), 7);
        params.set(SIDES, 65).unwrap();
        assert!(side_count(&params).is_err());
    }

    #[test]
    fn menu_serializes_as_snake_case() {
        let json = serde_json::to_value(BrushKind::ALL).unwrap();
        assert_eq!(json[5], "arch");
    }
}
