use crate::config::{MAX_TILT_PERCENT, MIN_ARC, MIN_WALL_WIDTH};
use crate::context::BuildContext;
use crate::error::Result;
use crate::geometry::BoundingVolume;
use crate::operations::ring::{index_f64, ArchRings, RingSpec};
use crate::topology::{Solid, TextureRef};

use super::{check_bounds, check_sides, invalid};

/// A segment spanning half a turn or more has its outer edge on the far side
/// of the centre, which reverses its winding.
const MAX_SEGMENT_DEGREES: f64 = 180.0;

/// Creates the wall segments of an arch, pipe or spiral ramp.
///
/// Straight rings give one six-face solid per segment. Curved rings give two
/// five-face solids per segment, split along the diagonal that keeps both
/// halves planar.
pub struct MakeArch {
    spec: RingSpec,
    bounds: BoundingVolume,
}

impl MakeArch {
    /// Creates a new `MakeArch` operation.
    #[must_use]
    pub fn new(spec: RingSpec, bounds: BoundingVolume) -> Self {
        Self { spec, bounds }
    }

    /// Executes the operation, returning every segment solid in ring order.
    ///
    /// Nothing is allocated unless the whole arch assembles.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::OperationError::InvalidInput`] if the shape
    /// inputs are out of bounds, or an assembly error if a segment
    /// collapses on the grid.
    pub fn execute(&self, ctx: &mut BuildContext, texture: &TextureRef) -> Result<Vec<Solid>> {
        self.check()?;
        let rings = ArchRings::compute(&self.spec, &self.bounds, ctx.grid());
        ctx.make_solids(&rings.solids(), texture)
    }

    fn check(&self) -> Result<()> {
        let spec = &self.spec;
        check_sides(spec.sides)?;
        check_bounds(&self.bounds)?;

        let numbers = [
            spec.wall_width,
            spec.arc_degrees,
            spec.start_degrees,
            spec.height_delta,
            spec.tilt_percent,
        ];
        if numbers.iter().any(|n| !n.is_finite()) {
            return Err(invalid("arch inputs must be finite".into()));
        }
        if spec.wall_width < MIN_WALL_WIDTH {
            return Err(invalid(format!(
                "wall width {} is below {MIN_WALL_WIDTH}",
                spec.wall_width
            )));
        }
        let cross_section = self.bounds.width().min(self.bounds.length());
        if spec.wall_width * 2.0 >= cross_section {
            return Err(invalid(format!(
                "wall width {} leaves no opening in a {cross_section} wide volume",
                spec.wall_width
            )));
        }
        if spec.arc_degrees < MIN_ARC {
            return Err(invalid(format!("arc {} is below {MIN_ARC}", spec.arc_degrees)));
        }
        let segment_degrees = spec.arc_degrees / index_f64(spec.sides);
        if segment_degrees >= MAX_SEGMENT_DEGREES {
            return Err(invalid(format!(
                "{segment_degrees} degree segments turn inside out; \
                 need under {MAX_SEGMENT_DEGREES}"
            )));
        }
        if !(0.0..360.0).contains(&spec.start_degrees) {
            return Err(invalid(format!(
                "start angle {} is outside [0, 360)",
                spec.start_degrees
            )));
        }
        if spec.curved && spec.tilt_percent.abs() > MAX_TILT_PERCENT {
            return Err(invalid(format!(
                "tilt {}% is outside [-{MAX_TILT_PERCENT}, {MAX_TILT_PERCENT}]",
                spec.tilt_percent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{BrushError, OperationError};
    use crate::math::Point3;
    use crate::operations::query::{IsValid, Volume};
    use approx::assert_relative_eq;

    fn bounds() -> BoundingVolume {
        BoundingVolume::new(Point3::new(-100.0, -100.0, 0.0), Point3::new(100.0, 100.0, 100.0))
    }

    fn build(spec: RingSpec) -> Result<Vec<Solid>> {
        let mut ctx = BuildContext::default();
        MakeArch::new(spec, bounds()).execute(&mut ctx, &TextureRef::new("t"))
    }

    fn total_volume(solids: &[Solid]) -> f64 {
        solids.iter().map(|s| Volume::new(s).execute()).sum()
    }

    #[test]
    fn four_straight_segments() {
        let solids = build(RingSpec::full_ring(4, 16.0)).unwrap();
        assert_eq!(solids.len(), 4);
        for solid in &solids {
            assert_eq!(solid.faces.len(), 6);
            assert!(IsValid::new(solid).execute());
        }
    }

    #[test]
    fn curved_ramp_doubles_solids() {
        let spec = RingSpec {
            height_delta: 64.0,
            curved: true,
            tilt_percent: 25.0,
            ..RingSpec::full_ring(8, 16.0)
        };
        let solids = build(spec).unwrap();
        assert_eq!(solids.len(), 16);
        assert!(solids.iter().all(|s| s.faces.len() == 5));
        assert!(solids.iter().all(|s| IsValid::new(s).execute()));
    }

    #[test]
    fn mirrored_ramps_enclose_equal_volume() {
        let rising = RingSpec {
            height_delta: 64.0,
            curved: true,
            ..RingSpec::full_ring(4, 16.0)
        };
        let falling = RingSpec {
            height_delta: -64.0,
            ..rising
        };
        let up = build(rising).unwrap();
        let down = build(falling).unwrap();
        assert_eq!(up.len(), down.len());
        assert_relative_eq!(total_volume(&up), total_volume(&down), epsilon = 1e-6);
        assert_relative_eq!(total_volume(&up), 588_800.0, epsilon = 1e-6);
    }

    #[test]
    fn rejects_bad_inputs() {
        let base = RingSpec::full_ring(8, 16.0);
        let cases = [
            RingSpec { sides: 2, ..base },
            RingSpec { wall_width: 0.5, ..base },
            RingSpec { wall_width: 100.0, ..base },
            RingSpec { arc_degrees: 0.5, ..base },
            RingSpec { start_degrees: 360.0, ..base },
            RingSpec { start_degrees: -1.0, ..base },
            RingSpec { curved: true, tilt_percent: 201.0, ..base },
            RingSpec { height_delta: f64::NAN, ..base },
        ];
        for spec in cases {
            assert!(build(spec).is_err(), "{spec:?} was accepted");
        }
    }

    #[test]
    fn half_turn_segments_are_rejected() {
        let cases = [
            RingSpec {
                arc_degrees: 600.0,
                ..RingSpec::full_ring(3, 16.0)
            },
            RingSpec {
                arc_degrees: 1440.0,
                ..RingSpec::full_ring(8, 16.0)
            },
            RingSpec {
                arc_degrees: 1440.0,
                height_delta: -512.0,
                ..RingSpec::full_ring(5, 16.0)
            },
        ];
        for spec in cases {
            let err = build(spec).unwrap_err();
            assert!(err.to_string().contains("inside out"), "{err}");
        }
        let wide = RingSpec {
            arc_degrees: 510.0,
            ..RingSpec::full_ring(3, 16.0)
        };
        assert_eq!(build(wide).unwrap().len(), 3);
    }

    #[test]
    fn double_wound_ring() {
        let spec = RingSpec {
            arc_degrees: 720.0,
            ..RingSpec::full_ring(8, 16.0)
        };
        let solids = build(spec).unwrap();
        assert_eq!(solids.len(), 8);
        assert!(solids.iter().all(|s| IsValid::new(s).execute()));
        // The second lap retraces the first.
        for (first, second) in solids[..4].iter().zip(&solids[4..]) {
            let first: Vec<_> = first.points().collect();
            let second: Vec<_> = second.points().collect();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn grid_slivers_never_escape() {
        let bounds =
            BoundingVolume::new(Point3::new(0.0, 0.0, 0.0), Point3::new(330.0, 122.0, 100.0));
        let spec = RingSpec {
            start_degrees: 37.0,
            curved: true,
            ..RingSpec::full_ring(3, 16.0)
        };
        let mut ctx = BuildContext::default();
        match MakeArch::new(spec, bounds).execute(&mut ctx, &TextureRef::new("t")) {
            Ok(solids) => assert!(solids.iter().all(|s| IsValid::new(s).execute())),
            Err(err) => {
                let rejected =
                    matches!(err, BrushError::Operation(OperationError::InvalidInput(_)));
                assert!(!rejected, "{err}");
                assert_eq!(ctx.ids().peek_object_id().get(), 1);
            }
        }
    }

    #[test]
    fn tilt_is_free_without_curve() {
        let spec = RingSpec {
            tilt_percent: 500.0,
            ..RingSpec::full_ring(4, 16.0)
        };
        assert_eq!(build(spec).unwrap().len(), 4);
    }

    #[test]
    fn failed_build_allocates_nothing() {
        let mut ctx = BuildContext::default();
        let spec = RingSpec { sides: 1, ..RingSpec::full_ring(4, 16.0) };
        assert!(MakeArch::new(spec, bounds()).execute(&mut ctx, &TextureRef::new("t")).is_err());
        assert_eq!(ctx.ids().peek_object_id().get(), 1);
        assert_eq!(ctx.ids().peek_face_id().get(), 1);
    }
}
