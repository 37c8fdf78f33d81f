use crate::geometry::BoundingVolume;
use crate::math::{GridPrecision, Point3, Vector3};

use super::sample::{index_f64, Ellipse};
use super::templates::{curved_segment, straight_segment, RampDirection, Ring, SegmentQuad};

/// Shape inputs of a ring of wall segments.
///
/// Angles are in degrees. `arc_degrees` may exceed 360, in which case the
/// ring winds over itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub sides: usize,
    pub wall_width: f64,
    pub arc_degrees: f64,
    pub start_degrees: f64,
    /// Total rise of the last segment over the first. Negative drops.
    pub height_delta: f64,
    pub curved: bool,
    /// Slope of the walking surface across the wall, in percent. Ignored
    /// unless `curved`.
    pub tilt_percent: f64,
}

impl RingSpec {
    /// A closed, flat ring starting on the +X axis.
    #[must_use]
    pub fn full_ring(sides: usize, wall_width: f64) -> Self {
        Self {
            sides,
            wall_width,
            arc_degrees: 360.0,
            start_degrees: 0.0,
            height_delta: 0.0,
            curved: false,
            tilt_percent: 0.0,
        }
    }
}

/// The outer and inner point rings of an arch, pipe or spiral ramp.
///
/// Both rings hold `sides + 1` grid-snapped points; segment `i` spans points
/// `i` and `i + 1`. For curved ramps the rise and tilt are already applied to
/// the ring heights; straight segments are lifted whole when emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchRings {
    outer: Vec<Point3>,
    inner: Vec<Point3>,
    height_step: f64,
    extrusion: Vector3,
    curved: bool,
}

impl ArchRings {
    /// Samples the rings of `spec` inside `bounds`.
    ///
    /// The outer ellipse touches the sides of `bounds`; the inner one is
    /// `wall_width` smaller on each axis. Both sit on the bottom of `bounds`.
    #[must_use]
    pub fn compute(spec: &RingSpec, bounds: &BoundingVolume, grid: GridPrecision) -> Self {
        let sides = spec.sides.max(1);
        let center = bounds.center();
        let base = Point3::new(center.x, center.y, bounds.start().z);

        let major_out = bounds.width() / 2.0;
        let minor_out = bounds.length() / 2.0;
        let outer_ellipse = Ellipse::new(base, major_out, minor_out);
        let inner_ellipse = Ellipse::new(
            base,
            major_out - spec.wall_width,
            minor_out - spec.wall_width,
        );

        let start = spec.start_degrees.to_radians();
        let step = spec.arc_degrees.to_radians() / index_f64(sides);
        let height_step = spec.height_delta / index_f64(sides);
        let tilt = (spec.tilt_percent / 100.0).atan();
        let tilt_height = spec.wall_width / 2.0 * tilt.tan();

        let mut outer = Vec::with_capacity(sides + 1);
        let mut inner = Vec::with_capacity(sides + 1);
        for i in 0..=sides {
            let angle = start + index_f64(i) * step;
            let (outer_dz, inner_dz) = if spec.curved {
                let rise = index_f64(i) * height_step;
                (rise + tilt_height, rise - tilt_height)
            } else {
                (0.0, 0.0)
            };
            outer.push(grid.round_point(&outer_ellipse.point_at(angle, outer_dz)));
            inner.push(grid.round_point(&inner_ellipse.point_at(angle, inner_dz)));
        }

        Self {
            outer,
            inner,
            height_step,
            extrusion: Vector3::new(0.0, 0.0, bounds.height()),
            curved: spec.curved,
        }
    }

    /// Number of segments.
    #[must_use]
    pub fn sides(&self) -> usize {
        self.outer.len().saturating_sub(1)
    }

    #[must_use]
    pub fn outer(&self) -> &[Point3] {
        &self.outer
    }

    #[must_use]
    pub fn inner(&self) -> &[Point3] {
        &self.inner
    }

    /// Height gained per segment.
    #[must_use]
    pub fn height_step(&self) -> f64 {
        self.height_step
    }

    #[must_use]
    pub fn direction(&self) -> RampDirection {
        RampDirection::from_step(self.height_step)
    }

    /// Base corners of segment `i`, before any straight-segment lift.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.sides()`.
    #[must_use]
    pub fn quad(&self, i: usize) -> SegmentQuad {
        SegmentQuad {
            outer0: self.outer[i],
            outer1: self.outer[i + 1],
            inner0: self.inner[i],
            inner1: self.inner[i + 1],
        }
    }

    /// Face rings of every solid, in emission order.
    ///
    /// Curved rings give two solids per segment, straight rings one.
    #[must_use]
    pub fn solids(&self) -> Vec<Vec<Ring>> {
        let per_segment = if self.curved { 2 } else { 1 };
        let mut solids = Vec::with_capacity(self.sides() * per_segment);
        for i in 0..self.sides() {
            let quad = self.quad(i);
            if self.curved {
                let [first, second] = curved_segment(&quad, &self.extrusion, self.direction());
                solids.push(first);
                solids.push(second);
            } else {
                let lift = Vector3::new(0.0, 0.0, index_f64(i) * self.height_step);
                solids.push(straight_segment(&quad.translated(&lift), &self.extrusion));
            }
        }
        solids
    }
}
