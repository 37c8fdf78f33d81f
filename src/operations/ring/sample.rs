use crate::math::{GridPrecision, Point3};

/// An axis-aligned ellipse in a horizontal plane.
///
/// `P(a) = center + (radius_x * cos(a), radius_y * sin(a), 0)`; angles grow
/// counter-clockwise when viewed from above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point3,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    #[must_use]
    pub fn new(center: Point3, radius_x: f64, radius_y: f64) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
        }
    }

    /// The unrounded point at `angle` radians, lifted by `dz`.
    #[must_use]
    pub fn point_at(&self, angle: f64, dz: f64) -> Point3 {
        Point3::new(
            self.center.x + self.radius_x * angle.cos(),
            self.center.y + self.radius_y * angle.sin(),
            self.center.z + dz,
        )
    }

    /// `count` grid-snapped points starting at `start` radians, `step`
    /// radians apart.
    #[must_use]
    pub fn sample(&self, start: f64, step: f64, count: usize, grid: GridPrecision) -> Vec<Point3> {
        (0..count)
            .map(|i| grid.round_point(&self.point_at(start + index_f64(i) * step, 0.0)))
            .collect()
    }

    /// A closed ring of `sides` grid-snapped points covering the full turn,
    /// starting on the +X axis.
    #[must_use]
    pub fn polygon(&self, sides: usize, grid: GridPrecision) -> Vec<Point3> {
        self.sample(0.0, std::f64::consts::TAU / index_f64(sides), sides, grid)
    }
}

/// Converts a small segment index to `f64`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn index_f64(i: usize) -> f64 {
    i as f64
}
