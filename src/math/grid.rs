use serde::{Deserialize, Serialize};

use super::Point3;

/// Number of decimal places map coordinates are snapped to.
///
/// Rounding uses ties-to-even so that `0.5` and `1.5` snap to `0` and `2`,
/// matching the map format's own coordinate writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridPrecision {
    decimals: u32,
}

impl GridPrecision {
    /// Snaps to whole units.
    pub const INTEGER: Self = Self { decimals: 0 };

    /// Creates a precision with the given number of decimal places.
    #[must_use]
    pub const fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    /// Returns the number of decimal places.
    #[must_use]
    pub const fn decimals(self) -> u32 {
        self.decimals
    }

    /// Rounds a scalar to this precision.
    #[must_use]
    pub fn round(self, value: f64) -> f64 {
        if self.decimals == 0 {
            return value.round_ties_even();
        }
        let scale = 10f64.powi(i32::try_from(self.decimals).unwrap_or(i32::MAX));
        let snapped = (value * scale).round_ties_even() / scale;
        if snapped.is_finite() {
            snapped
        } else {
            value
        }
    }

    /// Rounds every coordinate of a point to this precision.
    #[must_use]
    pub fn round_point(self, point: &Point3) -> Point3 {
        Point3::new(self.round(point.x), self.round(point.y), self.round(point.z))
    }
}

impl Default for GridPrecision {
    fn default() -> Self {
        Self::INTEGER
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn integer_rounding_ties_to_even() {
        let grid = GridPrecision::INTEGER;
        assert_eq!(grid.round(0.5), 0.0);
        assert_eq!(grid.round(1.5), 2.0);
        assert_eq!(grid.round(2.5), 2.0);
        assert_eq!(grid.round(-70.71), -71.0);
    }

    #[test]
    fn decimal_rounding() {
        let grid = GridPrecision::new(2);
        assert!((grid.round(70.710_678) - 70.71).abs() < 1e-12);
        assert!((grid.round(-0.004_9) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn rounding_is_idempotent() {
        let samples = [
            0.5, 1.5, -2.5, 70.710_678, -99.999_9, 1e-7, 123_456.789_1, 3.333_333,
        ];
        for decimals in [0, 1, 2, 3] {
            let grid = GridPrecision::new(decimals);
            for value in samples {
                let once = grid.round(value);
                assert_eq!(grid.round(once), once, "decimals={decimals} value={value}");
            }
        }
    }

    #[test]
    fn round_point_rounds_each_axis() {
        let p = GridPrecision::INTEGER.round_point(&Point3::new(0.4, 99.6, -3.5));
        assert_eq!(p, Point3::new(0.0, 100.0, -4.0));
    }
}
