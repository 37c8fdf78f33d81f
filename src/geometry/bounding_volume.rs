use crate::math::{Point3, Vector3};

/// The axis-aligned volume a brush is drawn into.
///
/// `width`, `length` and `height` are the extents along X, Y and Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    start: Point3,
    end: Point3,
}

impl BoundingVolume {
    /// Creates a volume spanning two opposite corners given in any order.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self {
            start: a.inf(&b),
            end: a.sup(&b),
        }
    }

    /// Minimum corner.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Maximum corner.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.start, &self.end)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.end.y - self.start.y
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.end.z - self.start.z
    }

    /// Extent vector `(width, length, height)`.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        self.end - self.start
    }

    /// Returns `true` if any extent is zero.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.extents().iter().any(|e| *e <= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_scalars() {
        let volume = BoundingVolume::new(
            Point3::new(100.0, 50.0, 64.0),
            Point3::new(-100.0, -50.0, 0.0),
        );
        assert_eq!(*volume.start(), Point3::new(-100.0, -50.0, 0.0));
        assert_eq!(*volume.end(), Point3::new(100.0, 50.0, 64.0));
        assert_eq!(volume.center(), Point3::new(0.0, 0.0, 32.0));
        assert_eq!(volume.width(), 200.0);
        assert_eq!(volume.length(), 100.0);
        assert_eq!(volume.height(), 64.0);
        assert!(!volume.is_flat());
    }

    #[test]
    fn zero_height_is_flat() {
        let volume = BoundingVolume::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 0.0));
        assert!(volume.is_flat());
    }
}
