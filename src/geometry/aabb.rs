use crate::math::Point3;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a box spanning two corners given in any order.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self::new(first, first), |acc, p| acc.expanded_to(p)))
    }

    /// Smallest box containing every box, or `None` for an empty input.
    #[must_use]
    pub fn union_all(boxes: impl IntoIterator<Item = Self>) -> Option<Self> {
        boxes.into_iter().reduce(|acc, b| acc.union(&b))
    }

    /// Returns the box grown to include `point`.
    #[must_use]
    pub fn expanded_to(&self, point: &Point3) -> Self {
        Self {
            min: self.min.inf(point),
            max: self.max.sup(point),
        }
    }

    /// Returns the smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn corners_in_any_order() {
        let aabb = Aabb::new(p(5.0, -1.0, 3.0), p(-2.0, 4.0, 0.0));
        assert_eq!(aabb.min, p(-2.0, -1.0, 0.0));
        assert_eq!(aabb.max, p(5.0, 4.0, 3.0));
    }

    #[test]
    fn from_points() {
        let pts = [p(1.0, 2.0, 3.0), p(-1.0, 5.0, 0.0), p(0.0, 0.0, 9.0)];
        let aabb = Aabb::from_points(&pts).unwrap();
        assert_eq!(aabb.min, p(-1.0, 0.0, 0.0));
        assert_eq!(aabb.max, p(1.0, 5.0, 9.0));
        assert!(Aabb::from_points(&[] as &[Point3]).is_none());
    }

    #[test]
    fn union_of_boxes() {
        let a = Aabb::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        let b = Aabb::new(p(2.0, -1.0, 0.5), p(3.0, 0.0, 4.0));
        let u = Aabb::union_all([a, b]).unwrap();
        assert_eq!(u.min, p(0.0, -1.0, 0.0));
        assert_eq!(u.max, p(3.0, 1.0, 4.0));
        assert!(u.contains(&p(2.5, 0.5, 3.0)));
        assert!(!u.contains(&p(2.5, 0.5, 4.5)));
    }
}
