use crate::error::{GeometryError, Result};
use crate::math::polygon_3d::is_collinear;
use crate::math::{Point3, Vector3, TOLERANCE};

/// An infinite plane in 3D space, stored as a unit normal and the signed
/// distance from the origin along it.
///
/// Built from three points taken in face winding order. Faces are wound
/// clockwise when viewed from outside the solid, so the normal is
/// `(p3 - p1) x (p2 - p1)` and points away from the solid's interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    distance: f64,
}

impl Plane {
    /// Creates a plane through three points given in winding order.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are collinear or coincident.
    pub fn from_points(p1: &Point3, p2: &Point3, p3: &Point3) -> Result<Self> {
        if is_collinear(p1, p2, p3, TOLERANCE) {
            return Err(GeometryError::Degenerate(format!(
                "plane points are collinear: {p1}, {p2}, {p3}"
            ))
            .into());
        }
        let normal = (p3 - p1).cross(&(p2 - p1)).normalize();
        Ok(Self {
            normal,
            distance: normal.dot(&p1.coords),
        })
    }

    /// Creates a plane from a normal and a point lying on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(point: &Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / len;
        Ok(Self {
            normal,
            distance: normal.dot(&point.coords),
        })
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the signed distance of the plane from the origin.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Signed distance from `point` to the plane; positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) - self.distance
    }

    /// Returns `true` if `point` lies on the plane within `tolerance`.
    #[must_use]
    pub fn contains(&self, point: &Point3, tolerance: f64) -> bool {
        self.signed_distance(point).abs() <= tolerance
    }

    /// Returns the world axis closest to the normal, ignoring sign.
    ///
    /// Ties prefer Z, then X, then Y.
    #[must_use]
    pub fn closest_axis_to_normal(&self) -> Vector3 {
        let n = self.normal.abs();
        if n.z >= n.x && n.z >= n.y {
            Vector3::z()
        } else if n.x >= n.y {
            Vector3::x()
        } else {
            Vector3::y()
        }
    }
}
