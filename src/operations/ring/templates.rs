//! Face-emission templates.
//!
//! Every template returns one point ring per face, wound clockwise when
//! viewed from outside so that [`crate::geometry::Plane::from_points`]
//! yields outward normals. Base rings are expected counter-clockwise when
//! viewed from above.

use crate::math::{Point3, Vector3};

/// The points of one face, in winding order.
pub type Ring = Vec<Point3>;

/// The four base corners of one arch segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentQuad {
    pub outer0: Point3,
    pub outer1: Point3,
    pub inner0: Point3,
    pub inner1: Point3,
}

impl SegmentQuad {
    /// The quad moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            outer0: self.outer0 + offset,
            outer1: self.outer1 + offset,
            inner0: self.inner0 + offset,
            inner1: self.inner1 + offset,
        }
    }
}

/// Which way a curved ramp climbs as the segment index grows.
///
/// Decides the diagonal each segment is split along: rising ramps split
/// `outer1`-`inner0`, falling ramps `outer0`-`inner1`. Using the other
/// diagonal leaves the halves wound inside out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampDirection {
    Rising,
    Falling,
}

impl RampDirection {
    /// Zero counts as rising.
    #[must_use]
    pub fn from_step(height_step: f64) -> Self {
        if height_step >= 0.0 {
            Self::Rising
        } else {
            Self::Falling
        }
    }
}

/// Six faces of a straight (uncurved) segment extruded by `up`.
#[must_use]
pub fn straight_segment(q: &SegmentQuad, up: &Vector3) -> Vec<Ring> {
    let SegmentQuad {
        outer0: o0,
        outer1: o1,
        inner0: i0,
        inner1: i1,
    } = *q;
    let u = |p: Point3| p + up;
    vec![
        vec![o0, u(o0), u(o1), o1],
        vec![i1, u(i1), u(i0), i0],
        vec![o1, u(o1), u(i1), i1],
        vec![i0, u(i0), u(o0), o0],
        vec![u(i1), u(o1), u(o0), u(i0)],
        vec![i0, o0, o1, i1],
    ]
}

/// The two five-face halves of a curved segment extruded by `up`.
///
/// The base quad of a curved segment is generally not planar, so it is cut
/// into two triangles along the diagonal chosen by `direction`.
#[must_use]
pub fn curved_segment(q: &SegmentQuad, up: &Vector3, direction: RampDirection) -> [Vec<Ring>; 2] {
    let SegmentQuad {
        outer0: o0,
        outer1: o1,
        inner0: i0,
        inner1: i1,
    } = *q;
    let u = |p: Point3| p + up;
    match direction {
        RampDirection::Rising => [
            vec![
                vec![o0, u(o0), u(o1), o1],
                vec![o1, u(o1), u(i0), i0],
                vec![i0, u(i0), u(o0), o0],
                vec![u(o0), u(i0), u(o1)],
                vec![o1, i0, o0],
            ],
            vec![
                vec![i1, u(i1), u(i0), i0],
                vec![i0, u(i0), u(o1), o1],
                vec![o1, u(o1), u(i1), i1],
                vec![u(i1), u(o1), u(i0)],
                vec![i0, o1, i1],
            ],
        ],
        RampDirection::Falling => [
            vec![
                vec![i1, u(i1), u(i0), i0],
                vec![o0, u(o0), u(i1), i1],
                vec![i0, u(i0), u(o0), o0],
                vec![u(i1), u(o0), u(i0)],
                vec![i0, o0, i1],
            ],
            vec![
                vec![o0, u(o0), u(o1), o1],
                vec![i1, u(i1), u(o0), o0],
                vec![o1, u(o1), u(i1), i1],
                vec![u(o0), u(i1), u(o1)],
                vec![o1, i1, o0],
            ],
        ],
    }
}

/// A prism over `base`, extruded by `up`: bottom, top, then one side per edge.
#[must_use]
pub fn prism(base: &[Point3], up: &Vector3) -> Vec<Ring> {
    let n = base.len();
    let mut faces = Vec::with_capacity(n + 2);
    faces.push(base.to_vec());
    faces.push(base.iter().rev().map(|p| p + up).collect());
    for i in 0..n {
        let a = base[i];
        let b = base[(i + 1) % n];
        faces.push(vec![a, a + up, b + up, b]);
    }
    faces
}

/// A pyramid over `base` with its tip at `apex`: base, then one side per edge.
#[must_use]
pub fn pyramid(base: &[Point3], apex: &Point3) -> Vec<Ring> {
    let n = base.len();
    let mut faces = Vec::with_capacity(n + 1);
    faces.push(base.to_vec());
    for i in 0..n {
        faces.push(vec![base[i], *apex, base[(i + 1) % n]]);
    }
    faces
}

/// A ramp over the box `min`-`max`, climbing from the bottom edge at
/// `min.y` to the top edge at `max.y`.
#[must_use]
pub fn wedge(min: &Point3, max: &Point3) -> Vec<Ring> {
    let b0 = Point3::new(min.x, min.y, min.z);
    let b1 = Point3::new(max.x, min.y, min.z);
    let b2 = Point3::new(max.x, max.y, min.z);
    let b3 = Point3::new(min.x, max.y, min.z);
    let t2 = Point3::new(max.x, max.y, max.z);
    let t3 = Point3::new(min.x, max.y, max.z);
    vec![
        vec![b0, b1, b2, b3],
        vec![b2, t2, t3, b3],
        vec![b0, t3, t2, b1],
        vec![b0, b3, t3],
        vec![b1, t2, b2],
    ]
}
