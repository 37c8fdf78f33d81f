use crate::math::polygon_3d::polygon_area_3d;
use crate::topology::Solid;

/// Computes the volume enclosed by a solid's planar faces.
///
/// Uses the divergence theorem: for each face, `area * (n . p0) / 3`, with
/// `n` the face plane's normal and `p0` any point on the face. The sum is
/// positive when every normal points outward and negative when the solid
/// is wound inside out.
pub struct Volume<'a> {
    solid: &'a Solid,
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Signed volume; negative if the faces are wound inward.
    #[must_use]
    pub fn signed(&self) -> f64 {
        self.solid
            .faces
            .iter()
            .filter_map(|face| {
                let normal = face.plane.normal();
                let points: Vec<_> = face.points().copied().collect();
                let first = points.first()?;
                Some(polygon_area_3d(&points, normal) * normal.dot(&first.coords) / 3.0)
            })
            .sum()
    }

    /// Executes the query, returning the volume (absolute value).
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.signed().abs()
    }
}
