use std::sync::Arc;

use crate::geometry::Plane;
use crate::math::{Point3, Vector3};

/// Opaque handle to a texture owned by the texture provider.
///
/// Brushes store it on every face they create but never look inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureRef(Arc<str>);

impl TextureRef {
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The name the provider knows the texture by.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Texture reference plus its projection onto a face.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureAlignment {
    pub texture: TextureRef,
    pub u_axis: Vector3,
    pub v_axis: Vector3,
    pub shift_u: f64,
    pub shift_v: f64,
    pub scale_u: f64,
    pub scale_v: f64,
    /// Rotation in degrees around the face normal.
    pub rotation: f64,
}

impl TextureAlignment {
    /// Creates an alignment with default shift, scale and rotation and
    /// axes projected from the world axis closest to `plane`'s normal.
    #[must_use]
    pub fn world_aligned(texture: TextureRef, plane: &Plane) -> Self {
        let mut alignment = Self {
            texture,
            u_axis: Vector3::x(),
            v_axis: -Vector3::z(),
            shift_u: 0.0,
            shift_v: 0.0,
            scale_u: 1.0,
            scale_v: 1.0,
            rotation: 0.0,
        };
        alignment.align_to_world(plane);
        alignment
    }

    /// Resets the axes to a world-aligned projection for `plane`.
    ///
    /// Faces closest to the X axis project onto YZ, faces closest to Y onto
    /// XZ and floors/ceilings onto XY. Shift and scale are kept.
    pub fn align_to_world(&mut self, plane: &Plane) {
        let axis = plane.closest_axis_to_normal();
        self.u_axis = if axis == Vector3::x() {
            Vector3::y()
        } else {
            Vector3::x()
        };
        self.v_axis = if axis == Vector3::z() {
            -Vector3::y()
        } else {
            -Vector3::z()
        };
        self.rotation = 0.0;
    }

    /// Texture-space coordinates of `point`, in texels.
    #[must_use]
    pub fn project(&self, point: &Point3) -> (f64, f64) {
        let u = point.coords.dot(&self.u_axis) / self.scale_u + self.shift_u;
        let v = point.coords.dot(&self.v_axis) / self.scale_v + self.shift_v;
        (u, v)
    }
}
