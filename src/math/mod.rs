pub mod grid;
pub mod polygon_3d;

pub use grid::GridPrecision;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Tolerance used when comparing snapped map coordinates.
///
/// Coordinates are rounded to the grid before faces are built, so anything
/// beyond a few decimal places is noise from the plane arithmetic.
pub const COORD_TOLERANCE: f64 = 1e-6;
