pub mod aabb;
pub mod bounding_volume;
pub mod plane;

pub use aabb::Aabb;
pub use bounding_volume::BoundingVolume;
pub use plane::Plane;
