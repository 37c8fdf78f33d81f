pub mod color;
pub mod face;
pub mod ids;
pub mod solid;
pub mod texture;
pub mod vertex;

pub use color::{Color, Palette};
pub use face::Face;
pub use ids::{FaceId, IdAllocator, ObjectId};
pub use solid::{Solid, MIN_SOLID_FACES};
pub use texture::{TextureAlignment, TextureRef};
pub use vertex::Vertex;
