//! Profile rings and the face templates that turn them into solids.

mod arch;
mod sample;
pub mod templates;

pub use arch::{ArchRings, RingSpec};
pub use sample::Ellipse;
pub use templates::{RampDirection, Ring, SegmentQuad};

pub(crate) use sample::index_f64;
