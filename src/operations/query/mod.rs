mod is_valid;
mod volume;

pub use is_valid::IsValid;
pub use volume::Volume;
