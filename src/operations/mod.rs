pub mod assembly;
pub mod creation;
pub mod query;
pub mod ring;
