//! Parametric brush generation for CSG map editors.
//!
//! A [`brushes::Brush`] turns its parameters and a
//! [`geometry::BoundingVolume`] into closed, outward-wound
//! [`topology::Solid`]s, drawing ids from the session's
//! [`context::BuildContext`].

pub mod brushes;
pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod parameters;
pub mod topology;

pub use error::{BrushError, Result};
