//! Interactions

mod differential_geometry;

pub use differential_geometry::*;
