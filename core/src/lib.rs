//! Shading core: linear transforms and diffuse scattering models.

extern crate bitflags;
#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod base;
pub mod geometry;
pub mod interaction;
pub mod reflection;
pub mod sampling;
pub mod spectrum;
