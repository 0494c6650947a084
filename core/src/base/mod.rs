//! Scalar type and common numeric helpers.

mod common;

// Re-export
pub use common::*;
