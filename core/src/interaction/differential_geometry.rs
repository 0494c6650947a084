//! Differential Geometry

use crate::geometry::*;
use std::fmt;

/// Local surface description at a shading point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DifferentialGeometry {
    /// Geometric normal. Decides which side of the true surface a direction
    /// lies on.
    pub ng: Normal3f,

    /// Shading normal. May be perturbed away from `ng` by interpolation or
    /// bump mapping.
    pub ns: Normal3f,
}

impl DifferentialGeometry {
    /// Create a new `DifferentialGeometry`.
    ///
    /// * `ng` - Geometric normal.
    /// * `ns` - Shading normal.
    pub fn new(ng: Normal3f, ns: Normal3f) -> Self {
        Self { ng, ns }
    }

    /// Create a `DifferentialGeometry` whose geometric and shading normals
    /// coincide.
    ///
    /// * `n` - The normal.
    pub fn from_normal(n: Normal3f) -> Self {
        Self::new(n, n)
    }
}

impl fmt::Display for DifferentialGeometry {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ng = {}, ns = {} }}", self.ng, self.ns)
    }
}
