//! Geometry

// Define macros for property based testing.
#[cfg(test)]
#[macro_export]
macro_rules! prop_range {
    ($name: ident, $t: ty, $r: expr) => {
        prop_compose! {
            fn $name()(f in $r) -> $t {
                f
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_vector3 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr, $zr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr, z in $zr) -> $crate::geometry::Vector3<$t> {
                $crate::geometry::Vector3 { x, y, z }
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_unit_vector3 {
    ($name: ident, $t: ty) => {
        prop_compose! {
            fn $name()(
                x in -1.0..1.0 as $t,
                y in -1.0..1.0 as $t,
                z in -1.0..1.0 as $t,
            ) -> $crate::geometry::Vector3<$t> {
                let v = $crate::geometry::Vector3 { x, y, z };
                if v.length_squared() < 0.01 {
                    $crate::geometry::Vector3 { x: 0.0, y: 0.0, z: 1.0 }
                } else {
                    v.normalize()
                }
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_normal3 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr, $zr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr, z in $zr) -> $crate::geometry::Normal3<$t> {
                $crate::geometry::Normal3 { x, y, z }
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_point2 {
    ($name: ident, $t: ty, $xr: expr, $yr: expr) => {
        prop_compose! {
            fn $name()(x in $xr, y in $yr) -> $crate::geometry::Point2<$t> {
                $crate::geometry::Point2 { x, y }
            }
        }
    };
}

#[cfg(test)]
#[macro_export]
macro_rules! prop_matrix3x3 {
    ($name: ident, $t: ty, $r: expr) => {
        prop_compose! {
            fn $name()(
                m00 in $r, m01 in $r, m02 in $r,
                m10 in $r, m11 in $r, m12 in $r,
                m20 in $r, m21 in $r, m22 in $r,
            ) -> $crate::geometry::Matrix3x3<$t> {
                $crate::geometry::Matrix3x3::from_rows(
                    m00, m01, m02,
                    m10, m11, m12,
                    m20, m21, m22,
                )
            }
        }
    };
}

mod common;
mod matrix3x3;
mod normal;
mod point2;
mod quaternion;
mod vector3;

// Re-export
pub use common::*;
pub use matrix3x3::*;
pub use normal::*;
pub use point2::*;
pub use quaternion::*;
pub use vector3::*;
