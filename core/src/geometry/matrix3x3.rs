//! 3x3 Matrix
//!
//! Linear transforms stored as three column vectors. There is no translation
//! component, so points and vectors transform identically.

use super::common::*;
use super::{Normal3, Quaternion, Vector3};
use crate::base::Float;
use num_traits::Num;
use std::fmt;
use std::ops::{Add, Div, DivAssign, Mul, MulAssign, Neg, Sub};

/// A 3x3 matrix acting on column vectors.
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix3x3<T> {
    /// First column.
    pub vx: Vector3<T>,

    /// Second column.
    pub vy: Vector3<T>,

    /// Third column.
    pub vz: Vector3<T>,
}

/// 3x3 matrix containing `Float` values.
pub type Matrix3x3f = Matrix3x3<Float>;

/// 3x3 matrix containing `f64` values.
pub type Matrix3x3d = Matrix3x3<f64>;

impl<T: Num + Copy> Matrix3x3<T> {
    /// Create a matrix from its column vectors.
    ///
    /// * `vx` - First column.
    /// * `vy` - Second column.
    /// * `vz` - Third column.
    pub fn new(vx: Vector3<T>, vy: Vector3<T>, vz: Vector3<T>) -> Self {
        Self { vx, vy, vz }
    }

    /// Create a matrix using the following order of the parameters:
    ///
    /// * `m00`, `m01`, `m02` - Row 1
    /// * `m10`, `m11`, `m12` - Row 2
    /// * `m20`, `m21`, `m22` - Row 3
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub fn from_rows(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
    ) -> Self {
        Self::new(
            Vector3::new(m00, m10, m20),
            Vector3::new(m01, m11, m21),
            Vector3::new(m02, m12, m22),
        )
    }

    /// Returns the zero matrix.
    pub fn zero() -> Self {
        Self::new(Vector3::zero(), Vector3::zero(), Vector3::zero())
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        Self::new(Vector3::x_axis(), Vector3::y_axis(), Vector3::z_axis())
    }

    /// Returns a diagonal matrix that scales each axis.
    ///
    /// * `s` - Scale factors along x, y and z.
    #[rustfmt::skip]
    pub fn scale(s: &Vector3<T>) -> Self {
        let o = T::zero();
        Self::from_rows(
            s.x,   o,   o,
              o, s.y,   o,
              o,   o, s.z,
        )
    }

    /// Returns the matrix for a rotation about an arbitrary axis using
    /// Rodrigues' formula. The axis is normalized.
    ///
    /// * `axis`  - Rotation axis.
    /// * `theta` - Rotation angle in radians.
    #[rustfmt::skip]
    pub fn rotate(axis: &Vector3<T>, theta: T) -> Self
    where
        T: num_traits::Float,
    {
        let u = axis.normalize();
        let (s, c) = theta.sin_cos();
        let one = T::one();
        Self::from_rows(
            u.x * u.x + (one - u.x * u.x) * c,  u.x * u.y * (one - c) - u.z * s,    u.x * u.z * (one - c) + u.y * s,
            u.x * u.y * (one - c) + u.z * s,    u.y * u.y + (one - u.y * u.y) * c,  u.y * u.z * (one - c) - u.x * s,
            u.x * u.z * (one - c) - u.y * s,    u.y * u.z * (one - c) + u.x * s,    u.z * u.z + (one - u.z * u.z) * c,
        )
    }

    /// Returns an orthonormal frame `(dx, dy, n)` around a unit normal.
    ///
    /// `dx` is taken from whichever of `X × n` and `Y × n` is longer, so it
    /// never degenerates.
    ///
    /// * `n` - Unit normal that becomes the third column.
    pub fn frame(n: &Vector3<T>) -> Self
    where
        T: num_traits::Float,
    {
        let dx0 = Vector3::x_axis().cross(n);
        let dx1 = Vector3::y_axis().cross(n);
        let dx = if dx0.length_squared() > dx1.length_squared() {
            dx0
        } else {
            dx1
        }
        .normalize();
        let dy = n.cross(&dx).normalize();
        Self::new(dx, dy, *n)
    }

    /// Returns the determinant (scalar triple product of the columns).
    pub fn determinant(&self) -> T
    where
        T: num_traits::Float,
    {
        self.vx.dot(&self.vy.cross(&self.vz))
    }

    /// Returns the adjoint matrix (transpose of the cofactor matrix).
    pub fn adjoint(&self) -> Self {
        Self::new(
            self.vy.cross(&self.vz),
            self.vz.cross(&self.vx),
            self.vx.cross(&self.vy),
        )
        .transpose()
    }

    /// Returns the inverse. A singular matrix yields infinite or NaN entries;
    /// callers that can produce one must check for it.
    pub fn inverse(&self) -> Self
    where
        T: num_traits::Float,
    {
        self.adjoint() * self.determinant().recip()
    }

    /// Returns the transpose of the matrix.
    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        Self::from_rows(
            self.vx.x, self.vx.y, self.vx.z,
            self.vy.x, self.vy.y, self.vy.z,
            self.vz.x, self.vz.y, self.vz.z,
        )
    }

    /// Returns a row of the matrix.
    ///
    /// * `i` - Row index in [0, 2].
    pub fn row(&self, i: usize) -> Vector3<T> {
        Vector3::new(self.vx[i], self.vy[i], self.vz[i])
    }

    /// Returns the first row.
    pub fn row0(&self) -> Vector3<T> {
        Vector3::new(self.vx.x, self.vy.x, self.vz.x)
    }

    /// Returns the second row.
    pub fn row1(&self) -> Vector3<T> {
        Vector3::new(self.vx.y, self.vy.y, self.vz.y)
    }

    /// Returns the third row.
    pub fn row2(&self) -> Vector3<T> {
        Vector3::new(self.vx.z, self.vy.z, self.vz.z)
    }

    /// Transform a point.
    ///
    /// * `p` - The point.
    pub fn transform_point(&self, p: &Vector3<T>) -> Vector3<T> {
        self.vx * p.x + self.vy * p.y + self.vz * p.z
    }

    /// Transform a vector.
    ///
    /// * `v` - The vector.
    pub fn transform_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        self.vx * v.x + self.vy * v.y + self.vz * v.z
    }

    /// Transform a normal by the inverse transpose so that it stays
    /// perpendicular to transformed tangents.
    ///
    /// * `n` - The normal.
    pub fn transform_normal(&self, n: &Normal3<T>) -> Normal3<T>
    where
        T: num_traits::Float,
    {
        Normal3::from(
            self.inverse()
                .transpose()
                .transform_vector(&Vector3::from(*n)),
        )
    }
}

impl<T: Num + Copy> Default for Matrix3x3<T> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Num + Copy> From<Quaternion<T>> for Matrix3x3<T> {
    /// Returns the rotation matrix of a unit quaternion.
    ///
    /// * `q` - The quaternion.
    fn from(q: Quaternion<T>) -> Self {
        let (r, i, j, k) = (q.w, q.v.x, q.v.y, q.v.z);
        let two = T::one() + T::one();
        Self::new(
            Vector3::new(
                r * r + i * i - j * j - k * k,
                two * (i * j + r * k),
                two * (i * k - r * j),
            ),
            Vector3::new(
                two * (i * j - r * k),
                r * r - i * i + j * j - k * k,
                two * (j * k + r * i),
            ),
            Vector3::new(
                two * (i * k + r * j),
                two * (j * k - r * i),
                r * r - i * i - j * j + k * k,
            ),
        )
    }
}

impl From<Matrix3x3<f32>> for Matrix3x3<f64> {
    /// Widen a single precision matrix.
    ///
    /// * `m` - The matrix.
    fn from(m: Matrix3x3<f32>) -> Self {
        Self::new(m.vx.into(), m.vy.into(), m.vz.into())
    }
}

impl<T: Num + Copy> Add for Matrix3x3<T> {
    type Output = Self;

    /// Adds the corresponding columns.
    ///
    /// * `other` - The matrix to add.
    fn add(self, other: Self) -> Self::Output {
        Self::new(self.vx + other.vx, self.vy + other.vy, self.vz + other.vz)
    }
}

impl<T: Num + Copy> Sub for Matrix3x3<T> {
    type Output = Self;

    /// Subtracts the corresponding columns.
    ///
    /// * `other` - The matrix to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.vx - other.vx, self.vy - other.vy, self.vz - other.vz)
    }
}

impl<T: Num + Neg<Output = T> + Copy> Neg for Matrix3x3<T> {
    type Output = Self;

    /// Negates every entry.
    fn neg(self) -> Self::Output {
        Self::new(-self.vx, -self.vy, -self.vz)
    }
}

impl<T: Num + Copy> Mul<T> for Matrix3x3<T> {
    type Output = Self;

    /// Scales every entry.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::new(self.vx * f, self.vy * f, self.vz * f)
    }
}

macro_rules! premul {
    ($t: ty) => {
        impl Mul<Matrix3x3<$t>> for $t {
            type Output = Matrix3x3<$t>;
            /// Scales every entry.
            ///
            /// * `m` - The matrix.
            fn mul(self, m: Matrix3x3<$t>) -> Matrix3x3<$t> {
                m * self
            }
        }
    };
}

premul!(f32);
premul!(f64);

impl<T: Num + Copy> Mul<Vector3<T>> for Matrix3x3<T> {
    type Output = Vector3<T>;

    /// Transforms a vector.
    ///
    /// * `v` - The vector.
    fn mul(self, v: Vector3<T>) -> Self::Output {
        self.transform_vector(&v)
    }
}

impl<T: Num + Copy> Mul<Matrix3x3<T>> for Matrix3x3<T> {
    type Output = Self;

    /// Post-multiply the given matrix; `other` is applied first.
    ///
    /// * `other` - The other matrix.
    fn mul(self, other: Self) -> Self::Output {
        Self::new(
            self.transform_vector(&other.vx),
            self.transform_vector(&other.vy),
            self.transform_vector(&other.vz),
        )
    }
}

impl<T: num_traits::Float> Div<Matrix3x3<T>> for Matrix3x3<T> {
    type Output = Self;

    /// Post-multiply the inverse of the given matrix.
    ///
    /// * `other` - The other matrix.
    fn div(self, other: Self) -> Self::Output {
        self * other.inverse()
    }
}

impl<T: num_traits::Float> Div<T> for Matrix3x3<T> {
    type Output = Self;

    /// Scales every entry by 1/f.
    ///
    /// * `f` - The scaling factor.
    fn div(self, f: T) -> Self::Output {
        self * f.recip()
    }
}

impl<T: Num + Copy> MulAssign<Matrix3x3<T>> for Matrix3x3<T> {
    /// Performs the `*=` operation.
    ///
    /// * `other` - The other matrix.
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Num + Copy> MulAssign<T> for Matrix3x3<T> {
    /// Performs the `*=` operation.
    ///
    /// * `f` - The scaling factor.
    fn mul_assign(&mut self, f: T) {
        *self = *self * f;
    }
}

impl<T: num_traits::Float> DivAssign<Matrix3x3<T>> for Matrix3x3<T> {
    /// Performs the `/=` operation.
    ///
    /// * `other` - The other matrix.
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl<T: num_traits::Float> DivAssign<T> for Matrix3x3<T> {
    /// Performs the `/=` operation.
    ///
    /// * `f` - The scaling factor.
    fn div_assign(&mut self, f: T) {
        *self = *self / f;
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix3x3<T> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ vx = {:?}, vy = {:?}, vz = {:?} }}",
            self.vx, self.vy, self.vz
        )
    }
}

impl<T: fmt::Display> fmt::Display for Matrix3x3<T> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ vx = {}, vy = {}, vz = {} }}", self.vx, self.vy, self.vz)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
