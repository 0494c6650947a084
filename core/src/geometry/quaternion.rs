//! Quaternions

use super::common::*;
use super::{Matrix3x3, Vector3};
use num_traits::Num;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A quaternion `w + v.x i + v.y j + v.z k`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion<T> {
    /// The imaginary `x`, `y`, `z` components represented as a vector.
    pub v: Vector3<T>,

    /// The real component `w`.
    pub w: T,
}

impl<T: Num + Copy> Quaternion<T> {
    /// Create a new quaternion.
    ///
    /// * `v` - The `x`, `y`, `z` components represented as a vector.
    /// * `w` - The real component `w`.
    pub fn new(v: Vector3<T>, w: T) -> Self {
        Self { v, w }
    }

    /// Create the unit quaternion for a rotation of `theta` radians about an
    /// axis. The axis is normalized.
    ///
    /// * `axis`  - The rotation axis.
    /// * `theta` - The rotation angle in radians.
    pub fn from_axis_angle(axis: &Vector3<T>, theta: T) -> Self
    where
        T: num_traits::Float,
    {
        let half = theta / (T::one() + T::one());
        Self::new(axis.normalize() * half.sin(), half.cos())
    }

    /// Returns the square of the length of the quaternion which is the
    /// inner product with itself.
    pub fn length_squared(&self) -> T
    where
        T: Neg<Output = T> + PartialOrd,
    {
        self.dot(self)
    }

    /// Returns the length of the quaternion.
    pub fn length(&self) -> T
    where
        T: num_traits::Float,
    {
        self.length_squared().sqrt()
    }

    /// Normalizes the quaternion by dividing each component by its length.
    pub fn normalize(&self) -> Self
    where
        T: num_traits::Float,
    {
        *self * (T::one() / self.length())
    }

    /// Returns the conjugate `w - v`.
    pub fn conjugate(&self) -> Self
    where
        T: Neg<Output = T>,
    {
        Self::new(-self.v, self.w)
    }
}

impl<T: Num + Copy> Default for Quaternion<T> {
    /// Returns the identity quaternion [0, 0, 0, 1].
    fn default() -> Self {
        Self::new(Vector3::zero(), T::one())
    }
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.v.x, self.v.y, self.v.z, self.w)
    }
}

impl<T: num_traits::Float> From<Matrix3x3<T>> for Quaternion<T> {
    /// Returns the quaternion of a rotation matrix. The result is only
    /// meaningful when the matrix is a proper rotation.
    ///
    /// * `mat` - The rotation matrix.
    fn from(mat: Matrix3x3<T>) -> Self {
        let m = |i: usize, j: usize| mat.row(i)[j];
        let one = T::one();
        let half = one / (one + one);

        let trace = m(0, 0) + m(1, 1) + m(2, 2);
        if trace > T::zero() {
            // Compute w from matrix trace, then xyz.
            let s = (trace + one).sqrt();
            let w = s * half;
            let s = half / s;
            let v = Vector3::new(
                (m(2, 1) - m(1, 2)) * s,
                (m(0, 2) - m(2, 0)) * s,
                (m(1, 0) - m(0, 1)) * s,
            );
            Self::new(v, w)
        } else {
            // Compute largest of x, y, or z, then remaining components.
            let nxt = [1, 2, 0];
            let mut q = [T::zero(); 3];

            let mut i = 0;
            if m(1, 1) > m(0, 0) {
                i = 1;
            }
            if m(2, 2) > m(i, i) {
                i = 2;
            }

            let j = nxt[i];
            let k = nxt[j];

            let mut s = ((m(i, i) - (m(j, j) + m(k, k))) + one).sqrt();
            q[i] = s * half;
            if s != T::zero() {
                s = half / s;
            }

            let w = (m(k, j) - m(j, k)) * s;
            q[j] = (m(j, i) + m(i, j)) * s;
            q[k] = (m(k, i) + m(i, k)) * s;

            Self::new(Vector3::new(q[0], q[1], q[2]), w)
        }
    }
}

impl<T: Num + Copy> Add for Quaternion<T> {
    type Output = Self;

    /// Adds the components of the given quaternion.
    ///
    /// * `other` - The quaternion to add.
    fn add(self, other: Self) -> Self::Output {
        Self::Output::new(self.v + other.v, self.w + other.w)
    }
}

impl<T: Num + Copy> Sub for Quaternion<T> {
    type Output = Self;

    /// Subtracts the components of the given quaternion.
    ///
    /// * `other` - The quaternion to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::Output::new(self.v - other.v, self.w - other.w)
    }
}

impl<T: Num + Copy> Mul<T> for Quaternion<T> {
    type Output = Self;

    /// Scales the components of the quaternion.
    ///
    /// * `f` - The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::Output::new(self.v * f, self.w * f)
    }
}

impl<T: Num + Neg<Output = T> + PartialOrd + Copy> Mul<Quaternion<T>> for Quaternion<T> {
    type Output = Self;

    /// Returns the Hamilton product. Rotating by the product is the same as
    /// rotating by `other` first and then by `self`.
    ///
    /// * `other` - The right hand side quaternion.
    fn mul(self, other: Self) -> Self::Output {
        Self::Output::new(
            other.v * self.w + self.v * other.w + self.v.cross(&other.v),
            self.w * other.w - self.v.dot(&other.v),
        )
    }
}

impl<T: Num + Neg<Output = T> + Copy> Neg for Quaternion<T> {
    type Output = Self;

    /// Scales the components by -1.
    fn neg(self) -> Self::Output {
        Self::Output::new(-self.v, -self.w)
    }
}

impl<T: Num + Neg<Output = T> + PartialOrd + Copy> Dot<Quaternion<T>> for Quaternion<T> {
    type Output = T;

    /// Returns the inner product with another quaternion.
    ///
    /// * `other` - The other quaternion.
    fn dot(&self, other: &Quaternion<T>) -> T {
        self.v.dot(&other.v) + self.w * other.w
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
