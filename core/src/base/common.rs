//! Common

use num_traits::Num;
use std::ops::Neg;

/// Use 32-bit precision for floating point numbers.
#[cfg(not(feature = "double-precision"))]
pub type Float = f32;

/// Use 64-bit precision for floating point numbers.
///
/// Add the following to use it in Cargo.toml
/// [features]
/// double-precision = []
#[cfg(feature = "double-precision")]
pub type Float = f64;

/// PI (π)
#[cfg(not(feature = "double-precision"))]
pub const PI: Float = std::f32::consts::PI;

/// PI (π)
#[cfg(feature = "double-precision")]
pub const PI: Float = std::f64::consts::PI;

/// 1 - epsilon in the precision we've selected for `Float`.
#[cfg(not(feature = "double-precision"))]
pub const ONE_MINUS_EPSILON: Float = hexf32!("0x1.fffffep-1"); // 0.99999994

/// 1 - epsilon in the precision we've selected for `Float`.
#[cfg(feature = "double-precision")]
pub const ONE_MINUS_EPSILON: Float = hexf64!("0x1.fffffffffffffp-1"); // 0.99999999999999989

/// Infinty (∞)
pub const INFINITY: Float = Float::INFINITY;

/// 1/PI (1/π)
pub const INV_PI: Float = 1.0 / PI;

/// PI/2 (π/2)
pub const PI_OVER_TWO: Float = PI * 0.5;

/// PI/4 (π/4)
pub const PI_OVER_FOUR: Float = PI * 0.25;

/// 2*PI (2π)
pub const TWO_PI: Float = PI * 2.0;

/// 1/2*PI (1/2π)
pub const INV_TWO_PI: Float = 1.0 / TWO_PI;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps a value x to [min, max].
///
/// * `x`   - The number to clamp.
/// * `min` - Minimum value.
/// * `max` - Maximum value.
#[inline(always)]
pub fn clamp<T>(x: T, min: T, max: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

/// Clamps a value to [0, 1]. NaN passes through unchanged.
///
/// * `x` - The number to clamp.
#[inline(always)]
pub fn clamp01(x: Float) -> Float {
    clamp(x, 0.0, 1.0)
}

/// Converts an angle in degrees to radians.
///
/// * `deg` - The angle in degrees.
#[inline(always)]
pub fn radians(deg: Float) -> Float {
    (PI / 180.0) * deg
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_inside_and_outside_range() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(7, 1, 3), 3);
    }

    #[test]
    fn clamp01_passes_nan_through() {
        assert!(clamp01(Float::NAN).is_nan());
        assert_eq!(clamp01(2.0), 1.0);
    }

    #[test]
    fn min_max_abs() {
        assert_eq!(min(2, 3), 2);
        assert_eq!(max(2.0, 3.0), 3.0);
        assert_eq!(abs(-4), 4);
        assert_eq!(abs(-0.25), 0.25);
    }

    #[test]
    fn one_minus_epsilon_is_below_one() {
        assert!(ONE_MINUS_EPSILON < 1.0);
        assert!(ONE_MINUS_EPSILON > 0.9999);
    }

    #[test]
    fn radians_of_straight_angle_is_pi() {
        assert!((radians(180.0) - PI).abs() < 1e-6);
    }
}
