//! Common sampling functions.

use crate::base::*;
use crate::geometry::*;

/// A sampled direction together with its solid angle density.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DirectionSample {
    /// The sampled direction.
    pub wi: Vector3f,

    /// Probability density of `wi` with respect to solid angle.
    pub pdf: Float,
}

impl DirectionSample {
    /// Create a new `DirectionSample`.
    ///
    /// * `wi`  - The sampled direction.
    /// * `pdf` - Probability density of `wi`.
    pub fn new(wi: Vector3f, pdf: Float) -> Self {
        Self { wi, pdf }
    }
}

/// Generate a regular grid of 2D samples at the centre of each stratum.
///
/// * `nx` - Number of samples in x-direction.
/// * `ny` - Number of samples in y-direction.
pub fn stratified_grid_2d(nx: usize, ny: usize) -> Vec<Point2f> {
    let dx = 1.0 / nx as Float;
    let dy = 1.0 / ny as Float;

    (0..ny)
        .flat_map(|y| (0..nx).map(move |x| (x, y)))
        .map(|(x, y)| {
            Point2f::new(
                min((x as Float + 0.5) * dx, ONE_MINUS_EPSILON),
                min((y as Float + 0.5) * dy, ONE_MINUS_EPSILON),
            )
        })
        .collect()
}

/// Uniformly sample a direction on the hemisphere about `(0, 0, 1)`.
///
/// * `u` - The random sample point.
pub fn uniform_sample_hemisphere(u: &Point2f) -> Vector3f {
    let z = u[0];
    let r = max(0.0, 1.0 - z * z).sqrt();
    let phi = TWO_PI * u[1];
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Returns the PDF for uniformly sampling a direction from a hemisphere.
#[inline]
pub fn uniform_hemisphere_pdf() -> Float {
    INV_TWO_PI
}

/// Sample a point on a unit disk by mapping from a unit square to the unit
/// circle. The concentric mapping takes points in [-1, 1]^2 to unit disk by
/// uniformly mapping concentric squares to concentric circles.
///
/// * `u` - The random sample point.
pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // Map uniform random numbers to [-1,1]^2.
    let ox = 2.0 * u.x - 1.0;
    let oy = 2.0 * u.y - 1.0;

    // Handle degeneracy at the origin.
    if ox == 0.0 && oy == 0.0 {
        return Point2f::new(0.0, 0.0);
    }

    // Apply concentric mapping to point.
    let (r, theta) = if abs(ox) > abs(oy) {
        (ox, PI_OVER_FOUR * (oy / ox))
    } else {
        (oy, PI_OVER_TWO - PI_OVER_FOUR * (ox / oy))
    };

    Point2f::new(r * theta.cos(), r * theta.sin())
}

/// Sample a direction on the hemisphere about `(0, 0, 1)` using
/// cosine-weighted sampling.
///
/// * `u` - The random sample point.
#[inline]
pub fn cosine_sample_hemisphere(u: &Point2f) -> Vector3f {
    let d = concentric_sample_disk(u);
    let z = max(0.0, 1.0 - d.x * d.x - d.y * d.y).sqrt();
    Vector3f::new(d.x, d.y, z)
}

/// Returns the PDF for cosine-weighted sampling a direction from a hemisphere.
///
/// * `cos_theta` - Cosine term of incident radiance.
#[inline]
pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

/// Sample a direction on the hemisphere about an arbitrary unit axis using
/// cosine-weighted sampling.
///
/// * `u` - The random sample point.
/// * `n` - Unit axis of the hemisphere.
pub fn cosine_sample_hemisphere_about(u: &Point2f, n: &Vector3f) -> DirectionSample {
    let wi = Matrix3x3::frame(n).transform_vector(&cosine_sample_hemisphere(u));
    DirectionSample::new(wi, cosine_hemisphere_pdf_about(&wi, n))
}

/// Returns the PDF for cosine-weighted sampling a direction from the
/// hemisphere about an arbitrary unit axis. Directions below the hemisphere
/// have zero density.
///
/// * `wi` - The direction.
/// * `n`  - Unit axis of the hemisphere.
#[inline]
pub fn cosine_hemisphere_pdf_about(wi: &Vector3f, n: &Vector3f) -> Float {
    cosine_hemisphere_pdf(max(0.0, wi.dot(n)))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    crate::prop_point2!(sample_point, Float, 0.0..1.0 as Float, 0.0..1.0 as Float);
    crate::prop_unit_vector3!(unit_vector3, Float);

    #[test]
    fn stratified_grid_covers_every_cell() {
        let samples = stratified_grid_2d(4, 2);
        assert_eq!(samples.len(), 8);
        assert_eq!(samples[0], Point2f::new(0.125, 0.25));
        assert_eq!(samples[3], Point2f::new(0.875, 0.25));
        assert_eq!(samples[4], Point2f::new(0.125, 0.75));
        assert!(samples.iter().all(|p| p.x < 1.0 && p.y < 1.0));
    }

    #[test]
    fn concentric_disk_centre() {
        assert_eq!(
            concentric_sample_disk(&Point2f::new(0.5, 0.5)),
            Point2f::new(0.0, 0.0)
        );
    }

    #[test]
    fn cosine_sample_about_z_matches_local_frame_pdf() {
        let u = Point2f::new(0.3, 0.8);
        let s = cosine_sample_hemisphere_about(&u, &Vector3f::z_axis());
        let local = cosine_sample_hemisphere(&u);
        assert!(approx_eq!(Float, s.wi.z, local.z, epsilon = 1e-6));
        assert!(approx_eq!(
            Float,
            s.pdf,
            cosine_hemisphere_pdf(local.z),
            epsilon = 1e-6
        ));
    }

    proptest! {
        #[test]
        fn concentric_disk_stays_inside_unit_disk(u in sample_point()) {
            let d = concentric_sample_disk(&u);
            prop_assert!(d.x * d.x + d.y * d.y <= 1.0 + 1e-5);
        }

        #[test]
        fn uniform_hemisphere_is_upper_unit_direction(u in sample_point()) {
            let w = uniform_sample_hemisphere(&u);
            prop_assert!(w.z >= 0.0);
            prop_assert!(approx_eq!(Float, w.length(), 1.0, epsilon = 1e-5));
        }

        #[test]
        fn cosine_sample_about_axis_lies_in_hemisphere(
            u in sample_point(),
            n in unit_vector3(),
        ) {
            let s = cosine_sample_hemisphere_about(&u, &n);
            prop_assert!(approx_eq!(Float, s.wi.length(), 1.0, epsilon = 1e-4));
            prop_assert!(s.wi.dot(&n) >= -1e-5);
            prop_assert_eq!(s.pdf, cosine_hemisphere_pdf_about(&s.wi, &n));
            prop_assert!(s.pdf <= INV_PI + 1e-5);
        }

        #[test]
        fn pdf_about_axis_is_zero_below(w in unit_vector3(), n in unit_vector3()) {
            prop_assume!(w.dot(&n) < 0.0);
            prop_assert_eq!(cosine_hemisphere_pdf_about(&w, &n), 0.0);
        }
    }
}
