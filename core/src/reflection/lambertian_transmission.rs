//! Lambertian Transmission

use super::*;

/// BTDF for the Lambertian model for perfect transmissive surfaces that
/// scatters incident illumination equally through a surface in all
/// directions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LambertianTransmission {
    /// BxDF type.
    bxdf_type: BxDFType,

    /// Normal on the side light leaves from. Light transmits into the
    /// hemisphere about `-n`.
    n: Normal3f,

    /// Transmission spectrum which gives the fraction of incident light that
    /// is scattered through the surface.
    t: Spectrum,
}

impl LambertianTransmission {
    /// Create a new instance of `LambertianTransmission`.
    ///
    /// * `n` - Normal on the side light leaves from.
    /// * `t` - Transmission spectrum which gives the fraction of incident
    ///         light that is scattered through the surface.
    pub fn new(n: Normal3f, t: Spectrum) -> Self {
        Self {
            bxdf_type: BxDFType::BSDF_TRANSMISSION | BxDFType::BSDF_DIFFUSE,
            n,
            t,
        }
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        self.bxdf_type
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions. Directions on the same side of the geometric surface as
    /// its normal receive nothing.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `wi` - Incident direction.
    pub fn f(&self, _wo: &Vector3f, dg: &DifferentialGeometry, wi: &Vector3f) -> Spectrum {
        if wi.dot(&-dg.ng) <= 0.0 {
            return Spectrum::ZERO;
        }
        self.t * (INV_PI * max(0.0, wi.dot(&-self.n)))
    }

    /// Samples a cosine-weighted direction about `-n`.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, dg: &DifferentialGeometry, u: &Point2f) -> BxDFSample {
        let s = cosine_sample_hemisphere_about(u, &-Vector3::from(self.n));
        BxDFSample::new(self.f(wo, dg, &s.wi), s.pdf, s.wi, self.bxdf_type)
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, _wo: &Vector3f, _dg: &DifferentialGeometry, wi: &Vector3f) -> Float {
        cosine_hemisphere_pdf_about(wi, &-Vector3::from(self.n))
    }
}

impl fmt::Display for LambertianTransmission {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LambertianTransmission {{ bxdf_type: {}, n: {}, t: {} }}",
            self.bxdf_type, self.n, self.t
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    crate::prop_unit_vector3!(unit_vector3, Float);
    crate::prop_point2!(sample_point, Float, 0.0..1.0 as Float, 0.0..1.0 as Float);

    fn tilted() -> (DifferentialGeometry, Normal3f) {
        let ng = Normal3::new(0.0, 0.0, 1.0);
        let n = Normal3::from(
            Matrix3x3::rotate(&Vector3::x_axis(), radians(30.0))
                .transform_vector(&Vector3::z_axis()),
        );
        (DifferentialGeometry::from_normal(ng), n)
    }

    #[test]
    fn straight_through_is_transmittance_over_pi() {
        let dg = DifferentialGeometry::from_normal(Normal3::new(0.0, 0.0, 1.0));
        let model = LambertianTransmission::new(dg.ng, Spectrum::ONE);
        let wi = Vector3::new(0.0, 0.0, -1.0);
        assert_eq!(model.f(&wi, &dg, &wi), Spectrum::new(INV_PI));
        assert_eq!(model.f(&wi, &dg, &-wi), Spectrum::ZERO);
    }

    #[test]
    fn display() {
        let model = LambertianTransmission::new(Normal3::new(0.0, 0.0, 1.0), Spectrum::new(0.5));
        assert_eq!(
            format!("{}", model),
            "LambertianTransmission { bxdf_type: BSDF_TRANSMISSION | BSDF_DIFFUSE, \
             n: (0, 0, 1), t: [0.5, 0.5, 0.5] }"
        );
    }

    proptest! {
        #[test]
        fn zero_on_the_geometric_side(wo in unit_vector3(), wi in unit_vector3()) {
            let (dg, n) = tilted();
            let model = LambertianTransmission::new(n, Spectrum::new(0.7));
            let f = model.f(&wo, &dg, &wi);
            if wi.dot(&-dg.ng) <= 0.0 {
                prop_assert!(f.is_black());
            } else {
                let expected = 0.7 * INV_PI * max(0.0, wi.dot(&-n));
                prop_assert!(approx_eq!(Float, f[0], expected, epsilon = 1e-6));
            }
        }

        #[test]
        fn sample_matches_f_and_pdf(wo in unit_vector3(), u in sample_point()) {
            let (dg, n) = tilted();
            let model = LambertianTransmission::new(n, Spectrum::new(0.7));
            let s = model.sample_f(&wo, &dg, &u);
            prop_assert_eq!(s.f, model.f(&wo, &dg, &s.wi));
            prop_assert_eq!(s.pdf, model.pdf(&wo, &dg, &s.wi));
            prop_assert!(s.wi.dot(&n) <= 1e-5);
            if !s.f.is_black() {
                prop_assert!(s.pdf > 0.0);
            }
        }
    }
}
