//! Lambertian Reflection

use super::*;

/// BRDF for the Lambertian model for perfect diffuse surfaces that scatters
/// incident illumination equally in all directions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LambertianReflection {
    /// BxDF type.
    bxdf_type: BxDFType,

    /// Reflectance spectrum which gives the fraction of incident light that
    /// is scattered.
    r: Spectrum,
}

impl LambertianReflection {
    /// Create a new instance of `LambertianReflection`.
    ///
    /// * `r` - Reflectance spectrum which gives the fraction of incident light
    ///         that is scattered.
    pub fn new(r: Spectrum) -> Self {
        Self::with_type(r, BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE)
    }

    /// Create a new instance of `LambertianReflection` with a caller chosen
    /// classification.
    ///
    /// * `r`         - Reflectance spectrum.
    /// * `bxdf_type` - BxDF type.
    pub fn with_type(r: Spectrum, bxdf_type: BxDFType) -> Self {
        Self { bxdf_type, r }
    }

    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        self.bxdf_type
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `wi` - Incident direction.
    pub fn f(&self, _wo: &Vector3f, dg: &DifferentialGeometry, wi: &Vector3f) -> Spectrum {
        self.r * (INV_PI * max(0.0, wi.dot(&dg.ns)))
    }

    /// Samples a cosine-weighted direction about the shading normal.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, dg: &DifferentialGeometry, u: &Point2f) -> BxDFSample {
        let s = cosine_sample_hemisphere_about(u, &Vector3::from(dg.ns));
        BxDFSample::new(self.f(wo, dg, &s.wi), s.pdf, s.wi, self.bxdf_type)
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, _wo: &Vector3f, dg: &DifferentialGeometry, wi: &Vector3f) -> Float {
        cosine_hemisphere_pdf_about(wi, &Vector3::from(dg.ns))
    }

    /// Computes the hemispherical-directional reflectance function ρ.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - Samples used by Monte Carlo algorithm.
    pub fn rho_hd(&self, _wo: &Vector3f, _u: &[Point2f]) -> Spectrum {
        self.r
    }

    /// Computes the hemispherical-hemispherical reflectance function ρ.
    ///
    /// * `u1` - Samples used by Monte Carlo algorithm.
    /// * `u2` - Samples used by Monte Carlo algorithm.
    pub fn rho_hh(&self, u1: &[Point2f], u2: &[Point2f]) -> Spectrum {
        assert!(u1.len() == u2.len());
        self.r
    }
}

impl fmt::Display for LambertianReflection {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LambertianReflection {{ bxdf_type: {}, r: {} }}",
            self.bxdf_type, self.r
        )
    }
}
