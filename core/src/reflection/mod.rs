//! Reflection and surface scattering models

use crate::base::*;
use crate::geometry::*;
use crate::interaction::*;
use crate::sampling::*;
use crate::spectrum::*;
use std::fmt;

mod bxdf_sample;
mod bxdf_type;
mod lambertian_horizon;
mod lambertian_reflection;
mod lambertian_transmission;

// Re-export
pub use bxdf_sample::*;
pub use bxdf_type::*;
pub use lambertian_horizon::*;
pub use lambertian_reflection::*;
pub use lambertian_transmission::*;

/// BxDF for the diffuse scattering models.
///
/// All models follow the same contract. `f` includes the foreshortening
/// cosine so that `f / pdf` is the weight of a sampled direction. Directions
/// are in world space and compared against the normals of the
/// `DifferentialGeometry`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BxDF {
    LambertianReflection(LambertianReflection),
    LambertianTransmission(LambertianTransmission),
    LambertianHorizon(LambertianHorizon),
}

impl BxDF {
    /// Returns the BxDF type.
    pub fn get_type(&self) -> BxDFType {
        match self {
            BxDF::LambertianReflection(bxdf) => bxdf.get_type(),
            BxDF::LambertianTransmission(bxdf) => bxdf.get_type(),
            BxDF::LambertianHorizon(bxdf) => bxdf.get_type(),
        }
    }

    /// Returns true if every flag of this BxDF's type is in `t`.
    ///
    /// * `t` - The reflection model to compare.
    pub fn matches_flags(&self, t: BxDFType) -> bool {
        t.contains(self.get_type())
    }

    /// Returns the value of the distribution function for the given pair of
    /// directions.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `wi` - Incident direction.
    pub fn f(&self, wo: &Vector3f, dg: &DifferentialGeometry, wi: &Vector3f) -> Spectrum {
        match self {
            BxDF::LambertianReflection(bxdf) => bxdf.f(wo, dg, wi),
            BxDF::LambertianTransmission(bxdf) => bxdf.f(wo, dg, wi),
            BxDF::LambertianHorizon(bxdf) => bxdf.f(wo, dg, wi),
        }
    }

    /// Samples an incident direction and returns it with the value of the
    /// distribution function and the PDF.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, dg: &DifferentialGeometry, u: &Point2f) -> BxDFSample {
        match self {
            BxDF::LambertianReflection(bxdf) => bxdf.sample_f(wo, dg, u),
            BxDF::LambertianTransmission(bxdf) => bxdf.sample_f(wo, dg, u),
            BxDF::LambertianHorizon(bxdf) => bxdf.sample_f(wo, dg, u),
        }
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, wo: &Vector3f, dg: &DifferentialGeometry, wi: &Vector3f) -> Float {
        match self {
            BxDF::LambertianReflection(bxdf) => bxdf.pdf(wo, dg, wi),
            BxDF::LambertianTransmission(bxdf) => bxdf.pdf(wo, dg, wi),
            BxDF::LambertianHorizon(bxdf) => bxdf.pdf(wo, dg, wi),
        }
    }

    /// Computes the hemispherical-directional reflectance function ρ.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `u`  - Samples used by Monte Carlo algorithm.
    pub fn rho_hd(&self, wo: &Vector3f, dg: &DifferentialGeometry, u: &[Point2f]) -> Spectrum {
        match self {
            BxDF::LambertianReflection(bxdf) => bxdf.rho_hd(wo, u),
            _ => {
                let mut r = Spectrum::ZERO;
                for s in u {
                    // Estimate one term of `rho_hd`.
                    r += self.sample_f(wo, dg, s).weight();
                }
                r / u.len() as Float
            }
        }
    }

    /// Computes the hemispherical-hemispherical reflectance function ρ. The
    /// outgoing directions are spread uniformly over the hemisphere about the
    /// shading normal.
    ///
    /// * `dg` - Differential geometry at the shading point.
    /// * `u1` - Samples used to pick outgoing directions.
    /// * `u2` - Samples used to pick incident directions.
    pub fn rho_hh(&self, dg: &DifferentialGeometry, u1: &[Point2f], u2: &[Point2f]) -> Spectrum {
        match self {
            BxDF::LambertianReflection(bxdf) => bxdf.rho_hh(u1, u2),
            _ => {
                assert!(u1.len() == u2.len());

                let ns = Vector3::from(dg.ns);
                let frame = Matrix3x3::frame(&ns);
                let pdfo = uniform_hemisphere_pdf();

                let mut r = Spectrum::ZERO;
                for (s1, s2) in u1.iter().zip(u2.iter()) {
                    // Estimate one term of `rho_hh`.
                    let wo = frame.transform_vector(&uniform_sample_hemisphere(s1));
                    let sample = self.sample_f(&wo, dg, s2);
                    r += sample.weight() * (abs(wo.dot(&ns)) / pdfo);
                }
                r / (PI * u1.len() as Float)
            }
        }
    }
}

impl From<LambertianReflection> for BxDF {
    fn from(bxdf: LambertianReflection) -> Self {
        BxDF::LambertianReflection(bxdf)
    }
}

impl From<LambertianTransmission> for BxDF {
    fn from(bxdf: LambertianTransmission) -> Self {
        BxDF::LambertianTransmission(bxdf)
    }
}

impl From<LambertianHorizon> for BxDF {
    fn from(bxdf: LambertianHorizon) -> Self {
        BxDF::LambertianHorizon(bxdf)
    }
}

impl fmt::Display for BxDF {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BxDF::LambertianReflection(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::LambertianTransmission(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
            BxDF::LambertianHorizon(bxdf) => write!(f, "BxDF {{ {} }}", bxdf),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
