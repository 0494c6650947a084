//! Lambertian Horizon

use super::*;

/// Horizon elevations, as cosines, in the four tangent directions of a
/// shading frame. Bumps on a surface hide light arriving below them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HorizonAngles {
    /// Horizon towards `-dx`.
    pub nhx: Float,

    /// Horizon towards `+dx`.
    pub phx: Float,

    /// Horizon towards `-dy`.
    pub nhy: Float,

    /// Horizon towards `+dy`.
    pub phy: Float,
}

impl HorizonAngles {
    /// Create a new `HorizonAngles`.
    ///
    /// * `nhx` - Horizon towards `-dx`.
    /// * `phx` - Horizon towards `+dx`.
    /// * `nhy` - Horizon towards `-dy`.
    /// * `phy` - Horizon towards `+dy`.
    pub fn new(nhx: Float, phx: Float, nhy: Float, phy: Float) -> Self {
        Self { nhx, phx, nhy, phy }
    }
}

impl fmt::Display for HorizonAngles {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.nhx, self.phx, self.nhy, self.phy
        )
    }
}

/// Lambertian BRDF attenuated towards per-direction horizons.
///
/// The sampling routine draws from the unattenuated cosine lobe about `dz`,
/// so `f / pdf` is not constant and can be zero for sampled directions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LambertianHorizon {
    /// BxDF type.
    bxdf_type: BxDFType,

    /// Shading frame. Columns are the tangents `dx`, `dy` and the axis `dz`.
    frame: Matrix3x3f,

    /// Reflectance spectrum.
    r: Spectrum,

    /// Horizon elevations.
    angles: HorizonAngles,

    /// Width of the transition around each horizon.
    blend: Float,

    /// Scale applied to the horizon elevations.
    strength: Float,
}

impl LambertianHorizon {
    /// Create a new instance of `LambertianHorizon`.
    ///
    /// * `frame`    - Shading frame with columns `dx`, `dy`, `dz`.
    /// * `r`        - Reflectance spectrum.
    /// * `angles`   - Horizon elevations.
    /// * `blend`    - Width of the transition around each horizon.
    /// * `strength` - Scale applied to the horizon elevations.
    pub fn new(
        frame: Matrix3x3f,
        r: Spectrum,
        angles: HorizonAngles,
        blend: Float,
        strength: Float,
    ) -> Self {
        if blend <= 0.0 {
            warn!(
                "LambertianHorizon blend {} is not positive; attenuation will not be finite",
                blend
            );
        }
        Self {
            bxdf_type: BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE,
            frame,
            r,
            angles,
            blend,
            strength,
        }
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
        if wi.dot(&dg.ng) <= 0.0 {
            return Spectrum::ZERO;
        }

        let cos_ns = wi.dot(&dg.ns);
        let visibility = |h: Float| {
            clamp01((cos_ns - self.strength * h + self.blend) / (2.0 * self.blend))
        };
        let weight = |d: Vector3f| {
            let c = clamp01(wi.dot(&d));
            c * c
        };

        let Matrix3x3 {
            vx: dx,
            vy: dy,
            vz: dz,
        } = self.frame;
        let terms = [
            (weight(-dx), visibility(self.angles.nhx)),
            (weight(dx), visibility(self.angles.phx)),
            (weight(-dy), visibility(self.angles.nhy)),
            (weight(dy), visibility(self.angles.phy)),
        ];

        let lambert = self.r * (INV_PI * max(0.0, wi.dot(&dz)));
        let w: Float = terms.iter().map(|(w, _)| w).sum();
        if w == 0.0 {
            return lambert;
        }
        let z = terms.iter().map(|(w, z)| w * z).sum::<Float>() / w;
        lambert * z
    }

    /// Samples a cosine-weighted direction about `dz`.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `u`  - The 2D uniform random values.
    pub fn sample_f(&self, wo: &Vector3f, dg: &DifferentialGeometry, u: &Point2f) -> BxDFSample {
        let s = cosine_sample_hemisphere_about(u, &self.frame.vz);
        BxDFSample::new(self.f(wo, dg, &s.wi), s.pdf, s.wi, self.bxdf_type)
    }

    /// Evaluates the PDF for the sampling method.
    ///
    /// * `wo` - Outgoing direction.
    /// * `dg` - Differential geometry at the shading point.
    /// * `wi` - Incident direction.
    pub fn pdf(&self, _wo: &Vector3f, _dg: &DifferentialGeometry, wi: &Vector3f) -> Float {
        cosine_hemisphere_pdf_about(wi, &self.frame.vz)
    }
}

impl fmt::Display for LambertianHorizon {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LambertianHorizon {{ bxdf_type: {}, frame: {}, r: {}, angles: {}, blend: {}, strength: {} }}",
            self.bxdf_type, self.frame, self.r, self.angles, self.blend, self.strength
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

    fn up() -> DifferentialGeometry {
        DifferentialGeometry::from_normal(Normal3::new(0.0, 0.0, 1.0))
    }

    fn model(angles: HorizonAngles) -> LambertianHorizon {
        LambertianHorizon::new(
            Matrix3x3::identity(),
            Spectrum::rgb(0.2, 0.4, 0.8),
            angles,
            0.1,
            1.0,
        )
    }

    #[test]
    fn along_axis_is_plain_lambert() {
        let m = model(HorizonAngles::new(0.9, 0.9, 0.9, 0.9));
        let dz = Vector3::z_axis();
        assert_eq!(
            m.f(&dz, &up(), &dz),
            Spectrum::rgb(0.2, 0.4, 0.8) * (INV_PI * 1.0)
        );
    }

    #[test]
    fn direction_below_horizon_is_blocked() {
        let m = model(HorizonAngles::new(0.0, 0.9, 0.0, 0.0));
        let wi = Vector3::new(1.0, 0.0, 0.1).normalize();
        assert!(m.f(&wi, &up(), &wi).is_black());

        // Same elevation on the open side.
        let wi = Vector3::new(-1.0, 0.0, 0.1).normalize();
        assert!(!m.f(&wi, &up(), &wi).is_black());
    }

    #[test]
    fn sample_weight_is_not_proportional_to_pdf() {
        let dg = up();
        let m = model(HorizonAngles::new(0.0, 0.9, 0.0, 0.0));
        let wi = Vector3::new(1.0, 0.0, 0.1).normalize();
        assert!(m.pdf(&wi, &dg, &wi) > 0.0);
        assert!(m.f(&wi, &dg, &wi).is_black());

        let weights: Vec<Float> = stratified_grid_2d(8, 8)
            .iter()
            .map(|u| m.sample_f(&wi, &dg, u).weight()[0])
            .collect();
        let lo = weights.iter().cloned().fold(INFINITY, Float::min);
        let hi = weights.iter().cloned().fold(0.0, Float::max);
        assert!(hi - lo > 0.01);
    }

    #[test]
    fn zero_horizons_attenuate_by_elevation_only() {
        let m = model(HorizonAngles::default());
        let wi = Vector3::new(0.6, 0.0, 0.8);
        let f = m.f(&wi, &up(), &wi);
        assert!(approx_eq!(Float, f[1], 0.4 * INV_PI * 0.8, epsilon = 1e-6));
    }

    /// Geometric normal, shading normal and frame axis are three different
    /// directions.
    fn tilted() -> (DifferentialGeometry, LambertianHorizon) {
        let dg = DifferentialGeometry::new(
            Normal3::new(0.0, 0.0, 1.0),
            Normal3::new(0.6, 0.0, 0.8),
        );
        let frame = Matrix3x3::new(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.8, -0.6),
            Vector3::new(0.0, 0.6, 0.8),
        );
        let m = LambertianHorizon::new(
            frame,
            Spectrum::rgb(0.2, 0.4, 0.8),
            HorizonAngles::new(0.0, 0.95, 1.0, 0.0),
            0.1,
            1.0,
        );
        (dg, m)
    }

    #[test]
    fn tilted_frame_blends_about_shading_normal() {
        let (dg, m) = tilted();
        let wi = Vector3::new(0.6, 0.0, 0.8);

        // Weights: 0.6^2 towards +dx and 0.48^2 towards -dy. Blend factors
        // use wi.ns = 1 and the final cosine uses wi.dz = 0.64.
        let (wx, wy) = (0.36, 0.2304);
        let z = (wx * 0.75 + wy * 0.5) / (wx + wy);
        let expected = Spectrum::rgb(0.2, 0.4, 0.8) * (INV_PI * 0.64 * z);
        let f = m.f(&wi, &dg, &wi);
        for i in 0..3 {
            assert!(
                approx_eq!(Float, f[i], expected[i], epsilon = 1e-5),
                "{} != {}",
                f,
                expected
            );
        }

        assert!(approx_eq!(Float, m.pdf(&wi, &dg, &wi), 0.64 * INV_PI, epsilon = 1e-6));
    }

    #[test]
    fn tilted_frame_is_gated_by_geometric_normal() {
        let (dg, m) = tilted();

        // In the geometric plane, yet above both `ns` and `dz`.
        let wi = Vector3::new(0.8, 0.6, 0.0);
        assert!(wi.dot(&dg.ns) > 0.0);
        assert!(wi.dot(&Vector3::new(0.0, 0.6, 0.8)) > 0.0);
        assert!(m.f(&wi, &dg, &wi).is_black());
    }

    #[test]
    fn display() {
        let m = LambertianHorizon::new(
            Matrix3x3::identity(),
            Spectrum::new(0.5),
            HorizonAngles::new(0.25, 0.5, 0.75, 1.0),
            0.5,
            2.0,
        );
        assert_eq!(
            format!("{}", m),
            "LambertianHorizon { bxdf_type: BSDF_REFLECTION | BSDF_DIFFUSE, \
             frame: { vx = (1, 0, 0), vy = (0, 1, 0), vz = (0, 0, 1) }, \
             r: [0.5, 0.5, 0.5], angles: [0.25, 0.5, 0.75, 1], blend: 0.5, strength: 2 }"
        );
    }

    proptest! {
        #[test]
        fn zero_below_the_geometric_surface(wo in unit_vector3(), wi in unit_vector3()) {
            prop_assume!(wi.z <= 0.0);
            let m = model(HorizonAngles::new(0.1, 0.2, 0.3, 0.4));
            prop_assert!(m.f(&wo, &up(), &wi).is_black());
        }

        #[test]
        fn bounded_by_lambert(wo in unit_vector3(), wi in unit_vector3()) {
            let dg = up();
            let m = model(HorizonAngles::new(0.1, 0.2, 0.3, 0.4));
            let lambert = LambertianReflection::new(Spectrum::rgb(0.2, 0.4, 0.8));
            let f = m.f(&wo, &dg, &wi);
            let l = lambert.f(&wo, &dg, &wi);
            for i in 0..3 {
                prop_assert!(f[i] >= 0.0);
                prop_assert!(f[i] <= l[i] + 1e-6);
            }
        }

        #[test]
        fn sample_matches_f_and_pdf(wo in unit_vector3(), u in sample_point()) {
            let dg = up();
            let m = model(HorizonAngles::new(0.1, 0.2, 0.3, 0.4));
            let s = m.sample_f(&wo, &dg, &u);
            prop_assert_eq!(s.f, m.f(&wo, &dg, &s.wi));
            prop_assert_eq!(s.pdf, m.pdf(&wo, &dg, &s.wi));
        }
    }
}
