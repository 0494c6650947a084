//! Command line options

use clap::{Parser, ValueEnum};
use shading::base::Float;

/// Scattering model to estimate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Model {
    /// Lambertian reflection about the shading normal.
    Reflection,

    /// Lambertian transmission through a tilted normal.
    Transmission,

    /// Lambertian reflection attenuated by horizons.
    Horizon,
}

/// Albedo estimator options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Estimate the albedo of diffuse scattering models.", long_about = None)]
pub struct Options {
    /// The scattering model.
    #[arg(long, value_enum, default_value_t = Model::Reflection)]
    pub model: Model,

    /// Reflectance or transmittance colour.
    #[arg(
        long,
        num_args = 3,
        value_names = ["R", "G", "B"],
        default_values_t = [0.8, 0.8, 0.8],
        allow_negative_numbers = true,
        help = "Reflectance (or transmittance) colour."
    )]
    pub reflectance: Vec<Float>,

    /// Outgoing direction angle from the normal in degrees.
    #[arg(
        long,
        value_name = "DEG",
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Angle of the outgoing direction from the normal in degrees."
    )]
    pub theta: Float,

    /// Number of strata along each side of the sample grid.
    #[arg(
        long,
        short = 'n',
        value_name = "NUM",
        default_value_t = 16,
        help = "Use an NUM x NUM stratified sample grid."
    )]
    pub samples: usize,

    /// Tilt of the transmission normal about the x-axis in degrees.
    #[arg(
        long,
        value_name = "DEG",
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Tilt the transmission normal about the x-axis by DEG degrees."
    )]
    pub tilt: Float,

    /// Horizon elevations towards -x, +x, -y, +y.
    #[arg(
        long,
        num_args = 4,
        value_names = ["NX", "PX", "NY", "PY"],
        default_values_t = [0.0, 0.0, 0.0, 0.0],
        allow_negative_numbers = true,
        help = "Horizon elevations (cosines) towards -x, +x, -y and +y."
    )]
    pub horizon: Vec<Float>,

    /// Width of the transition around each horizon.
    #[arg(long, default_value_t = 0.1, help = "Width of the horizon transition.")]
    pub blend: Float,

    /// Scale applied to the horizon elevations.
    #[arg(long, default_value_t = 1.0, help = "Scale applied to the horizon elevations.")]
    pub strength: Float,

    /// Also estimate hemispherical-hemispherical reflectance.
    #[arg(long, help = "Also estimate the hemispherical-hemispherical reflectance.")]
    pub hh: bool,
}

impl Options {
    /// Checks values that parse but make no sense for an estimate.
    pub fn validate(&self) -> Result<(), String> {
        if self.samples == 0 {
            return Err("At least one sample is needed.".to_string());
        }
        if let Some(c) = self.reflectance.iter().find(|c| **c < 0.0 || c.is_nan()) {
            return Err(format!("Invalid reflectance component {c}."));
        }
        if !self.theta.is_finite() || !self.tilt.is_finite() {
            return Err("Angles must be finite.".to_string());
        }
        Ok(())
    }
}
