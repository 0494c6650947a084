//! Spectrum

mod rgb_spectrum;

// Re-export
pub use rgb_spectrum::*;

/// Colour type used by the scattering models.
pub type Spectrum = RGBSpectrum;
