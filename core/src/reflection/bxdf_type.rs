//! BxDF Type

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Stores combinations of scattering model classifications.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct BxDFType: u8 {
        const BSDF_REFLECTION = 0b00000001;
        const BSDF_TRANSMISSION = 0b00000010;
        const BSDF_DIFFUSE = 0b00000100;
        const BSDF_ALL = Self::BSDF_REFLECTION.bits()
            | Self::BSDF_TRANSMISSION.bits()
            | Self::BSDF_DIFFUSE.bits();
    }
}

impl BxDFType {
    /// Tests a single type flag and returns whether it is set or not.
    ///
    /// * `flag` - BxDFType flag.
    pub fn matches(&self, flag: Self) -> bool {
        self.bits() & flag.bits() > 0
    }
}

impl fmt::Display for BxDFType {
    /// Formats the flags as `BSDF_REFLECTION | BSDF_DIFFUSE`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_single_flags() {
        let t = BxDFType::BSDF_REFLECTION | BxDFType::BSDF_DIFFUSE;
        assert!(t.matches(BxDFType::BSDF_REFLECTION));
        assert!(t.matches(BxDFType::BSDF_DIFFUSE));
        assert!(!t.matches(BxDFType::BSDF_TRANSMISSION));
        assert!(BxDFType::BSDF_ALL.contains(t));
        assert_eq!(BxDFType::BSDF_ALL.bits(), 7);
        assert_eq!(format!("{}", t), "BSDF_REFLECTION | BSDF_DIFFUSE");
    }
}
