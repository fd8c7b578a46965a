//! Conversions along the full pipeline. Every step goes through the
//! neighbouring models, so the chain is:
//!
//! ```text
//! Srgb -> SrgbLinear -> XyzD65 -> Lab
//! Lab -> XyzD65 -> SrgbLinear -> Srgb
//! ```

use crate::{
    color::Flags,
    models::{Lab, Srgb, SrgbLinear, ToXyz},
};

impl Srgb {
    /// Convert this color to the CIE-Lab color space.
    pub fn to_lab(&self) -> Lab {
        Lab::from(self.to_linear_light().to_xyz())
    }
}

impl Lab {
    /// Convert this color to gamma encoded sRGB. Components that fall
    /// outside of the sRGB gamut are saturated.
    pub fn to_srgb(&self) -> Srgb {
        self.to_srgb_with_flags().0
    }

    /// Same as [`Lab::to_srgb`], but also return which channels were
    /// saturated.
    pub fn to_srgb_with_flags(&self) -> (Srgb, Flags) {
        SrgbLinear::from(self.to_xyz()).to_gamma_encoded_with_flags()
    }
}
