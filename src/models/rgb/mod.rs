//! Model a color in the sRGB color space, gamma encoded as bytes or as
//! linear light.

use crate::{
    color::{Component, Flags},
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, XyzD65, D65},
};

pub mod gamma;

/// A gamma encoded sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Srgb {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Srgb {
    /// Create a new sRGB color from its channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Remove the gamma encoding from each channel.
    pub fn to_linear_light(&self) -> SrgbLinear {
        SrgbLinear::new(
            gamma::expand(self.red),
            gamma::expand(self.green),
            gamma::expand(self.blue),
        )
    }
}

hexlerp_macros::gen_model! {
    /// An sRGB color with no gamma encoding.
    pub struct SrgbLinear {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl SrgbLinear {
    /// Apply the sRGB gamma encoding and quantize to bytes. Out of gamut
    /// components are saturated.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_gamma_encoded_with_flags().0
    }

    /// Same as [`SrgbLinear::to_gamma_encoded`], but also return which
    /// channels had to be saturated.
    pub fn to_gamma_encoded_with_flags(&self) -> (Srgb, Flags) {
        let mut flags = Flags::empty();

        let mut channel = |value: Component, flag: Flags| {
            let (channel, clipped) = gamma::compress_with_clip(value);
            flags.set(flag, clipped);
            channel
        };

        let srgb = Srgb::new(
            channel(self.red, Flags::RED_CLIPPED),
            channel(self.green, Flags::GREEN_CLIPPED),
            channel(self.blue, Flags::BLUE_CLIPPED),
        );

        if !flags.is_empty() {
            tracing::debug!(?flags, linear = ?self, "saturated out of gamut channels");
        }

        (srgb, flags)
    }
}

impl ToXyz<D65> for SrgbLinear {
    fn to_xyz(&self) -> XyzD65 {
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.4124, 0.3596, 0.1805,
            0.2126, 0.7152, 0.0722,
            0.0193, 0.1192, 0.9505,
        );

        transform(&TO_XYZ, self.to_components()).into()
    }
}

impl From<XyzD65> for SrgbLinear {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        const FROM_XYZ: Transform = transform_3x3(
             3.2469, -1.5494, -0.4989,
            -0.9708,  1.8794,  0.0416,
             0.0558, -0.2042,  1.0570,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}
