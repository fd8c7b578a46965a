//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// A reference white used to normalize CIE-XYZ values.
pub trait WhitePoint {
    /// The X, Y and Z components of the reference white.
    const WHITE_POINT: Components;
}

/// D65 illuminant with the 2 degree standard observer, on a 0 to 100 scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D65;

impl WhitePoint for D65 {
    const WHITE_POINT: Components = Components(96.0489, 100.0, 108.8840);
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz<W: WhitePoint> {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<W>;
}

hexlerp_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl<W: WhitePoint> Xyz<W> {
    /// Divide each component by the matching component of the white point.
    pub fn normalized(&self) -> Components {
        let white = W::WHITE_POINT;
        Components(self.x / white.0, self.y / white.1, self.z / white.2)
    }
}

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;
