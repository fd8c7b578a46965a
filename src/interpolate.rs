//! Linear interpolation of colors in the CIE-Lab color space.

use num_traits::Float;

use crate::{
    color::Component,
    error::FormatError,
    hex,
    models::{Lab, Srgb},
};

/// Linearly interpolate between `a` and `b`. `t` is not clamped, so values
/// outside of `[0, 1]` extrapolate.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}

impl Lab {
    /// Linearly interpolate from this color to another using `t` as the
    /// progress between them.
    pub fn interpolate(&self, other: &Self, t: Component) -> Lab {
        self.to_components()
            .zip_with(&other.to_components(), |a, b| lerp(a, b, t))
            .into()
    }
}

/// Convert a hex color to CIE-Lab.
pub fn hex_to_lab(hex: &str) -> Result<Lab, FormatError> {
    hex::decode(hex).map(|srgb| srgb.to_lab())
}

/// Convert a CIE-Lab color to hex, saturating out of gamut components.
pub fn lab_to_hex(lab: &Lab, prefix: bool) -> String {
    lab.to_srgb().to_hex(prefix)
}

/// Interpolate between two hex colors in CIE-Lab and return the result as
/// hex. At `t == 0` the result is `hex1` and at `t == 1` it is `hex2`, both
/// in canonical uppercase form.
pub fn lerp_hex(hex1: &str, hex2: &str, t: Component, prefix: bool) -> Result<String, FormatError> {
    let start = hex_to_lab(hex1)?;
    let end = hex_to_lab(hex2)?;

    let lab = start.interpolate(&end, t);
    tracing::trace!(hex1, hex2, t, ?lab, "interpolated");

    Ok(lab_to_hex(&lab, prefix))
}

/// Return `steps` colors evenly spaced from `hex1` to `hex2`, both ends
/// included.
pub fn gradient(
    hex1: &str,
    hex2: &str,
    steps: usize,
    prefix: bool,
) -> Result<Vec<String>, FormatError> {
    let start = hex_to_lab(hex1)?;
    let end = hex_to_lab(hex2)?;

    let colors = (0..steps)
        .map(|i| {
            let t = if steps > 1 {
                i as Component / (steps - 1) as Component
            } else {
                0.0
            };
            lab_to_hex(&start.interpolate(&end, t), prefix)
        })
        .collect();

    Ok(colors)
}

impl Srgb {
    /// Interpolate from this color to `other` in CIE-Lab.
    pub fn interpolate(&self, other: &Self, t: Component) -> Srgb {
        self.to_lab().interpolate(&other.to_lab(), t).to_srgb()
    }
}
