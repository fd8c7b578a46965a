//! Model a color in the CIE-Lab color space.

use crate::{
    color::{Component, Components},
    models::xyz::{ToXyz, WhitePoint, XyzD65, D65},
};

const DELTA: Component = 6.0 / 29.0;

/// The nonlinear part of the forward Lab transform.
fn f(t: Component) -> Component {
    if t > DELTA.powf(3.0) {
        t.powf(1.0 / 3.0)
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Inverse of [`f`].
fn f_inverse(t: Component) -> Component {
    if t > DELTA {
        t.powf(3.0)
    } else {
        3.0 * DELTA.powf(2.0) * (t - 4.0 / 29.0)
    }
}

hexlerp_macros::gen_model! {
    /// A color in the CIE-Lab color space, relative to the D65 white point.
    pub struct Lab {
        /// The lightness component.
        pub lightness: Component,
        /// The a component (green to red).
        pub a: Component,
        /// The b component (blue to yellow).
        pub b: Component,
    }
}

impl ToXyz<D65> for Lab {
    fn to_xyz(&self) -> XyzD65 {
        let white = D65::WHITE_POINT;

        let f1 = (self.lightness + 16.0) / 116.0;

        XyzD65::new(
            white.0 * f_inverse(f1 + self.a / 500.0),
            white.1 * f_inverse(f1),
            white.2 * f_inverse(f1 - self.b / 200.0),
        )
    }
}

impl From<XyzD65> for Lab {
    fn from(value: XyzD65) -> Self {
        let Components(f0, f1, f2) = value.normalized().map(f);

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn piecewise_functions_meet_at_the_threshold() {
        let t = DELTA.powf(3.0);
        assert_component_eq!(f(t), DELTA);
        assert_component_eq!(f_inverse(DELTA), t);
    }

    #[test]
    fn f_inverse_undoes_f() {
        for t in [0.0, 0.001, 0.008, 0.01, 0.2, 0.5, 1.0, 2.0] {
            assert_component_eq!(f_inverse(f(t)), t);
        }
    }

    #[test]
    fn black_is_zero() {
        let lab = Lab::from(XyzD65::new(0.0, 0.0, 0.0));
        assert_eq!(lab, Lab::new(0.0, 0.0, 0.0));

        let xyz = Lab::new(0.0, 0.0, 0.0).to_xyz();
        assert_eq!(xyz, XyzD65::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn white_point_is_neutral() {
        let lab = Lab::from(XyzD65::from(D65::WHITE_POINT));
        assert_component_eq!(lab.lightness, 100.0);
        assert_component_eq!(lab.a, 0.0);
        assert_component_eq!(lab.b, 0.0);
    }

    #[test]
    fn xyz_round_trip() {
        let xyz = XyzD65::new(0.3, 0.2, 0.1);
        let back = Lab::from(xyz).to_xyz();
        assert_component_eq!(back.x, xyz.x);
        assert_component_eq!(back.y, xyz.y);
        assert_component_eq!(back.z, xyz.z);
    }
}
