use hexlerp::{models::SrgbLinear, Srgb, ToXyz};

pub fn main() {
    // 128, 0, 0
    let srgb = Srgb::new(128, 0, 0);

    // 0.21586050011389926, 0.0, 0.0
    let linear = srgb.to_linear_light();

    // 0.08902087024697206, 0.045891942324214986, 0.004166107652198256
    let xyz = linear.to_xyz();

    // 0.41454021531306395, 1.8218131552934502, 0.6551351579464126
    let lab = hexlerp::Lab::from(xyz);

    let back = SrgbLinear::from(lab.to_xyz()).to_gamma_encoded();

    dbg!(srgb, linear, xyz, lab, back);
}
