//! sRGB gamma encoding and decoding of single channels.

use crate::{color::Component, math::clamp};

/// Decode a gamma encoded 8-bit channel into linear light.
pub fn expand(channel: u8) -> Component {
    let value = channel as Component / 255.0;

    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear light value into an 8-bit channel. Values that encode
/// outside of `[0, 1]` are saturated.
pub fn compress(value: Component) -> u8 {
    compress_with_clip(value).0
}

/// Same as [`compress`], but also report whether the value was saturated.
pub fn compress_with_clip(value: Component) -> (u8, bool) {
    let encoded = if value <= 0.0031308 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    };

    let clipped = !(0.0..=1.0).contains(&encoded);
    let channel = (255.0 * clamp(encoded, 0.0, 1.0)).round_ties_even() as u8;

    (channel, clipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn expand_known_values() {
        assert_eq!(expand(0), 0.0);
        assert_eq!(expand(255), 1.0);
        // 10 / 255 is below the linear segment threshold.
        assert_component_eq!(expand(10), 10.0 / 255.0 / 12.92);
        assert_component_eq!(expand(128), 0.21586050011389926);
    }

    #[test]
    fn compress_known_values() {
        assert_eq!(compress(0.0), 0);
        assert_eq!(compress(1.0), 255);
        assert_eq!(compress(0.21586050011389926), 128);
        assert_eq!(compress(0.001), 3);
    }

    #[test]
    fn compress_saturates_out_of_range_values() {
        assert_eq!(compress_with_clip(-0.2), (0, true));
        assert_eq!(compress_with_clip(1.5), (255, true));
        assert_eq!(compress_with_clip(0.5), (188, false));
    }

    #[test]
    fn every_channel_survives_a_round_trip() {
        for channel in 0..=255u8 {
            assert_eq!(compress(expand(channel)), channel);
        }
    }
}
