//! Hexadecimal notation for [`Srgb`] colors, e.g. `#80FF00`.

use std::{fmt, str::FromStr};

use crate::{error::FormatError, models::Srgb};

/// Decode a 6 digit hex color, with or without a leading `#`. Digits are
/// case-insensitive.
pub fn decode(hex: &str) -> Result<Srgb, FormatError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let len = digits.chars().count();
    if len != 6 {
        return Err(FormatError::InvalidLength { len });
    }

    let mut nibbles = [0u8; 6];
    for (position, (nibble, found)) in nibbles.iter_mut().zip(digits.chars()).enumerate() {
        *nibble = found
            .to_digit(16)
            .ok_or(FormatError::InvalidDigit { position, found })? as u8;
    }

    let byte = |i: usize| (nibbles[i] << 4) | nibbles[i + 1];

    Ok(Srgb::new(byte(0), byte(2), byte(4)))
}

/// Encode a color as 6 uppercase hex digits, prefixed with `#` if
/// `prefix` is set.
pub fn encode(srgb: &Srgb, prefix: bool) -> String {
    format!(
        "{}{:02X}{:02X}{:02X}",
        if prefix { "#" } else { "" },
        srgb.red,
        srgb.green,
        srgb.blue
    )
}

/// Return the canonical (uppercase, `#` prefixed) form of a hex color.
pub fn canonicalize(hex: &str) -> Result<String, FormatError> {
    decode(hex).map(|srgb| encode(&srgb, true))
}

impl Srgb {
    /// See [`decode`].
    pub fn from_hex(hex: &str) -> Result<Self, FormatError> {
        decode(hex)
    }

    /// See [`encode`].
    pub fn to_hex(&self, prefix: bool) -> String {
        encode(self, prefix)
    }
}

impl FromStr for Srgb {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self, true))
    }
}
