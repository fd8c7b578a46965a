//! Logic for an interactive color picker surface, independent of any UI
//! toolkit.
//!
//! Each color is edited through three linked fields: a hex text field, a
//! native color picker and a Lab text field. Editing one field derives the
//! other two through the update functions in this module. The caller owns
//! the widgets and writes the returned values back into them.

use std::{fmt, str::FromStr, sync::LazyLock};

use rand::Rng;
use regex::Regex;

use crate::{
    color::Component,
    error::{Error, FormatError, ParseError},
    interpolate::{hex_to_lab, lab_to_hex, lerp_hex},
    models::{Lab, Srgb},
};

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("hex color pattern is valid"));

/// Format a Lab color as `(L, a, b)` with 4 decimal places per component.
pub fn format_lab(lab: &Lab) -> String {
    format!("({:.4}, {:.4}, {:.4})", lab.lightness, lab.a, lab.b)
}

/// Parse a Lab color written as `(L, a, b)`. The parentheses are optional.
pub fn parse_lab(input: &str) -> Result<Lab, ParseError> {
    let input = input.trim();
    let input = input.strip_prefix('(').unwrap_or(input);
    let input = input.strip_suffix(')').unwrap_or(input);

    let parts = input.split(',').collect::<Vec<_>>();
    if parts.len() != 3 {
        return Err(ParseError::ComponentCount {
            expected: 3,
            found: parts.len(),
        });
    }

    let mut components = [0.0; 3];
    for (component, part) in components.iter_mut().zip(parts) {
        *component = parse_amount(part)?;
    }

    let [lightness, a, b] = components;
    Ok(Lab::new(lightness, a, b))
}

/// Parse a single finite floating point value, ignoring surrounding
/// whitespace.
pub fn parse_amount(input: &str) -> Result<Component, ParseError> {
    let input = input.trim();
    let value: Component = input.parse().map_err(|source| ParseError::InvalidNumber {
        input: input.to_string(),
        source,
    })?;

    if !value.is_finite() {
        return Err(ParseError::NotFinite {
            input: input.to_string(),
        });
    }

    Ok(value)
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_lab(self))
    }
}

impl FromStr for Lab {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_lab(s)
    }
}

/// Return true if `hex` is 6 hex digits with an optional `#` prefix.
pub fn validate_hex(hex: &str) -> bool {
    HEX_COLOR.is_match(hex)
}

/// Prefix `hex` with `#` if it doesn't have one yet.
pub fn add_missing_hex_prefix(hex: &str) -> String {
    if hex.starts_with('#') {
        hex.to_string()
    } else {
        format!("#{hex}")
    }
}

/// Pick a random light color, with every channel in `[100, 255]`.
pub fn random_light_hex<R: Rng>(rng: &mut R) -> String {
    Srgb::new(
        rng.random_range(100..=255),
        rng.random_range(100..=255),
        rng.random_range(100..=255),
    )
    .to_hex(true)
}

/// The three linked fields describing one color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFields {
    /// Value of the hex text field.
    pub hex: String,
    /// Value of the native color picker.
    pub picker: String,
    /// Value of the Lab text field.
    pub lab: String,
}

impl ColorFields {
    /// The hex field was edited. Returns `None` while the input is not a
    /// valid hex color, in which case no field should change.
    pub fn from_hex_input(hex: &str) -> Option<Self> {
        let hex = add_missing_hex_prefix(hex);
        if !validate_hex(&hex) {
            return None;
        }

        let lab = hex_to_lab(&hex).ok()?;

        Some(Self {
            lab: format_lab(&lab),
            picker: hex.clone(),
            hex,
        })
    }

    /// The color picker was changed.
    pub fn from_picker_input(picker: &str) -> Result<Self, FormatError> {
        let lab = hex_to_lab(picker)?;

        Ok(Self {
            hex: picker.to_string(),
            picker: picker.to_string(),
            lab: format_lab(&lab),
        })
    }

    /// The Lab field was edited. Out of gamut colors are saturated.
    pub fn from_lab_input(lab: &str) -> Result<Self, ParseError> {
        let hex = lab_to_hex(&parse_lab(lab)?, true);

        Ok(Self {
            picker: hex.clone(),
            hex,
            lab: lab.to_string(),
        })
    }
}

/// A hex text field together with the placeholder shown while it is empty.
#[derive(Clone, Copy, Debug)]
pub struct HexField<'a> {
    /// The current value of the field.
    pub value: &'a str,
    /// The placeholder used when the field is empty.
    pub placeholder: &'a str,
}

impl<'a> HexField<'a> {
    /// Create a new field.
    pub fn new(value: &'a str, placeholder: &'a str) -> Self {
        Self { value, placeholder }
    }

    /// The value of the field, falling back to the placeholder.
    pub fn resolved(&self) -> &'a str {
        if self.value.is_empty() {
            self.placeholder
        } else {
            self.value
        }
    }
}

/// The result of interpolating the two colors of the surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LerpOutput {
    /// The start color that was used, which is the placeholder if the start
    /// field was empty.
    pub start: String,
    /// The end color that was used, which is the placeholder if the end
    /// field was empty.
    pub end: String,
    /// The interpolated color as canonical hex.
    pub hex: String,
    /// The Lab string of the interpolated color.
    pub lab: String,
}

/// Interpolate the two hex fields by the slider `amount`. Returns
/// `Ok(None)` while either field holds an invalid hex color. Empty fields
/// fall back to their placeholder, which is returned so the caller can
/// write it into the field.
pub fn interpolate_fields(
    start: HexField<'_>,
    end: HexField<'_>,
    amount: &str,
) -> Result<Option<LerpOutput>, Error> {
    let t = parse_amount(amount)?;

    let (start, end) = (start.resolved(), end.resolved());
    if !(validate_hex(start) && validate_hex(end)) {
        tracing::trace!(start, end, "skipping interpolation of invalid hex");
        return Ok(None);
    }

    let hex = lerp_hex(start, end, t, true)?;
    let lab = format_lab(&hex_to_lab(&hex)?);

    Ok(Some(LerpOutput {
        start: start.to_string(),
        end: end.to_string(),
        hex,
        lab,
    }))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn format_lab_uses_four_decimals() {
        let lab = Lab::new(8.991442404369852, -0.2994953773598208, -0.0021104580243902493);
        assert_eq!(format_lab(&lab), "(8.9914, -0.2995, -0.0021)");
        assert_eq!(Lab::new(0.0, 0.0, 0.0).to_string(), "(0.0000, 0.0000, 0.0000)");
    }

    #[test]
    fn parse_lab_accepts_optional_parentheses() {
        let expected = Lab::new(50.0, -1.5, 2.25);
        assert_eq!(parse_lab("(50, -1.5, 2.25)"), Ok(expected));
        assert_eq!(parse_lab("50,-1.5,2.25"), Ok(expected));
        assert_eq!(parse_lab("(50, -1.5, 2.25"), Ok(expected));
        assert_eq!(" 50 , -1.5 , 2.25) ".parse::<Lab>(), Ok(expected));
    }

    #[test]
    fn parse_lab_errors() {
        assert_eq!(
            parse_lab("(1, 2)"),
            Err(ParseError::ComponentCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_lab("(1, 2, 3, 4)"),
            Err(ParseError::ComponentCount {
                expected: 3,
                found: 4
            })
        );
        assert!(matches!(
            parse_lab("(1, two, 3)"),
            Err(ParseError::InvalidNumber { input, .. }) if input == "two"
        ));
        assert_eq!(
            parse_lab(""),
            Err(ParseError::ComponentCount {
                expected: 3,
                found: 1
            })
        );
        assert!(matches!(
            parse_lab("(1, , 3)"),
            Err(ParseError::InvalidNumber { input, .. }) if input.is_empty()
        ));
        assert_eq!(
            parse_lab("(nan, 0, 0)"),
            Err(ParseError::NotFinite {
                input: "nan".to_string()
            })
        );
    }

    #[test]
    fn amounts_must_be_finite() {
        assert_eq!(parse_amount(" 0.25 "), Ok(0.25));
        assert_eq!(parse_amount("-1"), Ok(-1.0));

        for input in ["nan", "NaN", "inf", "-inf", "infinity", "1e400"] {
            assert_eq!(
                parse_amount(input),
                Err(ParseError::NotFinite {
                    input: input.to_string()
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn format_then_parse_is_close() {
        let lab = Lab::new(12.345678, -3.21, 0.5);
        let back = parse_lab(&format_lab(&lab)).unwrap();
        approx::assert_abs_diff_eq!(back.lightness, lab.lightness, epsilon = 5e-5);
        approx::assert_abs_diff_eq!(back.a, lab.a, epsilon = 5e-5);
        approx::assert_abs_diff_eq!(back.b, lab.b, epsilon = 5e-5);
    }

    #[test]
    fn hex_validation() {
        assert!(validate_hex("#a0B1c2"));
        assert!(validate_hex("a0B1c2"));
        assert!(!validate_hex("#a0B1c"));
        assert!(!validate_hex("#a0B1c2f"));
        assert!(!validate_hex("##a0B1c2"));
        assert!(!validate_hex("#a0B1cg"));
        assert!(!validate_hex(""));
    }

    #[test]
    fn missing_prefix() {
        assert_eq!(add_missing_hex_prefix("123456"), "#123456");
        assert_eq!(add_missing_hex_prefix("#123456"), "#123456");
    }

    #[test]
    fn random_light_colors_are_light() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let hex = random_light_hex(&mut rng);
            let srgb = Srgb::from_hex(&hex).unwrap();
            assert!(hex.starts_with('#'));
            assert!(srgb.red >= 100 && srgb.green >= 100 && srgb.blue >= 100);
        }
    }

    #[test]
    fn hex_input_updates_lab_and_picker() {
        let fields = ColorFields::from_hex_input("ffffff").unwrap();
        assert_eq!(fields.hex, "#ffffff");
        assert_eq!(fields.picker, "#ffffff");
        assert_eq!(fields.lab, "(8.9914, -0.2995, -0.0021)");

        assert_eq!(ColorFields::from_hex_input("fffff"), None);
        assert_eq!(ColorFields::from_hex_input("#fffffz"), None);
    }

    #[test]
    fn picker_input_updates_lab_and_hex() {
        let fields = ColorFields::from_picker_input("#000000").unwrap();
        assert_eq!(fields.hex, "#000000");
        assert_eq!(fields.picker, "#000000");
        assert_eq!(fields.lab, "(0.0000, 0.0000, 0.0000)");

        assert!(ColorFields::from_picker_input("#00").is_err());
    }

    #[test]
    fn lab_input_updates_picker_and_hex() {
        let fields = ColorFields::from_lab_input("(8.9914, -0.2995, -0.0021)").unwrap();
        assert_eq!(fields.hex, "#FFFFFF");
        assert_eq!(fields.picker, "#FFFFFF");
        assert_eq!(fields.lab, "(8.9914, -0.2995, -0.0021)");

        // Far outside of the gamut, saturated instead of failing.
        let fields = ColorFields::from_lab_input("(100, 0, 0)").unwrap();
        assert_eq!(fields.hex, "#FFFFFF");

        assert!(ColorFields::from_lab_input("(1, 2)").is_err());
    }

    #[test]
    fn interpolate_fields_uses_placeholders() {
        let output = interpolate_fields(
            HexField::new("", "#FF0000"),
            HexField::new("#0000ff", "#00FF00"),
            "0.5",
        )
        .unwrap()
        .unwrap();

        assert_eq!(output.start, "#FF0000");
        assert_eq!(output.end, "#0000ff");
        assert_eq!(output.hex, "#BC00BC");
        assert_eq!(output.lab, format_lab(&hex_to_lab("#BC00BC").unwrap()));

        let output = interpolate_fields(
            HexField::new("", "#000000"),
            HexField::new("", "#FFFFFF"),
            "1",
        )
        .unwrap()
        .unwrap();
        assert_eq!(output.start, "#000000");
        assert_eq!(output.end, "#FFFFFF");
        assert_eq!(output.hex, "#FFFFFF");
    }

    #[test]
    fn interpolate_fields_skips_invalid_hex() {
        let output = interpolate_fields(
            HexField::new("#FF00", "#FF0000"),
            HexField::new("#0000FF", "#0000FF"),
            "0.5",
        );
        assert_eq!(output, Ok(None));
    }

    #[test]
    fn interpolate_fields_rejects_bad_amounts() {
        let output = interpolate_fields(
            HexField::new("#FF0000", ""),
            HexField::new("#0000FF", ""),
            "half",
        );
        assert!(matches!(output, Err(Error::Parse(_))));

        let output = interpolate_fields(
            HexField::new("#000000", ""),
            HexField::new("#FFFFFF", ""),
            "nan",
        );
        assert!(matches!(output, Err(Error::Parse(ParseError::NotFinite { .. }))));
    }

    #[test]
    fn lab_input_rejects_non_finite_components() {
        assert!(matches!(
            ColorFields::from_lab_input("(nan, 0, 0)"),
            Err(ParseError::NotFinite { .. })
        ));
        assert!(matches!(
            ColorFields::from_lab_input("(50, inf, 0)"),
            Err(ParseError::NotFinite { .. })
        ));
    }
}
