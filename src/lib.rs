//! hexlerp converts colors between hex sRGB, linear sRGB, CIE-XYZ and
//! CIE-Lab, and interpolates hex colors in CIE-Lab.
//!
//! ```rust
//! let mid = hexlerp::lerp_hex("#FF0000", "#0000FF", 0.5, true).unwrap();
//! assert_eq!(mid, "#BC00BC");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
pub mod hex;
mod interpolate;
mod math;
pub mod models;
pub mod surface;


pub use color::{Component, Components, Flags};
pub use error::{Error, FormatError, ParseError};
pub use interpolate::{gradient, hex_to_lab, lab_to_hex, lerp, lerp_hex};
pub use math::clamp;
pub use models::{Lab, Srgb, SrgbLinear, ToXyz, XyzD65};
