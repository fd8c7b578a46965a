//! Each color space is modeled with its own type. Conversions are only
//! implemented between neighbouring models of the pipeline:
//!
//! ```text
//! Srgb <-> SrgbLinear <-> XyzD65 <-> Lab
//! ```
//!
//! ```rust
//! use hexlerp::models::{Lab, Srgb, ToXyz};
//! let lab = Lab::from(
//!     Srgb::new(128, 0, 0)
//!         .to_linear_light()      // remove the gamma encoding.
//!         .to_xyz(),              // convert to xyz-d65.
//! );
//! ```

pub mod lab;
pub mod rgb;
pub mod xyz;

pub use lab::Lab;
pub use rgb::{Srgb, SrgbLinear};
pub use xyz::{ToXyz, WhitePoint, Xyz, XyzD65, D65};
