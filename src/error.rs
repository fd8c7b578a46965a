//! Error types for hexlerp.

use std::num::ParseFloatError;

use thiserror::Error;

/// A hex color string could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The string (without an optional `#` prefix) is not 6 characters long.
    #[error("expected 6 hex digits, found {len}")]
    InvalidLength {
        /// Number of characters found after stripping the prefix.
        len: usize,
    },

    /// A character is not a hexadecimal digit.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit {
        /// Zero-based position of the character after the prefix.
        position: usize,
        /// The offending character.
        found: char,
    },
}

/// A Lab string or numeric value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The wrong number of comma separated values was supplied.
    #[error("expected {expected} components, found {found}")]
    ComponentCount {
        /// Number of values required.
        expected: usize,
        /// Number of values found.
        found: usize,
    },

    /// A value is not a valid floating point number.
    #[error("invalid number {input:?}")]
    InvalidNumber {
        /// The trimmed text that failed to parse.
        input: String,
        /// The underlying float parse error.
        #[source]
        source: ParseFloatError,
    },

    /// A value parsed, but is NaN or infinite.
    #[error("number {input:?} is not finite")]
    NotFinite {
        /// The trimmed text that was parsed.
        input: String,
    },
}

/// Any error raised by hexlerp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// See [`FormatError`].
    #[error(transparent)]
    Format(#[from] FormatError),

    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
}
