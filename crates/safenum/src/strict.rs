//! Strict wrappers that turn an absent result into a descriptive error.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::float::try_parse_safe_float;
use crate::integer::try_parse_safe_integer;

/// Broad classification of a [`SafeNumberError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SafeNumberErrorKind {
    /// The input was text but not an exact instance of the requested number.
    Range,
    /// The input was not text at all.
    Type,
}

/// Error returned by the strict parsers.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SafeNumberError {
    /// The text is not a well-formed safe integer.
    #[error("the string {raw:?} cannot be parsed to a safe integer")]
    NotSafeInteger {
        /// The rejected input.
        raw: String,
    },
    /// The text is not a well-formed float or cannot be represented exactly.
    #[error("the string {raw:?} cannot be parsed to a number without loss of precision")]
    NotExactFloat {
        /// The rejected input.
        raw: String,
    },
    /// The input bytes are not UTF-8 text.
    #[error("expected a string value, but got {len} bytes that are not valid UTF-8 after byte {valid_up_to}")]
    NotText {
        /// Length of the rejected input in bytes.
        len: usize,
        /// Number of leading bytes that formed valid UTF-8.
        valid_up_to: usize,
    },
}

impl SafeNumberError {
    /// Returns whether the failure concerns the value or the input type.
    #[must_use]
    pub const fn kind(&self) -> SafeNumberErrorKind {
        match self {
            Self::NotSafeInteger { .. } | Self::NotExactFloat { .. } => SafeNumberErrorKind::Range,
            Self::NotText { .. } => SafeNumberErrorKind::Type,
        }
    }

    /// Returns the rejected text for range errors.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::NotSafeInteger { raw } | Self::NotExactFloat { raw } => Some(raw.as_str()),
            Self::NotText { .. } => None,
        }
    }
}

/// Parses `raw` as a safe integer, failing with
/// [`SafeNumberError::NotSafeInteger`] when [`try_parse_safe_integer`] rejects it.
pub fn parse_safe_int(raw: &str) -> Result<i64, SafeNumberError> {
    try_parse_safe_integer(raw).ok_or_else(|| {
        debug!(target: "safenum::strict", raw, "rejected safe integer");
        SafeNumberError::NotSafeInteger {
            raw: raw.to_owned(),
        }
    })
}

/// Parses `raw` as an exactly representable float, failing with
/// [`SafeNumberError::NotExactFloat`] when [`try_parse_safe_float`] rejects it.
pub fn parse_safe_float(raw: &str) -> Result<f64, SafeNumberError> {
    try_parse_safe_float(raw).ok_or_else(|| {
        debug!(target: "safenum::strict", raw, "rejected exact float");
        SafeNumberError::NotExactFloat {
            raw: raw.to_owned(),
        }
    })
}

/// Byte-oriented variant of [`parse_safe_int`] for wire-format fields.
///
/// Input that is not UTF-8 fails with [`SafeNumberError::NotText`].
pub fn parse_safe_int_bytes(raw: &[u8]) -> Result<i64, SafeNumberError> {
    parse_safe_int(text_from_bytes(raw)?)
}

/// Byte-oriented variant of [`parse_safe_float`] for wire-format fields.
///
/// Input that is not UTF-8 fails with [`SafeNumberError::NotText`].
pub fn parse_safe_float_bytes(raw: &[u8]) -> Result<f64, SafeNumberError> {
    parse_safe_float(text_from_bytes(raw)?)
}

fn text_from_bytes(raw: &[u8]) -> Result<&str, SafeNumberError> {
    std::str::from_utf8(raw).map_err(|error| {
        debug!(
            target: "safenum::strict",
            len = raw.len(),
            valid_up_to = error.valid_up_to(),
            "rejected non-text input"
        );
        SafeNumberError::NotText {
            len: raw.len(),
            valid_up_to: error.valid_up_to(),
        }
    })
}

/// An integer parsed from text that lies within the safe range.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SafeInteger(i64);

impl SafeInteger {
    /// Returns the parsed value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for SafeInteger {
    type Err = SafeNumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_safe_int(text).map(Self)
    }
}

impl TryFrom<&str> for SafeInteger {
    type Error = SafeNumberError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl TryFrom<&[u8]> for SafeInteger {
    type Error = SafeNumberError;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        parse_safe_int_bytes(raw).map(Self)
    }
}

impl From<SafeInteger> for i64 {
    fn from(value: SafeInteger) -> Self {
        value.0
    }
}

impl fmt::Display for SafeInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A float parsed from text whose value is represented exactly.
///
/// The wrapped value is always finite. [`Display`](fmt::Display) renders the
/// shortest text that parses back to the same value.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SafeFloat(f64);

impl SafeFloat {
    /// Returns the parsed value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl FromStr for SafeFloat {
    type Err = SafeNumberError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_safe_float(text).map(Self)
    }
}

impl TryFrom<&str> for SafeFloat {
    type Error = SafeNumberError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl TryFrom<&[u8]> for SafeFloat {
    type Error = SafeNumberError;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        parse_safe_float_bytes(raw).map(Self)
    }
}

impl From<SafeFloat> for f64 {
    fn from(value: SafeFloat) -> Self {
        value.0
    }
}

impl fmt::Display for SafeFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = ryu::Buffer::new();
        f.write_str(buffer.format_finite(self.0))
    }
}
