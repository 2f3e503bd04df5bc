#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `safenum` converts decimal text into numbers only when the conversion is
//! exact. A string is accepted when the whole of it is a well-formed numeral
//! and the resulting machine value reproduces the numeral's value without
//! truncation, rounding, or reinterpretation.
//!
//! Two independent primitives form the core:
//!
//! - [`try_parse_safe_integer`] accepts `[-]? DIGIT+` and returns the value
//!   when it lies in the safe-integer range `[-(2^53 - 1), 2^53 - 1]`.
//! - [`try_parse_safe_float`] accepts
//!   `[+-]? ( DIGIT+ (. DIGIT*)? | . DIGIT+ ) ( [eE] [+-]? DIGIT+ )?` and
//!   returns the nearest `f64` when at most
//!   [`MAX_SIGNIFICANT_DIGITS`] significant digits are involved, the magnitude
//!   does not exceed [`MAX_EXACT_MAGNITUDE`], and the value neither underflows
//!   to zero nor loses digits in the subnormal range.
//!
//! # Design
//!
//! Both primitives are pure functions returning a [`ParseOutcome`]. They never
//! allocate, never log, and never panic. The strict layer ([`parse_safe_int`],
//! [`parse_safe_float`], [`SafeInteger`], [`SafeFloat`]) wraps them and turns
//! an absent result into a [`SafeNumberError`] naming the rejected text.
//!
//! # Invariants
//!
//! - A present integer lies within [`MIN_SAFE_INTEGER`]`..=`[`MAX_SAFE_INTEGER`].
//! - A present float is finite, its magnitude is at most
//!   [`MAX_EXACT_MAGNITUDE`], and its shortest round-trip rendering carries
//!   the same significant digits as the accepted text.
//!
//! # Examples
//!
//! ```
//! use safenum::{try_parse_safe_float, try_parse_safe_integer};
//!
//! assert_eq!(try_parse_safe_integer("00003"), Some(3));
//! assert_eq!(try_parse_safe_integer("9007199254740992"), None);
//!
//! assert_eq!(try_parse_safe_float(".123"), Some(0.123));
//! assert_eq!(try_parse_safe_float("9007199254740993"), None);
//! assert_eq!(try_parse_safe_float("1e-1000"), None);
//! ```

mod digits;
mod float;
mod grammar;
mod integer;
#[cfg(feature = "serde")]
mod serde_support;
mod strict;

pub use crate::digits::DigitSpan;
pub use crate::float::{MAX_EXACT_MAGNITUDE, MAX_SIGNIFICANT_DIGITS, try_parse_safe_float};
pub use crate::grammar::is_float_numeral;
pub use crate::integer::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, try_parse_safe_integer};
pub use crate::strict::{
    SafeFloat, SafeInteger, SafeNumberError, SafeNumberErrorKind, parse_safe_float,
    parse_safe_float_bytes, parse_safe_int, parse_safe_int_bytes,
};

/// Result of a core conversion: `None` when the text is not an exact instance
/// of `T`, `Some(value)` otherwise.
pub type ParseOutcome<T> = Option<T>;
