//! Exact safe-integer parsing.

use crate::digits::digit_value;

/// Largest integer `n` such that `n` and `n + 1` are both exactly
/// representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Smallest safe integer (`-(2^53 - 1)`).
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

/// Parses `raw` as a safe integer.
///
/// The whole string must match `[-]? DIGIT+`: an optional leading minus
/// followed by one or more ASCII digits. A leading `+`, whitespace, a decimal
/// point, or an exponent are all rejected. Leading zeros are permitted and do
/// not affect the value, so `"00003"` yields `3` and `"-000"` yields `0`.
///
/// Returns `None` when the string does not match or when the magnitude
/// exceeds [`MAX_SAFE_INTEGER`].
///
/// # Examples
///
/// ```
/// use safenum::{MAX_SAFE_INTEGER, try_parse_safe_integer};
///
/// assert_eq!(try_parse_safe_integer("-1099511627776"), Some(-1_099_511_627_776));
/// assert_eq!(try_parse_safe_integer("9007199254740991"), Some(MAX_SAFE_INTEGER));
/// assert_eq!(try_parse_safe_integer("9007199254740992"), None);
/// assert_eq!(try_parse_safe_integer("+1"), None);
/// assert_eq!(try_parse_safe_integer("3.14"), None);
/// ```
#[must_use]
pub fn try_parse_safe_integer(raw: &str) -> Option<i64> {
    let bytes = raw.as_bytes();
    let (negative, digits) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };

    if digits.is_empty() {
        return None;
    }

    // The accumulator is bounded by the safe range on every step, so
    // `MAX_SAFE_INTEGER * 10 + 9` is the largest value it ever holds.
    let mut magnitude = 0i64;
    for &byte in digits {
        let digit = digit_value(byte)?;
        magnitude = magnitude * 10 + i64::from(digit);
        if magnitude > MAX_SAFE_INTEGER {
            return None;
        }
    }

    Some(if negative { -magnitude } else { magnitude })
}
