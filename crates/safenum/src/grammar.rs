//! Whole-string grammar validation for float numerals.
//!
//! `str::parse::<f64>` also accepts `inf`, `nan`, and `infinity`, so the
//! accepted shape is checked here before any conversion takes place.

use memchr::{memchr, memchr2};

/// A float numeral that matched
/// `[+-]? ( DIGIT+ (. DIGIT*)? | . DIGIT+ ) ( [eE] [+-]? DIGIT+ )?`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FloatNumeral<'a> {
    mantissa: &'a [u8],
}

impl<'a> FloatNumeral<'a> {
    /// Mantissa bytes without the sign: digits and at most one decimal point.
    pub(crate) const fn mantissa(&self) -> &'a [u8] {
        self.mantissa
    }
}

/// Reports whether `text` is shaped like a float numeral, without checking
/// whether its value is exact.
///
/// Every string [`try_parse_safe_float`](crate::try_parse_safe_float) or
/// [`try_parse_safe_integer`](crate::try_parse_safe_integer) accepts passes
/// this check; `"1e400"` and `"0.1000000000000001"` pass it too.
///
/// ```
/// use safenum::is_float_numeral;
///
/// assert!(is_float_numeral("-1.5e-3"));
/// assert!(is_float_numeral("-.5"));
/// assert!(!is_float_numeral("-v"));
/// assert!(!is_float_numeral("1e"));
/// ```
#[must_use]
pub fn is_float_numeral(text: &str) -> bool {
    scan_float(text).is_some()
}

/// Validates `text` against the float grammar.
pub(crate) fn scan_float(text: &str) -> Option<FloatNumeral<'_>> {
    let unsigned = strip_sign(text.as_bytes());

    let (mantissa, exponent) = match memchr2(b'e', b'E', unsigned) {
        Some(position) => (&unsigned[..position], Some(&unsigned[position + 1..])),
        None => (unsigned, None),
    };

    if !is_mantissa(mantissa) || exponent.is_some_and(|exponent| !is_exponent(exponent)) {
        return None;
    }

    Some(FloatNumeral { mantissa })
}

fn strip_sign(bytes: &[u8]) -> &[u8] {
    match bytes.split_first() {
        Some((b'-' | b'+', rest)) => rest,
        _ => bytes,
    }
}

fn is_digit_run(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

fn is_mantissa(bytes: &[u8]) -> bool {
    match memchr(b'.', bytes) {
        Some(position) => {
            let (integer, point_and_fraction) = bytes.split_at(position);
            let fraction = &point_and_fraction[1..];
            // A lone "." has no digit on either side.
            bytes.len() > 1 && is_digit_run(integer) && is_digit_run(fraction)
        }
        None => !bytes.is_empty() && is_digit_run(bytes),
    }
}

fn is_exponent(bytes: &[u8]) -> bool {
    let digits = strip_sign(bytes);
    !digits.is_empty() && is_digit_run(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_signed_integers() {
        for text in ["0", "00003", "-1", "+1", "+000", "1234567890"] {
            assert!(scan_float(text).is_some(), "{text:?} should match");
        }
    }

    #[test]
    fn accepts_digits_on_one_side_of_the_point() {
        for text in [".1", "0.", "+.0", "-0.", "123.", ".123", "3.14"] {
            assert!(scan_float(text).is_some(), "{text:?} should match");
        }
    }

    #[test]
    fn accepts_exponents_in_either_case_with_optional_sign() {
        for text in ["1E5", "1E-5", "1E+5", "123.e53", ".0e+0", "17e307"] {
            assert!(scan_float(text).is_some(), "{text:?} should match");
        }
    }

    #[test]
    fn rejects_ill_formed_strings() {
        for text in [
            "", "+", "-", ".", "0-", "123+", "e123", "a", "$33", "123foo", "0x30", "1\n2", "+.",
            "-.", "0.e-", "0e+", "e4", ".e4", "3.1.4", "-3.1.4", "3..14", "1.23e5.3",
            "1.23e-.3", "$1.23e4", "=1.23e4", "1.23e4foo", "1.23e4e", "1.1\n2.2", "--1", "+-1",
            " 1", "1 ", "inf", "NaN", "infinity", "1_000", "1,5",
        ] {
            assert!(scan_float(text).is_none(), "{text:?} should not match");
        }
    }

    #[test]
    fn mantissa_excludes_sign_and_exponent() {
        let numeral = scan_float("-12.50e-7").expect("well-formed");
        assert_eq!(numeral.mantissa(), b"12.50");

        let plain = scan_float("+42").expect("well-formed");
        assert_eq!(plain.mantissa(), b"42");

        let upper = scan_float(".5E+3").expect("well-formed");
        assert_eq!(upper.mantissa(), b".5");
    }

    #[test]
    fn numeral_shape_ignores_exactness() {
        for text in ["-1e+5", "-1.5e-3", "1e400", "0.1000000000000001", "-000"] {
            assert!(is_float_numeral(text), "{text:?}");
        }
        for text in ["-", "--", "-v", "-1e", "--1", "-m"] {
            assert!(!is_float_numeral(text), "{text:?}");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(scan_float("١٢٣").is_none());
        assert!(scan_float("1.５").is_none());
    }
}
