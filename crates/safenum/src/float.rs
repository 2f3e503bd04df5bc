//! Exact-precision float parsing.

use crate::digits::DigitSpan;
use crate::grammar;

/// Largest number of significant decimal digits an accepted numeral may carry.
///
/// Every decimal with at most 15 significant digits survives a round trip
/// through a normal `f64`; 16 or 17 digits only sometimes do.
pub const MAX_SIGNIFICANT_DIGITS: usize = 15;

/// Largest accepted magnitude.
pub const MAX_EXACT_MAGNITUDE: f64 = 1.7e308;

/// Parses `raw` as a float whose value is represented exactly.
///
/// The whole string must match
/// `[+-]? ( DIGIT+ (. DIGIT*)? | . DIGIT+ ) ( [eE] [+-]? DIGIT+ )?`.
/// The numeral is then converted to the nearest `f64` and rejected when:
///
/// - the result is not finite or its magnitude exceeds [`MAX_EXACT_MAGNITUDE`];
/// - the mantissa has more than [`MAX_SIGNIFICANT_DIGITS`] significant digits
///   (leading and trailing zeros do not count);
/// - the result is zero although the mantissa has a non-zero digit;
/// - the result is subnormal and its shortest rendering does not reproduce the
///   mantissa's significant digits.
///
/// The checks are conservative: a few values that happen to be exactly
/// representable are rejected, but no lossy numeral is ever accepted.
///
/// # Examples
///
/// ```
/// use safenum::try_parse_safe_float;
///
/// assert_eq!(try_parse_safe_float("123.e53"), Some(1.23e55));
/// assert_eq!(try_parse_safe_float("00000111112222233333.00000"), Some(111_112_222_233_333.0));
/// assert_eq!(try_parse_safe_float("9007199254740991"), None);
/// assert_eq!(try_parse_safe_float("1.8e308"), None);
/// assert_eq!(try_parse_safe_float("1.23e4foo"), None);
/// ```
#[must_use]
pub fn try_parse_safe_float(raw: &str) -> Option<f64> {
    let numeral = grammar::scan_float(raw)?;

    let value: f64 = raw.parse().ok()?;
    if !value.is_finite() || value.abs() > MAX_EXACT_MAGNITUDE {
        return None;
    }

    let mantissa = numeral.mantissa();
    let span = DigitSpan::scan(mantissa);
    if span.significant_digits() > MAX_SIGNIFICANT_DIGITS {
        return None;
    }

    if value == 0.0 && span.has_significant_digits() {
        return None;
    }

    if value.is_subnormal() && !reproduces_digits(value, mantissa, &span) {
        return None;
    }

    Some(value)
}

/// Subnormals keep fewer than 15 decimal digits of precision, so the digit
/// budget alone cannot vouch for them.
fn reproduces_digits(value: f64, mantissa: &[u8], span: &DigitSpan) -> bool {
    let mut buffer = ryu::Buffer::new();
    let rendered = buffer.format_finite(value).as_bytes();
    let rendered_span = DigitSpan::scan(rendered);
    span.significant(mantissa)
        .eq(rendered_span.significant(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(value: Option<f64>) -> Option<u64> {
        value.map(f64::to_bits)
    }

    #[test]
    fn accepts_short_numerals() {
        assert_eq!(try_parse_safe_float("0"), Some(0.0));
        assert_eq!(try_parse_safe_float("3.14"), Some(3.14));
        assert_eq!(try_parse_safe_float("0.01"), Some(0.01));
        assert_eq!(try_parse_safe_float("1e-5"), Some(0.00001));
        assert_eq!(try_parse_safe_float("123e4"), Some(1_230_000.0));
        assert_eq!(try_parse_safe_float(".0e+0"), Some(0.0));
    }

    #[test]
    fn keeps_the_sign_of_zero() {
        assert_eq!(bits(try_parse_safe_float("-000")), Some((-0.0f64).to_bits()));
        assert_eq!(bits(try_parse_safe_float("-0.")), Some((-0.0f64).to_bits()));
        assert_eq!(bits(try_parse_safe_float("+.0")), Some(0.0f64.to_bits()));
    }

    #[test]
    fn leading_plus_is_accepted() {
        assert_eq!(try_parse_safe_float("+1"), Some(1.0));
        assert_eq!(try_parse_safe_float("+154"), Some(154.0));
    }

    #[test]
    fn enforces_significant_digit_budget() {
        assert_eq!(
            try_parse_safe_float("100000000000001"),
            Some(100_000_000_000_001.0)
        );
        assert_eq!(try_parse_safe_float("1000000000000001"), None);
        assert_eq!(try_parse_safe_float("9007199254740991"), None);
        assert_eq!(try_parse_safe_float("1.234567890123456e-300"), None);
        assert_eq!(try_parse_safe_float("00000111112222233333.44444"), None);
    }

    #[test]
    fn zero_padding_does_not_consume_the_budget() {
        assert_eq!(
            try_parse_safe_float("0000000000100000000000001.00000"),
            Some(100_000_000_000_001.0)
        );
        assert_eq!(
            try_parse_safe_float("10000000000000000000.00000"),
            Some(1e19)
        );
        assert_eq!(try_parse_safe_float("00000000000000000000.00001"), Some(1e-5));
    }

    #[test]
    fn enforces_magnitude_ceiling() {
        assert_eq!(try_parse_safe_float("1.7e308"), Some(1.7e308));
        assert_eq!(try_parse_safe_float("-17e307"), Some(-1.7e308));
        assert_eq!(try_parse_safe_float("1.69999999999999e308"), Some(1.69999999999999e308));
        assert_eq!(try_parse_safe_float("1.70000000000001e308"), None);
        assert_eq!(try_parse_safe_float("1.79999999999999e308"), None);
        assert_eq!(try_parse_safe_float("-1.8e308"), None);
        assert_eq!(try_parse_safe_float("1e1000"), None);
    }

    #[test]
    fn rejects_underflow_to_zero() {
        assert_eq!(try_parse_safe_float("1e-1000"), None);
        assert_eq!(try_parse_safe_float("-2e-324"), None);
        assert_eq!(bits(try_parse_safe_float("0e-1000")), Some(0.0f64.to_bits()));
    }

    #[test]
    fn subnormals_must_reproduce_their_digits() {
        assert_eq!(try_parse_safe_float("0.17e-309"), Some(1.7e-310));
        assert_eq!(try_parse_safe_float("1.7e-308"), Some(1.7e-308));
        assert_eq!(try_parse_safe_float("-1.234567890e-311"), Some(-1.23456789e-311));
        assert_eq!(try_parse_safe_float("5e-324"), Some(5e-324));
        assert_eq!(try_parse_safe_float("1.00000000000001e-310"), None);
        assert_eq!(try_parse_safe_float("0.100000000000001e-309"), None);
        assert_eq!(try_parse_safe_float("3e-324"), None);
    }

    #[test]
    fn rejects_what_the_grammar_rejects() {
        for text in ["inf", "-inf", "NaN", "infinity", "1a", "1.23e4e", "", "."] {
            assert_eq!(try_parse_safe_float(text), None, "{text:?}");
        }
    }
}
