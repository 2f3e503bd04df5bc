//! Digit classification and significant-digit analysis shared by both checkers.

/// Returns the numeric value of an ASCII decimal digit.
#[inline]
pub(crate) const fn digit_value(byte: u8) -> Option<u8> {
    let digit = byte.wrapping_sub(b'0');
    if digit > 9 { None } else { Some(digit) }
}

/// Description of the digits in a numeral's mantissa.
///
/// Only ASCII digits before the first exponent marker (`e` or `E`) take part;
/// signs and the decimal point are skipped. Positions are byte offsets into the
/// slice handed to [`DigitSpan::scan`].
///
/// When the mantissa consists solely of zeros the leading and trailing zero
/// runs cover the same digits, and [`DigitSpan::significant_digits`] collapses
/// to zero.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DigitSpan {
    first_nonzero: Option<usize>,
    last_nonzero: Option<usize>,
    total_digits: usize,
    leading_zeros: usize,
    trailing_zeros: usize,
}

impl DigitSpan {
    /// Scans `text` up to its exponent marker and records the digit layout.
    #[must_use]
    pub fn scan(text: &[u8]) -> Self {
        let mut span = Self::default();

        for (position, &byte) in text.iter().enumerate() {
            if matches!(byte, b'e' | b'E') {
                break;
            }
            let Some(digit) = digit_value(byte) else {
                continue;
            };

            span.total_digits += 1;
            if digit == 0 {
                span.trailing_zeros += 1;
                if span.first_nonzero.is_none() {
                    span.leading_zeros += 1;
                }
            } else {
                span.trailing_zeros = 0;
                span.first_nonzero.get_or_insert(position);
                span.last_nonzero = Some(position);
            }
        }

        span
    }

    /// Byte offset of the first non-zero digit, if any.
    #[must_use]
    pub const fn first_nonzero(&self) -> Option<usize> {
        self.first_nonzero
    }

    /// Byte offset of the last non-zero digit, if any.
    #[must_use]
    pub const fn last_nonzero(&self) -> Option<usize> {
        self.last_nonzero
    }

    /// Number of decimal digits in the mantissa.
    #[must_use]
    pub const fn total_digits(&self) -> usize {
        self.total_digits
    }

    /// Zero digits preceding the first non-zero digit.
    #[must_use]
    pub const fn leading_zeros(&self) -> usize {
        self.leading_zeros
    }

    /// Zero digits following the last non-zero digit.
    #[must_use]
    pub const fn trailing_zeros(&self) -> usize {
        self.trailing_zeros
    }

    /// Digits between the first and last non-zero digit, inclusive.
    #[must_use]
    pub const fn significant_digits(&self) -> usize {
        self.total_digits
            .saturating_sub(self.leading_zeros + self.trailing_zeros)
    }

    /// Reports whether the mantissa contains at least one non-zero digit.
    #[must_use]
    pub const fn has_significant_digits(&self) -> bool {
        self.first_nonzero.is_some()
    }

    /// Iterates over the significant digits of `text`, which must be the slice
    /// this span was scanned from.
    pub fn significant<'a>(&self, text: &'a [u8]) -> impl Iterator<Item = u8> + use<'a> {
        let window: &[u8] = match (self.first_nonzero, self.last_nonzero) {
            (Some(first), Some(last)) => &text[first..=last],
            _ => &[],
        };
        window.iter().copied().filter(u8::is_ascii_digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_value_accepts_ascii_digits_only() {
        for (offset, byte) in (b'0'..=b'9').enumerate() {
            assert_eq!(digit_value(byte), Some(offset as u8));
        }
        for byte in [b'/', b':', b'.', b'e', b'-', b' ', 0, 0xff] {
            assert_eq!(digit_value(byte), None, "byte {byte:#x}");
        }
    }

    #[test]
    fn scan_counts_digits_around_decimal_point() {
        let span = DigitSpan::scan(b"0000000000100000000000001.00000");
        assert_eq!(span.total_digits(), 30);
        assert_eq!(span.leading_zeros(), 10);
        assert_eq!(span.trailing_zeros(), 5);
        assert_eq!(span.significant_digits(), 15);
        assert_eq!(span.first_nonzero(), Some(10));
        assert_eq!(span.last_nonzero(), Some(24));
    }

    #[test]
    fn scan_stops_at_exponent_marker() {
        let span = DigitSpan::scan(b"-1.234567890e-300");
        assert_eq!(span.total_digits(), 10);
        assert_eq!(span.trailing_zeros(), 1);
        assert_eq!(span.significant_digits(), 9);

        let upper = DigitSpan::scan(b"120E45");
        assert_eq!(upper.total_digits(), 3);
        assert_eq!(upper.significant_digits(), 2);
    }

    #[test]
    fn all_zero_mantissa_has_no_significant_digits() {
        let span = DigitSpan::scan(b"00000000000000000000.00000");
        assert_eq!(span.total_digits(), 25);
        assert_eq!(span.leading_zeros(), 25);
        assert_eq!(span.trailing_zeros(), 25);
        assert_eq!(span.significant_digits(), 0);
        assert!(!span.has_significant_digits());
        assert_eq!(span.significant(b"00000000000000000000.00000").count(), 0);
    }

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(DigitSpan::scan(b""), DigitSpan::default());
        assert_eq!(DigitSpan::scan(b"e12").total_digits(), 0);
    }

    #[test]
    fn significant_skips_decimal_point() {
        let text = b"000123.4500";
        let span = DigitSpan::scan(text);
        let digits: Vec<u8> = span.significant(text).collect();
        assert_eq!(digits, b"12345");
        assert_eq!(span.significant_digits(), 5);
    }

    #[test]
    fn significant_of_single_digit() {
        let text = b"0.00001";
        let span = DigitSpan::scan(text);
        assert_eq!(span.significant(text).collect::<Vec<_>>(), b"1");
        assert_eq!(span.leading_zeros(), 5);
        assert_eq!(span.trailing_zeros(), 0);
    }
}
