// src/gps/fixed.rs
//! Decimal token to scaled-integer conversion.
//!
//! NMEA carries real values as decimal text. They are kept as integers with a
//! fixed number of implied fractional digits so `2932.004` stays exactly
//! `2932004` instead of drifting through a binary float.

use super::data::{MicroDec, MilliDec};
use std::iter;

/// Parse an optional `-` followed by leading ASCII digits.
///
/// Stops at the first non-digit; no digits at all yields 0. Saturates on
/// overflow.
pub fn leading_int(token: &str) -> i32 {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, c| acc.saturating_mul(10).saturating_add((c - b'0') as i32));

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Convert `[-]digits[.digits]` into an integer scaled by `10^DIGITS`.
///
/// The fraction is zero-padded or truncated (never rounded) to `DIGITS`
/// places, and the sign applies to the whole value.
pub fn to_scaled_int<const DIGITS: u32>(token: &str) -> i32 {
    let scale = 10i32.pow(DIGITS);

    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

    let integral = leading_int(int_part);
    let decimal = frac_part
        .bytes()
        .take_while(u8::is_ascii_digit)
        .chain(iter::repeat(b'0'))
        .take(DIGITS as usize)
        .fold(0i32, |acc, c| acc * 10 + (c - b'0') as i32);

    let magnitude = integral.saturating_mul(scale).saturating_add(decimal);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

pub fn to_milli_dec(token: &str) -> MilliDec {
    MilliDec(to_scaled_int::<3>(token))
}

pub fn to_micro_dec(token: &str) -> MicroDec {
    MicroDec(to_scaled_int::<6>(token))
}

/// Empty token means the field was left blank by the receiver.
pub fn to_opt_milli_dec(token: &str) -> Option<MilliDec> {
    if token.is_empty() {
        None
    } else {
        Some(to_milli_dec(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_only() {
        assert_eq!(to_milli_dec("1"), MilliDec(1000));
        assert_eq!(to_milli_dec("0"), MilliDec(0));
        assert_eq!(to_micro_dec("12"), MicroDec(12_000_000));
    }

    #[test]
    fn test_fraction_padded_and_truncated() {
        assert_eq!(to_milli_dec("2932.004"), MilliDec(2932004));
        assert_eq!(to_milli_dec("1.1"), MilliDec(1100));
        assert_eq!(to_milli_dec("0.0001"), MilliDec(0));
        assert_eq!(to_milli_dec("0.9999"), MilliDec(999));
        assert_eq!(to_micro_dec(".8963"), MicroDec(896300));
        assert_eq!(to_micro_dec(".12345678"), MicroDec(123456));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(to_milli_dec("-2.5"), MilliDec(-2500));
        assert_eq!(to_milli_dec("-2932.004"), MilliDec(-2932004));
        assert_eq!(to_milli_dec("-0.5"), MilliDec(-500));
    }

    #[test]
    fn test_degenerate_tokens() {
        assert_eq!(to_milli_dec("."), MilliDec(0));
        assert_eq!(to_milli_dec("5."), MilliDec(5000));
        assert_eq!(to_milli_dec(".5"), MilliDec(500));
        assert_eq!(to_milli_dec("-"), MilliDec(0));
    }

    #[test]
    fn test_optional_conversion() {
        assert_eq!(to_opt_milli_dec(""), None);
        assert_eq!(to_opt_milli_dec("0.00"), Some(MilliDec(0)));
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(leading_int("41"), 41);
        assert_eq!(leading_int("-41"), -41);
        assert_eq!(leading_int(""), 0);
        assert_eq!(leading_int("12ab"), 12);
        assert_eq!(leading_int("99999999999999"), i32::MAX);
    }
}
