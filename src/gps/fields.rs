// src/gps/fields.rs
//! Sentence tokenizing and per-field validation

use crate::error::DecodeError;
use std::str::Split;

/// Comma-separated fields of one sentence, borrowed from the input.
///
/// Empty segments come back as empty slices: a blank field is meaningful.
/// Skipping, taking and striding use the regular `Iterator` adapters.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    inner: Split<'a, char>,
}

impl<'a> Fields<'a> {
    pub const DELIMITER: char = ',';

    pub fn new(sentence: &'a str) -> Self {
        Self {
            inner: sentence.split(Self::DELIMITER),
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Pull the next token or report which field ran off the end.
pub fn next_field<'a, I>(fields: &mut I, name: &'static str) -> Result<&'a str, DecodeError>
where
    I: Iterator<Item = &'a str>,
{
    fields.next().ok_or(DecodeError::MissingField(name))
}

/// True if every character is an ASCII digit (vacuously true for `""`).
pub fn is_numeric(token: &str) -> bool {
    token.bytes().all(|c| c.is_ascii_digit())
}

/// True for a blank token or a plain `[-]digits[.digits]` decimal.
pub fn is_float_or_empty(token: &str) -> bool {
    if token.is_empty() {
        return true;
    }

    if token.matches('.').count() > 1 || token.matches('-').count() > 1 {
        return false;
    }

    let body = token.strip_prefix('-').unwrap_or(token);
    body.bytes().all(|c| c == b'.' || c.is_ascii_digit())
}

/// Validate a token that may be blank but must otherwise be a decimal.
pub fn check_float<'a>(token: &'a str, name: &'static str) -> Result<&'a str, DecodeError> {
    if is_float_or_empty(token) {
        Ok(token)
    } else {
        Err(DecodeError::MalformedField(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_empty_segments() {
        let fields: Vec<&str> = Fields::new("$GNVTG,0.00,T,,M").collect();
        assert_eq!(fields, vec!["$GNVTG", "0.00", "T", "", "M"]);
    }

    #[test]
    fn test_fields_skip_take_stride() {
        let sampled: Vec<&str> = Fields::new("$GNVTG,0.00,T,,M,0.00,N,0.00,K,N*2C")
            .skip(1)
            .step_by(2)
            .take(3)
            .collect();
        assert_eq!(sampled, vec!["0.00", "", "0.00"]);
    }

    #[test]
    fn test_fields_on_empty_input() {
        let fields: Vec<&str> = Fields::new("").collect();
        assert_eq!(fields, vec![""]);
    }

    #[test]
    fn test_next_field_reports_name() {
        let mut fields = Fields::new("a");
        assert_eq!(next_field(&mut fields, "first"), Ok("a"));
        assert_eq!(next_field(&mut fields, "second"), Err(DecodeError::MissingField("second")));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0123"));
        assert!(is_numeric(""));
        assert!(!is_numeric("1.0"));
        assert!(!is_numeric("-1"));
    }

    #[test]
    fn test_is_float_or_empty() {
        assert!(is_float_or_empty(""));
        assert!(is_float_or_empty("2932.004"));
        assert!(is_float_or_empty("-2932.004"));
        assert!(is_float_or_empty("12"));
        assert!(is_float_or_empty("."));
        assert!(!is_float_or_empty("1.2.3"));
        assert!(!is_float_or_empty("--1"));
        assert!(!is_float_or_empty("1-"));
        assert!(!is_float_or_empty("1e5"));
        assert!(!is_float_or_empty("*1E"));
        assert!(!is_float_or_empty("M"));
    }

    #[test]
    fn test_check_float() {
        assert_eq!(check_float("1.5", "hdop"), Ok("1.5"));
        assert_eq!(check_float("x", "hdop"), Err(DecodeError::MalformedField("hdop")));
    }

    #[test]
    fn test_check_float_returns_input_slice() {
        let sentence = String::from("$GNGGA,545.4,M");
        let altitude = {
            let token = Fields::new(&sentence).nth(1).unwrap();
            check_float(token, "altitude").unwrap()
        };
        assert_eq!(altitude, "545.4");
    }
}
