//! Argument coercion shared by the engineering functions.
//!
//! Every public operation runs its arguments through these helpers before doing any arithmetic.
//! The order of checks matters: an incoming error sentinel wins over a type mismatch, which in
//! turn wins over a numeric-domain failure. Multi-argument functions therefore call
//! [`first_error`] across all arguments before coercing any of them.

use std::borrow::Cow;

use crate::value::{ErrorKind, Value};

/// Returns the first error sentinel among `args`, in argument order.
pub fn first_error<'a, I>(args: I) -> Result<(), ErrorKind>
where
    I: IntoIterator<Item = &'a Value>,
{
    match args.into_iter().find_map(|v| match v {
        Value::Error(e) => Some(*e),
        _ => None,
    }) {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Coerce an argument into the digit string consumed by radix decoding.
///
/// Numbers are rendered in base 10 first, so `BIN2DEC(101)` reads the digits `"101"`. Negative
/// numbers keep their `-` sign and are rejected by the decoder.
pub fn digit_text(value: &Value) -> Result<Cow<'_, str>, ErrorKind> {
    match value {
        Value::Error(e) => Err(*e),
        Value::Bool(_) => Err(ErrorKind::Value),
        Value::Blank => Ok(Cow::Borrowed("0")),
        Value::Number(n) => {
            if !n.is_finite() || n.fract() != 0.0 {
                return Err(ErrorKind::Num);
            }
            if *n == 0.0 {
                // Also covers -0.0, which would otherwise render as "-0".
                return Ok(Cow::Borrowed("0"));
            }
            Ok(Cow::Owned(format!("{n:.0}")))
        }
        Value::Text(s) => Ok(Cow::Borrowed(s.as_str())),
    }
}

/// Coerce an argument into a number for the decimal-input paths (encode, places, bitwise).
pub fn number(value: &Value) -> Result<f64, ErrorKind> {
    match value {
        Value::Error(e) => Err(*e),
        Value::Bool(_) => Err(ErrorKind::Value),
        Value::Blank => Ok(0.0),
        Value::Number(n) if n.is_finite() => Ok(*n),
        Value::Number(_) => Err(ErrorKind::Num),
        Value::Text(s) => parse_decimal_text(s).ok_or(ErrorKind::Value),
    }
}

/// Coerce an argument into an integer, rejecting fractional values with `#NUM!`.
pub fn integer(value: &Value) -> Result<i64, ErrorKind> {
    let n = number(value)?;
    exact_integer(n).ok_or(ErrorKind::Num)
}

pub(crate) fn exact_integer(n: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or beyond it does not fit in an i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if n.fract() != 0.0 || n >= LIMIT || n < -LIMIT {
        return None;
    }
    Some(n as i64)
}

/// Parse a plain base-10 literal: optional sign, digits with an optional fraction, optional
/// exponent. Surrounding ASCII whitespace is ignored.
///
/// `str::parse::<f64>` alone is too lenient here because it accepts `inf` and `NaN`.
fn parse_decimal_text(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let mantissa = match unsigned.find(['e', 'E']) {
        Some(idx) => {
            let exponent = &unsigned[idx + 1..];
            let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
            if exponent.is_empty() || !exponent.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            &unsigned[..idx]
        }
        None => unsigned,
    };

    let mut digits = 0usize;
    let mut dots = 0usize;
    for b in mantissa.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
