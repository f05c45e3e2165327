use crate::coercion;
use crate::value::{ErrorKind, Value};

/// Width of the unsigned words accepted by BITAND/BITOR/BITXOR/BITLSHIFT/BITRSHIFT.
pub const WORD_BITS: u32 = 48;
/// Exclusive upper bound of a word: `2^48`.
pub const WORD_LIMIT: u64 = 1 << WORD_BITS;
/// Largest shift magnitude accepted by BITLSHIFT/BITRSHIFT.
pub const MAX_SHIFT: i64 = 53;

pub fn bit_and_words(x: u64, y: u64) -> u64 {
    x & y
}

pub fn bit_or_words(x: u64, y: u64) -> u64 {
    x | y
}

pub fn bit_xor_words(x: u64, y: u64) -> u64 {
    x ^ y
}

/// Shift `word` left by `amount` bits, or right when `amount` is negative.
///
/// `word` must already be a valid 48-bit word. Left shifts that carry any bit to position 48 or
/// above fail with `#NUM!`; right shifts can only lose bits.
pub fn shift_word(word: u64, amount: i64) -> Result<u64, ErrorKind> {
    debug_assert!(word < WORD_LIMIT);
    if amount.unsigned_abs() > MAX_SHIFT.unsigned_abs() {
        log::trace!("shift amount {amount} exceeds {MAX_SHIFT}");
        return Err(ErrorKind::Num);
    }

    let shift = amount.unsigned_abs() as u32;
    if amount >= 0 {
        let shifted = u128::from(word) << shift;
        if shifted >= u128::from(WORD_LIMIT) {
            log::trace!("{word} << {shift} overflows {WORD_BITS} bits");
            return Err(ErrorKind::Num);
        }
        Ok(shifted as u64)
    } else {
        Ok(word >> shift)
    }
}

pub fn bit_and(x: &Value, y: &Value) -> Result<u64, ErrorKind> {
    let (x, y) = word_operands(x, y)?;
    Ok(bit_and_words(x, y))
}

pub fn bit_or(x: &Value, y: &Value) -> Result<u64, ErrorKind> {
    let (x, y) = word_operands(x, y)?;
    Ok(bit_or_words(x, y))
}

pub fn bit_xor(x: &Value, y: &Value) -> Result<u64, ErrorKind> {
    let (x, y) = word_operands(x, y)?;
    Ok(bit_xor_words(x, y))
}

pub fn bit_lshift(number: &Value, amount: &Value) -> Result<u64, ErrorKind> {
    let (word, amount) = shift_operands(number, amount)?;
    shift_word(word, amount)
}

pub fn bit_rshift(number: &Value, amount: &Value) -> Result<u64, ErrorKind> {
    let (word, amount) = shift_operands(number, amount)?;
    shift_word(word, amount.checked_neg().ok_or(ErrorKind::Num)?)
}

fn word_operands(x: &Value, y: &Value) -> Result<(u64, u64), ErrorKind> {
    coercion::first_error([x, y])?;
    let x = coercion::number(x)?;
    let y = coercion::number(y)?;
    Ok((word(x)?, word(y)?))
}

fn shift_operands(number: &Value, amount: &Value) -> Result<(u64, i64), ErrorKind> {
    coercion::first_error([number, amount])?;
    let number = coercion::number(number)?;
    let amount = coercion::number(amount)?;

    let word = word(number)?;
    let amount = coercion::exact_integer(amount).ok_or(ErrorKind::Num)?;
    Ok((word, amount))
}

fn word(n: f64) -> Result<u64, ErrorKind> {
    if n < 0.0 || n >= WORD_LIMIT as f64 || n.fract() != 0.0 {
        return Err(ErrorKind::Num);
    }
    Ok(n as u64)
}
