//! Engineering worksheet functions: fixed-width radix conversion and 48-bit bitwise arithmetic.

pub mod base;
pub mod bitwise;

pub use base::{
    convert, convert_with_places, decode, encode, encode_with_settings, fixed_base_to_decimal,
    fixed_base_to_fixed_base, fixed_decimal_to_fixed_base, BaseDescriptor, FixedBase, MAX_DIGITS,
};
pub use bitwise::{
    bit_and, bit_and_words, bit_lshift, bit_or, bit_or_words, bit_rshift, bit_xor, bit_xor_words,
    shift_word, MAX_SHIFT, WORD_BITS, WORD_LIMIT,
};
