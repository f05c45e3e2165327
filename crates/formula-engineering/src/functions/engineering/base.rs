use crate::coercion;
use crate::settings::{EngineeringSettings, NegativePlaces};
use crate::value::{ErrorKind, Value};

/// The fixed-width numeral bases used by BIN2DEC, DEC2OCT, HEX2BIN and friends.
///
/// Each base is limited to 10 digits, which fixes its two's complement width:
/// - binary: 10 bits
/// - octal: 30 bits
/// - hexadecimal: 40 bits
///
/// A decoded pattern at or above `2^(width-1)` is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedBase {
    Bin,
    Oct,
    Hex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseDescriptor {
    pub radix: u32,
    pub bits_per_digit: u32,
    pub alphabet: &'static str,
}

impl BaseDescriptor {
    pub const fn width(&self) -> u32 {
        MAX_DIGITS as u32 * self.bits_per_digit
    }

    pub const fn threshold(&self) -> u64 {
        1u64 << (self.width() - 1)
    }
}

/// Digit-count ceiling for both input and output strings.
pub const MAX_DIGITS: usize = 10;

static DESCRIPTORS: [BaseDescriptor; 3] = [
    BaseDescriptor {
        radix: 2,
        bits_per_digit: 1,
        alphabet: "01",
    },
    BaseDescriptor {
        radix: 8,
        bits_per_digit: 3,
        alphabet: "01234567",
    },
    BaseDescriptor {
        radix: 16,
        bits_per_digit: 4,
        alphabet: "0123456789ABCDEF",
    },
];

impl FixedBase {
    pub const ALL: [FixedBase; 3] = [FixedBase::Bin, FixedBase::Oct, FixedBase::Hex];

    pub fn from_radix(radix: u32) -> Option<Self> {
        match radix {
            2 => Some(FixedBase::Bin),
            8 => Some(FixedBase::Oct),
            16 => Some(FixedBase::Hex),
            _ => None,
        }
    }

    pub fn descriptor(self) -> &'static BaseDescriptor {
        match self {
            FixedBase::Bin => &DESCRIPTORS[0],
            FixedBase::Oct => &DESCRIPTORS[1],
            FixedBase::Hex => &DESCRIPTORS[2],
        }
    }

    pub fn radix(self) -> u32 {
        self.descriptor().radix
    }

    pub fn bits_per_digit(self) -> u32 {
        self.descriptor().bits_per_digit
    }

    pub fn bits(self) -> u32 {
        self.descriptor().width()
    }

    pub fn threshold(self) -> u64 {
        self.descriptor().threshold()
    }

    pub fn alphabet(self) -> &'static str {
        self.descriptor().alphabet
    }

    pub const fn max_digits(self) -> usize {
        MAX_DIGITS
    }

    pub fn min_signed(self) -> i64 {
        -(self.threshold() as i64)
    }

    pub fn max_signed(self) -> i64 {
        self.threshold() as i64 - 1
    }
}

impl TryFrom<u32> for FixedBase {
    type Error = ErrorKind;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        FixedBase::from_radix(radix).ok_or(ErrorKind::Num)
    }
}

pub fn fixed_base_to_decimal(text: &str, base: FixedBase) -> Result<i64, ErrorKind> {
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return Err(ErrorKind::Num);
    }

    if trimmed.len() > base.max_digits() {
        log::trace!("{trimmed:?} exceeds {} digits", base.max_digits());
        return Err(ErrorKind::Num);
    }

    let unsigned = parse_unsigned_fixed(trimmed, base)?;
    Ok(twos_complement_to_i64(unsigned, base))
}

pub fn fixed_decimal_to_fixed_base(
    value: i64,
    base: FixedBase,
    places: Option<usize>,
    settings: &EngineeringSettings,
) -> Result<String, ErrorKind> {
    if value < base.min_signed() || value > base.max_signed() {
        log::trace!("{value} outside the {}-bit signed range", base.bits());
        return Err(ErrorKind::Num);
    }

    if let Some(p) = places {
        if p > settings.max_places {
            return Err(ErrorKind::Num);
        }
    }

    let raw = to_radix_upper(i64_to_twos_complement(value, base), base.radix());
    let places = match (places, settings.negative_places) {
        (_, NegativePlaces::Ignore) if value < 0 => None,
        (places, _) => places,
    };

    match places {
        None => Ok(raw),
        Some(p) => {
            if raw.len() > p {
                return Err(ErrorKind::Num);
            }
            Ok(pad_left(&raw, p, '0'))
        }
    }
}

pub fn fixed_base_to_fixed_base(
    text: &str,
    src: FixedBase,
    dst: FixedBase,
    places: Option<usize>,
    settings: &EngineeringSettings,
) -> Result<String, ErrorKind> {
    let value = fixed_base_to_decimal(text, src)?;
    fixed_decimal_to_fixed_base(value, dst, places, settings)
}

/// `BIN2DEC` / `OCT2DEC` / `HEX2DEC` over an arbitrary scalar argument.
pub fn decode(value: &Value, base: FixedBase) -> Result<i64, ErrorKind> {
    let text = coercion::digit_text(value)?;
    fixed_base_to_decimal(&text, base)
}

/// `DEC2BIN` / `DEC2OCT` / `DEC2HEX` with the default [`EngineeringSettings`].
pub fn encode(
    value: &Value,
    base: FixedBase,
    places: Option<&Value>,
) -> Result<String, ErrorKind> {
    encode_with_settings(value, base, places, &EngineeringSettings::default())
}

pub fn encode_with_settings(
    value: &Value,
    base: FixedBase,
    places: Option<&Value>,
    settings: &EngineeringSettings,
) -> Result<String, ErrorKind> {
    coercion::first_error(std::iter::once(value).chain(places))?;
    let number = coercion::number(value)?;
    let places = places.map(coercion::number).transpose()?;

    // Numeric fractions are truncated toward zero. Text has to spell an integer.
    if matches!(value, Value::Text(_)) && number.fract() != 0.0 {
        return Err(ErrorKind::Num);
    }
    let value = coercion::exact_integer(number.trunc()).ok_or(ErrorKind::Num)?;
    let places = places.map(places_from_number).transpose()?;
    fixed_decimal_to_fixed_base(value, base, places, settings)
}

/// Base-to-base conversion (`BIN2OCT`, `HEX2BIN`, ...) without padding.
pub fn convert(value: &Value, src: FixedBase, dst: FixedBase) -> Result<String, ErrorKind> {
    convert_with_places(value, src, dst, None, &EngineeringSettings::default())
}

pub fn convert_with_places(
    value: &Value,
    src: FixedBase,
    dst: FixedBase,
    places: Option<&Value>,
    settings: &EngineeringSettings,
) -> Result<String, ErrorKind> {
    coercion::first_error(std::iter::once(value).chain(places))?;
    if matches!(value, Value::Bool(_)) {
        return Err(ErrorKind::Value);
    }
    let places = places.map(coercion::number).transpose()?;

    // A blank binary source is rejected, while blank octal and hex sources read as zero.
    if src == FixedBase::Bin && src != dst && matches!(value, Value::Blank) {
        return Err(ErrorKind::Num);
    }

    let decoded = decode(value, src)?;
    let places = places.map(places_from_number).transpose()?;
    fixed_decimal_to_fixed_base(decoded, dst, places, settings)
}

fn places_from_number(places: f64) -> Result<usize, ErrorKind> {
    match coercion::exact_integer(places) {
        Some(p) if p >= 0 => usize::try_from(p).map_err(|_| ErrorKind::Num),
        _ => Err(ErrorKind::Num),
    }
}

fn twos_complement_to_i64(unsigned: u64, base: FixedBase) -> i64 {
    if unsigned >= base.threshold() {
        unsigned as i64 - (1i64 << base.bits())
    } else {
        unsigned as i64
    }
}

fn i64_to_twos_complement(value: i64, base: FixedBase) -> u64 {
    if value >= 0 {
        value as u64
    } else {
        // Range-checked against the signed domain of `base` by the caller.
        ((1i64 << base.bits()) + value) as u64
    }
}

fn parse_unsigned_fixed(text: &str, base: FixedBase) -> Result<u64, ErrorKind> {
    let radix = u64::from(base.radix());
    let mut acc = 0u64;
    for ch in text.chars() {
        // Lowercase hex digits are accepted; signs and separators are not.
        let digit = ch.to_digit(base.radix()).ok_or(ErrorKind::Num)?;
        acc = acc * radix + u64::from(digit);
    }
    Ok(acc)
}

fn pad_left(text: &str, width: usize, pad: char) -> String {
    if text.len() >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(width);
    for _ in 0..(width - text.len()) {
        out.push(pad);
    }
    out.push_str(text);
    out
}

fn to_radix_upper(mut value: u64, radix: u32) -> String {
    debug_assert!(matches!(radix, 2 | 8 | 16));

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::<char>::new();
    while value > 0 {
        let digit = (value % u64::from(radix)) as u32;
        buf.push(char::from_digit(digit, radix).map_or('?', |c| c.to_ascii_uppercase()));
        value /= u64::from(radix);
    }
    buf.iter().rev().collect()
}
