//! Spreadsheet engineering functions over already-evaluated scalar arguments.
//!
//! Two families are provided:
//! - fixed-width radix conversion between bases 2, 8 and 16 using 10/30/40-bit two's complement
//!   (`BIN2DEC`, `DEC2HEX`, `OCT2BIN`, ...), see [`functions::engineering::base`];
//! - bitwise arithmetic over unsigned 48-bit words (`BITAND`, `BITLSHIFT`, ...), see
//!   [`functions::engineering::bitwise`].
//!
//! Every operation is a pure function. Failures are returned as [`ErrorKind`] sentinels rather
//! than panics, and an error sentinel passed in as an argument is forwarded unchanged.

pub mod coercion;
pub mod functions;
pub mod settings;
pub mod value;

pub use functions::engineering::{
    bit_and, bit_lshift, bit_or, bit_rshift, bit_xor, convert, convert_with_places, decode,
    encode, encode_with_settings, FixedBase,
};
pub use functions::{
    call_function, lookup_function, registered_functions, FunctionContext, FunctionSpec,
};
pub use settings::{EngineeringSettings, NegativePlaces, SettingsError};
pub use value::{ErrorKind, Value};
