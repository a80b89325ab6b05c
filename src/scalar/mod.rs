#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Per-kind scalar codecs riding on [`crate::cursor::BitCursor`].
//!
//! Each kind exists in a byte-aligned flavor (forces alignment first,
//! always transports the value's full native width) and, except for
//! float/double/array, a bit-granular flavor (`*_bits`, takes an explicit
//! wire bit width that may be narrower or wider than the native type).
//! [`crate::descriptor::FieldDescriptor`] always drives the bit-granular
//! forms, since a descriptor always carries a bit width — matching how the
//! original source's record codec always calls the `*Bit` family of
//! functions (`U8_SerializeBit`, `I16_DeserializeBit`, …), never the plain
//! byte-aligned ones, which exist for callers who want to talk to the
//! cursor directly outside of a descriptor list.

pub mod array;
pub mod float;
pub mod integer;
pub mod length;

pub use array::{read_array, read_array_bits, write_array, write_array_bits};
pub use float::{
    read_double, read_double_bits, read_float, read_float_bits, write_double, write_double_bits,
    write_float, write_float_bits,
};
pub use integer::{
    read_i, read_i_bits, read_s, read_s_bits, read_u, read_u_bits, write_i, write_i_bits, write_s,
    write_s_bits, write_u, write_u_bits,
};
pub use length::{read_len, write_len};
