#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! IEEE-754 float/double codecs: reinterpret the value's bit pattern as an
//! unsigned integer of the same width and delegate to the unsigned integer
//! codec (spec.md §4.2). Grounded on `Float_Serialize`/`Double_Serialize`/
//! `Float_SerializeBit`/`Double_SerializeBit` in
//! `examples/original_source/src/UParser.c`, which do the equivalent
//! reinterpretation via a pointer cast to `uint32_t*`/`uint64_t*` and call
//! straight into the `U32`/`U64` codec with a fixed bit width of
//! `sizeof(T) * 8` — no bit-width parameter of their own, since a float is
//! never transported at anything other than its full native width.
//!
//! `f32::to_bits`/`from_bits` and `f64::to_bits`/`from_bits` replace the
//! pointer cast; both are safe, total functions, so no `unsafe` is needed
//! here even though the crate forbids it outright.

use crate::cursor::BitCursor;
use crate::error::Result;
use crate::scalar::integer::{read_u, read_u_bits, write_u, write_u_bits};

/// Write `value`, byte-aligned, as its 32-bit IEEE-754 pattern.
pub fn write_float(cursor: &mut BitCursor<'_>, value: f32) -> Result<()> {
    write_u(cursor, value.to_bits())
}

/// Read a byte-aligned 32-bit IEEE-754 value.
pub fn read_float(cursor: &mut BitCursor<'_>) -> Result<f32> {
    Ok(f32::from_bits(read_u(cursor)?))
}

/// Write `value` as exactly 32 bits at the cursor's current position.
pub fn write_float_bits(cursor: &mut BitCursor<'_>, value: f32) -> Result<()> {
    write_u_bits(cursor, value.to_bits(), 32)
}

/// Read exactly 32 bits as an IEEE-754 single.
pub fn read_float_bits(cursor: &mut BitCursor<'_>) -> Result<f32> {
    Ok(f32::from_bits(read_u_bits(cursor, 32)?))
}

/// Write `value`, byte-aligned, as its 64-bit IEEE-754 pattern.
pub fn write_double(cursor: &mut BitCursor<'_>, value: f64) -> Result<()> {
    write_u(cursor, value.to_bits())
}

/// Read a byte-aligned 64-bit IEEE-754 value.
pub fn read_double(cursor: &mut BitCursor<'_>) -> Result<f64> {
    Ok(f64::from_bits(read_u(cursor)?))
}

/// Write `value` as exactly 64 bits at the cursor's current position.
pub fn write_double_bits(cursor: &mut BitCursor<'_>, value: f64) -> Result<()> {
    write_u_bits(cursor, value.to_bits(), 64)
}

/// Read exactly 64 bits as an IEEE-754 double.
pub fn read_double_bits(cursor: &mut BitCursor<'_>) -> Result<f64> {
    Ok(f64::from_bits(read_u_bits(cursor, 64)?))
}
