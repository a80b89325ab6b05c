#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! The length codec: a native `usize` value transported as an unsigned
//! integer of a caller-specified byte size (byte-aligned form) or bit
//! width (bit-granular form), grounded on `Size_Serialize`/
//! `Size_SerializeBit` in `examples/original_source/src/UParser.c`. Those
//! wrap the same generic `Serialize`/`SerializeBit` the plain unsigned
//! codecs use, just with the byte count supplied by the caller instead of
//! fixed by a `U8`/`U16`/… wrapper — exactly what [`write_len`]/
//! [`read_len`] do here against [`crate::scalar::integer`]'s shared
//! engine.
//!
//! The bit-granular form's underlying container is always 8 bytes
//! (`u64`), regardless of `byte_size`/`bit_width`, so the wire width of a
//! `LEN` descriptor is fully determined by its declared bit width and
//! never depends on the host platform's native `size_t`/`usize` width.

use crate::cursor::BitCursor;
use crate::error::Result;
use crate::scalar::integer::{read_u_bits_raw, write_u_bits_raw};

/// Write `value`, byte-aligned, as `byte_size` bytes in the cursor's byte
/// order.
pub fn write_len(cursor: &mut BitCursor<'_>, value: usize, byte_size: usize) -> Result<()> {
    write_u_bits_raw(cursor, value as u64, byte_size, byte_size * 8, true)
}

/// Read a byte-aligned `byte_size`-byte length value.
pub fn read_len(cursor: &mut BitCursor<'_>, byte_size: usize) -> Result<usize> {
    Ok(read_u_bits_raw(cursor, byte_size, byte_size * 8, true)? as usize)
}

/// Write `value` as `bit_width` bits at the cursor's current position.
pub fn write_len_bits(cursor: &mut BitCursor<'_>, value: usize, bit_width: u32) -> Result<()> {
    write_u_bits_raw(cursor, value as u64, 8, bit_width as usize, false)
}

/// Read `bit_width` bits as a length value.
pub fn read_len_bits(cursor: &mut BitCursor<'_>, bit_width: u32) -> Result<usize> {
    Ok(read_u_bits_raw(cursor, 8, bit_width as usize, false)? as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endian::Endian;

    #[test]
    fn byte_aligned_round_trip() {
        let mut buf = [0u8; 2];
        write_len(
            &mut BitCursor::new(&mut buf, Endian::Big).expect("ok"),
            300,
            2,
        )
        .expect("fits");
        let v = read_len(&mut BitCursor::new(&mut buf, Endian::Big).expect("ok"), 2).expect("fits");
        assert_eq!(v, 300);
    }

    #[test]
    fn bit_granular_round_trip() {
        let mut buf = [0u8; 1];
        write_len_bits(
            &mut BitCursor::new(&mut buf, Endian::Little).expect("ok"),
            8,
            8,
        )
        .expect("fits");
        assert_eq!(buf, [8]);
    }
}
