#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Unsigned, two's-complement-signed (`I`), and sign-and-magnitude-signed
//! (`S`) integer codecs, each in byte-aligned and bit-granular form.
//!
//! The bit-granular engine (`serialize_bits`/`deserialize_bits` below) is a
//! direct port of `SerializeBitLE`/`SerializeBitBE`/`DeserializeBitLE`/
//! `DeserializeBitBE` in `examples/original_source/src/UParser.c`: building
//! a little/big-endian byte layout of the value in a local scratch array,
//! then handing it to the cursor's bit path, with the over-width zero-fill
//! placed before (BIG) or after (LITTLE) the value bits by seeking over it.
//! It is written once, generic over [`crate::primitive::FixedWidthInt`],
//! rather than once per width as the C source's `U8_SerializeBit`/
//! `U16_SerializeBit`/… family does.
//!
//! `I`/`S` codecs reduce to the unsigned engine: `I` by reinterpreting the
//! signed value's two's-complement bit pattern as unsigned (exactly what
//! `ISerializeBit`'s `memcpy` into a `uint64_t` does), `S` by computing a
//! sign-and-magnitude bit pattern first. Decoding reverses each mapping
//! using full 64-bit precision before narrowing to the target width via a
//! truncating `as` cast — which is what fixes source bug #2 (spec.md §9):
//! the sign-extension is always correct for the *actual* target width,
//! not merely for a 64-bit one.

use crate::cursor::BitCursor;
use crate::endian::Endian;
use crate::error::Result;
use crate::primitive::{FixedWidthInt, FixedWidthSignedInt};

fn serialize_bits_le(
    cursor: &mut BitCursor<'_>,
    value: u64,
    native_bytes: usize,
    bit_width: usize,
) -> Result<()> {
    let mut data = [0u8; 8];
    for (i, byte) in data.iter_mut().enumerate().take(native_bytes) {
        *byte = (value >> (i * 8)) as u8;
    }
    cursor.write_bit(&data[..native_bytes], bit_width.min(8 * native_bytes))?;
    if bit_width > 8 * native_bytes {
        let new_pos = cursor.tell_bit() + (bit_width - 8 * native_bytes);
        cursor.seek_bit(new_pos)?;
    }
    Ok(())
}

fn serialize_bits_be(
    cursor: &mut BitCursor<'_>,
    value: u64,
    native_bytes: usize,
    bit_width: usize,
) -> Result<()> {
    let mut data = [0u8; 8];
    for (i, byte) in data.iter_mut().enumerate().take(native_bytes) {
        *byte = (value >> ((native_bytes - i - 1) * 8)) as u8;
    }
    if bit_width > 8 * native_bytes {
        let new_pos = cursor.tell_bit() + (bit_width - 8 * native_bytes);
        cursor.seek_bit(new_pos)?;
    }
    let offset = if bit_width <= (native_bytes.saturating_sub(1)) * 8 {
        native_bytes - (bit_width / 8) - usize::from(bit_width % 8 != 0)
    } else {
        0
    };
    cursor.write_bit(&data[offset..native_bytes], bit_width.min(8 * native_bytes))
}

fn deserialize_bits_le(
    cursor: &mut BitCursor<'_>,
    native_bytes: usize,
    bit_width: usize,
) -> Result<u64> {
    let mut data = [0u8; 8];
    cursor.read_bit(&mut data[..native_bytes], bit_width.min(8 * native_bytes))?;
    if bit_width > 8 * native_bytes {
        let new_pos = cursor.tell_bit() + (bit_width - 8 * native_bytes);
        cursor.seek_bit(new_pos)?;
    }
    let mut result = 0u64;
    for (i, byte) in data.iter().enumerate().take(native_bytes) {
        result |= (*byte as u64) << (i * 8);
    }
    Ok(result)
}

fn deserialize_bits_be(
    cursor: &mut BitCursor<'_>,
    native_bytes: usize,
    bit_width: usize,
) -> Result<u64> {
    let mut data = [0u8; 8];
    if bit_width > 8 * native_bytes {
        let new_pos = cursor.tell_bit() + (bit_width - 8 * native_bytes);
        cursor.seek_bit(new_pos)?;
    }
    cursor.read_bit(&mut data[..native_bytes], bit_width.min(8 * native_bytes))?;
    let offset = if bit_width < native_bytes * 8 {
        (native_bytes * 8 - bit_width) / 8
    } else {
        0
    };
    let mut result = 0u64;
    for i in 0..(native_bytes - offset) {
        result |= (data[native_bytes - i - 1 - offset] as u64) << (i * 8);
    }
    Ok(result)
}

fn serialize_bits(
    cursor: &mut BitCursor<'_>,
    value: u64,
    native_bytes: usize,
    bit_width: usize,
) -> Result<()> {
    match cursor.mode() {
        Endian::Little => serialize_bits_le(cursor, value, native_bytes, bit_width),
        Endian::Big => serialize_bits_be(cursor, value, native_bytes, bit_width),
    }
}

fn deserialize_bits(
    cursor: &mut BitCursor<'_>,
    native_bytes: usize,
    bit_width: usize,
) -> Result<u64> {
    match cursor.mode() {
        Endian::Little => deserialize_bits_le(cursor, native_bytes, bit_width),
        Endian::Big => deserialize_bits_be(cursor, native_bytes, bit_width),
    }
}

/// Sign-extend the low `bit_width` bits of `raw` (a two's-complement
/// pattern) to full `i64` precision.
fn sign_extend_i64(raw: u64, bit_width: u32) -> i64 {
    if bit_width >= 64 {
        raw as i64
    } else {
        let shift = 64 - bit_width;
        ((raw << shift) as i64) >> shift
    }
}

/// Sign-and-magnitude encoding of `value` into `bit_width` bits: high bit
/// is the sign, the rest is `|value|`. Negative zero canonicalizes to
/// positive zero (spec.md §9 item 3) since `-0i64 == 0i64`.
fn encode_sign_magnitude(value: i64, bit_width: u32) -> u64 {
    if value.is_negative() {
        let magnitude = value.unsigned_abs();
        magnitude | (1u64 << (bit_width - 1))
    } else {
        value as u64
    }
}

/// Inverse of [`encode_sign_magnitude`].
fn decode_sign_magnitude(raw: u64, bit_width: u32) -> i64 {
    let sign_mask = 1u64 << (bit_width - 1);
    let magnitude = (raw & !sign_mask) as i64;
    if raw & sign_mask != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Write `value` byte-aligned, full native width, in the cursor's byte
/// order.
pub fn write_u<T: FixedWidthInt>(cursor: &mut BitCursor<'_>, value: T) -> Result<()> {
    let bits = T::BITS as usize;
    write_u_bits_raw(cursor, value.to_u64(), T::BYTES, bits, true)
}

/// Read a byte-aligned, full-native-width unsigned value.
pub fn read_u<T: FixedWidthInt>(cursor: &mut BitCursor<'_>) -> Result<T> {
    let raw = read_u_bits_raw(cursor, T::BYTES, T::BITS as usize, true)?;
    Ok(T::from_u64_truncating(raw))
}

/// Write `value` as `bit_width` bits at the cursor's current (possibly
/// unaligned) position.
pub fn write_u_bits<T: FixedWidthInt>(
    cursor: &mut BitCursor<'_>,
    value: T,
    bit_width: u32,
) -> Result<()> {
    write_u_bits_raw(cursor, value.to_u64(), T::BYTES, bit_width as usize, false)
}

/// Read `bit_width` bits as an unsigned value of type `T`.
pub fn read_u_bits<T: FixedWidthInt>(cursor: &mut BitCursor<'_>, bit_width: u32) -> Result<T> {
    let raw = read_u_bits_raw(cursor, T::BYTES, bit_width as usize, false)?;
    Ok(T::from_u64_truncating(raw))
}

pub(crate) fn write_u_bits_raw(
    cursor: &mut BitCursor<'_>,
    value: u64,
    native_bytes: usize,
    bit_width: usize,
    aligned: bool,
) -> Result<()> {
    if aligned {
        let mut buf = [0u8; 8];
        match cursor.mode() {
            Endian::Big => {
                for (i, byte) in buf.iter_mut().enumerate().take(native_bytes) {
                    *byte = (value >> ((native_bytes - i - 1) * 8)) as u8;
                }
            }
            Endian::Little => {
                for (i, byte) in buf.iter_mut().enumerate().take(native_bytes) {
                    *byte = (value >> (i * 8)) as u8;
                }
            }
        }
        cursor.write(&buf[..native_bytes])
    } else {
        serialize_bits(cursor, value, native_bytes, bit_width)
    }
}

pub(crate) fn read_u_bits_raw(
    cursor: &mut BitCursor<'_>,
    native_bytes: usize,
    bit_width: usize,
    aligned: bool,
) -> Result<u64> {
    if aligned {
        let mut buf = [0u8; 8];
        cursor.read(&mut buf[..native_bytes])?;
        let mut result = 0u64;
        match cursor.mode() {
            Endian::Big => {
                for i in 0..native_bytes {
                    result |= (buf[native_bytes - i - 1] as u64) << (i * 8);
                }
            }
            Endian::Little => {
                for (i, byte) in buf.iter().enumerate().take(native_bytes) {
                    result |= (*byte as u64) << (i * 8);
                }
            }
        }
        Ok(result)
    } else {
        deserialize_bits(cursor, native_bytes, bit_width)
    }
}

/// Write `value`'s two's-complement bit pattern, byte-aligned, full native
/// width.
pub fn write_i<T: FixedWidthSignedInt>(cursor: &mut BitCursor<'_>, value: T) -> Result<()> {
    write_u_bits_raw(cursor, value.to_i64() as u64, T::BYTES, T::BITS as usize, true)
}

/// Read a byte-aligned, full-native-width two's-complement value.
pub fn read_i<T: FixedWidthSignedInt>(cursor: &mut BitCursor<'_>) -> Result<T> {
    let raw = read_u_bits_raw(cursor, T::BYTES, T::BITS as usize, true)?;
    Ok(T::from_i64_truncating(sign_extend_i64(raw, T::BITS)))
}

/// Write `value`'s two's-complement bit pattern as `bit_width` bits.
pub fn write_i_bits<T: FixedWidthSignedInt>(
    cursor: &mut BitCursor<'_>,
    value: T,
    bit_width: u32,
) -> Result<()> {
    write_u_bits_raw(
        cursor,
        value.to_i64() as u64,
        T::BYTES,
        bit_width as usize,
        false,
    )
}

/// Read `bit_width` bits as a two's-complement value of type `T`,
/// sign-extended against `bit_width` itself (spec.md §9 item 2's fix).
pub fn read_i_bits<T: FixedWidthSignedInt>(cursor: &mut BitCursor<'_>, bit_width: u32) -> Result<T> {
    let raw = read_u_bits_raw(cursor, T::BYTES, bit_width as usize, false)?;
    Ok(T::from_i64_truncating(sign_extend_i64(raw, bit_width)))
}

/// Write `value` sign-and-magnitude encoded, byte-aligned, full native
/// width.
pub fn write_s<T: FixedWidthSignedInt>(cursor: &mut BitCursor<'_>, value: T) -> Result<()> {
    let raw = encode_sign_magnitude(value.to_i64(), T::BITS);
    write_u_bits_raw(cursor, raw, T::BYTES, T::BITS as usize, true)
}

/// Read a byte-aligned, full-native-width sign-and-magnitude value.
pub fn read_s<T: FixedWidthSignedInt>(cursor: &mut BitCursor<'_>) -> Result<T> {
    let raw = read_u_bits_raw(cursor, T::BYTES, T::BITS as usize, true)?;
    Ok(T::from_i64_truncating(decode_sign_magnitude(raw, T::BITS)))
}

/// Write `value` sign-and-magnitude encoded as `bit_width` bits; an
/// over-width field places the sign bit at `bit_width - 1` (spec.md §4.2).
pub fn write_s_bits<T: FixedWidthSignedInt>(
    cursor: &mut BitCursor<'_>,
    value: T,
    bit_width: u32,
) -> Result<()> {
    let raw = encode_sign_magnitude(value.to_i64(), bit_width);
    write_u_bits_raw(cursor, raw, T::BYTES, bit_width as usize, false)
}

/// Read `bit_width` bits as a sign-and-magnitude value of type `T`.
pub fn read_s_bits<T: FixedWidthSignedInt>(cursor: &mut BitCursor<'_>, bit_width: u32) -> Result<T> {
    let raw = read_u_bits_raw(cursor, T::BYTES, bit_width as usize, false)?;
    Ok(T::from_i64_truncating(decode_sign_magnitude(raw, bit_width)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endian::Endian;

    fn cursor<'a>(buf: &'a mut [u8], mode: Endian) -> BitCursor<'a> {
        BitCursor::new(buf, mode).expect("non-empty buffer")
    }

    #[test]
    fn byte_order_of_aligned_scalar() {
        let mut buf = [0u8; 4];
        write_u(&mut cursor(&mut buf, Endian::Big), 0x1122_3344u32).expect("fits");
        assert_eq!(buf, [0x11, 0x22, 0x33, 0x44]);

        let mut buf = [0u8; 4];
        write_u(&mut cursor(&mut buf, Endian::Little), 0x1122_3344u32).expect("fits");
        assert_eq!(buf, [0x44, 0x33, 0x22, 0x11]);
    }

    #[test]
    fn signed_encodings_of_minus_100() {
        let mut buf = [0u8; 1];
        write_i(&mut cursor(&mut buf, Endian::Big), -100i8).expect("fits");
        assert_eq!(buf, [0x9C]);

        let mut buf = [0u8; 1];
        write_s(&mut cursor(&mut buf, Endian::Big), -100i8).expect("fits");
        assert_eq!(buf, [0xE4]);
    }

    #[test]
    fn two_complement_round_trip() {
        for &mode in &[Endian::Big, Endian::Little] {
            let mut buf = [0u8; 4];
            write_i(&mut cursor(&mut buf, mode), -12_345_678i32).expect("fits");
            let mut c = cursor(&mut buf, mode);
            let v: i32 = read_i(&mut c).expect("fits");
            assert_eq!(v, -12_345_678i32, "mode {mode}");
        }
    }

    #[test]
    fn overwidth_bit_field_zero_fill_placement() {
        let mut buf = [0u8; 2];
        write_u_bits(&mut cursor(&mut buf, Endian::Big), 0xBBu8, 16).expect("fits");
        assert_eq!(buf, [0x00, 0xBB]);

        let mut buf = [0u8; 2];
        write_u_bits(&mut cursor(&mut buf, Endian::Little), 0xBBu8, 16).expect("fits");
        assert_eq!(buf, [0xBB, 0x00]);
    }

    #[test]
    fn sign_extension_is_correct_for_narrow_targets() {
        // A 5-bit field holding -1 (0b11111) read into an i8 must come back
        // as -1i8, not as some value corrupted by a 64-bit-only extension.
        let mut buf = [0u8; 1];
        write_i_bits(&mut cursor(&mut buf, Endian::Big), -1i8, 5).expect("fits");
        let mut c = cursor(&mut buf, Endian::Big);
        let v: i8 = read_i_bits(&mut c, 5).expect("fits");
        assert_eq!(v, -1i8);
    }

    #[test]
    fn sign_magnitude_round_trip_and_negative_zero() {
        let mut buf = [0u8; 1];
        write_s(&mut cursor(&mut buf, Endian::Big), 0i8).expect("fits");
        assert_eq!(buf, [0x00]);
        let mut c = cursor(&mut buf, Endian::Big);
        let v: i8 = read_s(&mut c).expect("fits");
        assert_eq!(v, 0i8);
    }

    #[test]
    fn bit_width_unsigned_round_trip() {
        for &mode in &[Endian::Big, Endian::Little] {
            let mut buf = [0u8; 2];
            write_u_bits(&mut cursor(&mut buf, mode), 0x3FFu16, 10).expect("fits");
            let mut c = cursor(&mut buf, mode);
            let v: u16 = read_u_bits(&mut c, 10).expect("fits");
            assert_eq!(v, 0x3FF, "mode {mode}");
        }
    }
}
