#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! Traits unifying the four fixed widths this crate's scalar codecs
//! support, so [`crate::scalar`]'s bit-packing engine is written once and
//! instantiated per width rather than duplicated four times over.
//!
//! This mirrors the teacher crate's `PrimitiveType` trait (which unifies
//! `u8`/`u16`/`u32`/`u64`/`u128` for its own purposes), trimmed down to just
//! the handful of operations the bit-packing engine actually needs: a width
//! in bits, and lossless widening to/truncating narrowing from a 64-bit
//! intermediate. Each impl carries a `static_assertions::const_assert_eq!`
//! tying `BYTES` back to `BITS`, the same compile-time-assertion idiom the
//! teacher uses throughout its own primitive impls.

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// One of `u8`, `u16`, `u32`, `u64` — the native width of an unsigned
/// scalar field.
pub trait FixedWidthInt: private::Sealed + Copy + std::fmt::Debug {
    /// Native width, in bits.
    const BITS: u32;

    /// Native width, in bytes.
    const BYTES: usize = (Self::BITS / 8) as usize;

    /// Widen losslessly into a `u64`.
    fn to_u64(self) -> u64;

    /// Narrow from a `u64`, keeping the low [`Self::BITS`] bits.
    fn from_u64_truncating(value: u64) -> Self;
}

/// One of `i8`, `i16`, `i32`, `i64` — the native width of a signed scalar
/// field, two's-complement or sign-and-magnitude.
pub trait FixedWidthSignedInt: private::Sealed + Copy + std::fmt::Debug {
    /// Native width, in bits.
    const BITS: u32;

    /// Native width, in bytes.
    const BYTES: usize = (Self::BITS / 8) as usize;

    /// Sign-extend losslessly into an `i64`.
    fn to_i64(self) -> i64;

    /// Narrow from an `i64`, keeping the low [`Self::BITS`] bits (i.e. the
    /// same truncation `value as iN` performs).
    fn from_i64_truncating(value: i64) -> Self;
}

macro_rules! impl_fixed_width_unsigned {
    ($t:ty, $bits:expr) => {
        impl FixedWidthInt for $t {
            const BITS: u32 = $bits;

            fn to_u64(self) -> u64 {
                self as u64
            }

            fn from_u64_truncating(value: u64) -> Self {
                value as $t
            }
        }

        static_assertions::const_assert_eq!(<$t as FixedWidthInt>::BYTES * 8, <$t as FixedWidthInt>::BITS as usize);
    };
}

macro_rules! impl_fixed_width_signed {
    ($t:ty, $bits:expr) => {
        impl FixedWidthSignedInt for $t {
            const BITS: u32 = $bits;

            fn to_i64(self) -> i64 {
                self as i64
            }

            fn from_i64_truncating(value: i64) -> Self {
                value as $t
            }
        }

        static_assertions::const_assert_eq!(<$t as FixedWidthSignedInt>::BYTES * 8, <$t as FixedWidthSignedInt>::BITS as usize);
    };
}

impl_fixed_width_unsigned!(u8, 8);
impl_fixed_width_unsigned!(u16, 16);
impl_fixed_width_unsigned!(u32, 32);
impl_fixed_width_unsigned!(u64, 64);

impl_fixed_width_signed!(i8, 8);
impl_fixed_width_signed!(i16, 16);
impl_fixed_width_signed!(i32, 32);
impl_fixed_width_signed!(i64, 64);
