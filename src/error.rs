#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

//! The error taxonomy shared by [`crate::cursor`], [`crate::scalar`], and
//! [`crate::record`].
//!
//! Contract violations the original C source treated as hard-assert
//! programmer errors (null pointers, an unknown descriptor kind, an offset
//! outside the record) are not representable here at all: the closure-based
//! [`crate::descriptor::FieldDescriptor`] scheme takes a real `&R`/`&mut R`
//! rather than an offset into opaque memory, and the descriptor enum is
//! matched exhaustively by the compiler. The one contract violation that
//! remains reachable at runtime — an `ARRAY_VARIABLE` field whose sibling
//! `LEN` field was never resolved — is [`Error::MissingLengthField`].

use thiserror::Error as ThisError;

/// Everything that can go wrong calling into this crate.
#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A read or write would consume or produce more bits than remain
    /// between the cursor's position and its capacity.
    #[error("buffer too short: requested {requested_bits} bits, {available_bits} available")]
    BufferTooShort {
        requested_bits: usize,
        available_bits: usize,
    },

    /// [`crate::cursor::BitCursor::set_mode`] was called while the cursor's
    /// position was not on a byte boundary.
    #[error("cannot change endianness mode while {bit_offset_in_byte} bits into the current byte")]
    NotByteAligned { bit_offset_in_byte: usize },

    /// The record codec reached an `ARRAY_VARIABLE` descriptor before its
    /// sibling `LEN` descriptor had populated a length for it.
    #[error("array-variable field has no resolved length; its LEN descriptor must precede it")]
    MissingLengthField,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
