#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]

/*!
Endianness, as this crate uses the word, names a single cursor-wide mode
that governs two things at once:

1. **Byte order** for multi-byte scalars written through the cursor's
   byte-aligned path: `Big` puts the most significant byte first.
2. **Bit-write order** for fields that don't land on a byte boundary, or
   that span one: `Big` means a field's most significant bits occupy the
   *earlier* (higher) bit position of the current byte; `Little` means they
   occupy the *later* (lower) one, so the field's least-significant bits are
   written first.

These are the same two concerns the source library conflates into one
`Stream_Mode_T`, and this crate keeps them conflated deliberately — a
cursor has exactly one mode, changeable only at a byte boundary
([`crate::cursor::BitCursor::set_mode`]), rather than two independently
configurable axes.
*/

/// The endianness mode of a [`crate::cursor::BitCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most-significant byte/bit first.
    Big,
    /// Least-significant byte/bit first.
    Little,
}

impl Endian {
    /// A single debug character, `'B'` or `'L'`, handy in `Debug` impls and
    /// test failure messages without pulling in the full variant name.
    pub const fn to_debug_char(self) -> char {
        match self {
            Endian::Big => 'B',
            Endian::Little => 'L',
        }
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Endian::Big => "big",
            Endian::Little => "little",
        })
    }
}
