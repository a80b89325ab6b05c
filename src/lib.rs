#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::manual_assert)]
#![forbid(unsafe_code)]

/*!
# `bitrecord`

`bitrecord` serializes and deserializes bit-granular composite records to and
from a fixed-size, caller-owned byte buffer. It exists for protocols and
embedded wire formats where fields do not land on byte boundaries — a 12-bit
sensor reading followed by a 3-bit alarm code, a length-prefixed byte array
packed between two nibble fields, and so on.

#### The modules of this crate

* [`endian`](crate::endian) The two-variant mode controlling both the byte
  order of aligned multi-byte scalars and the bit-write order of sub-byte or
  byte-spanning fields.
* [`error`](crate::error) The `Error` taxonomy shared by every fallible
  operation in the crate.
* [`primitive`](crate::primitive) Traits unifying `u8`/`u16`/`u32`/`u64` (and
  their signed counterparts) so the bit-packing engine below is written once
  and instantiated per width, rather than once per width per signedness.
* [`cursor`](crate::cursor) [`BitCursor`](crate::cursor::BitCursor), the
  buffer + bit-position + mode abstraction every other module rides on.
* [`scalar`](crate::scalar) Per-kind codecs: unsigned, two's-complement,
  sign-and-magnitude, float/double, length, and byte-array, each in a
  byte-aligned and a bit-granular flavor.
* [`descriptor`](crate::descriptor) [`FieldDescriptor`](crate::descriptor::FieldDescriptor),
  the tagged variant describing one field of a record.
* [`record`](crate::record) The descriptor-driven walk that serializes,
  deserializes, and measures the encoded length of a whole record.

#### Why not just `memcpy` fields around?

Because the fields this crate targets frequently don't start or end on a
byte boundary, and the two halves of "endianness" — which byte of a
multi-byte value comes first, and which end of a byte a sub-byte field's
most-significant bit lands in — must both be independently honored by a
single bit-level copy loop. [`cursor::BitCursor::write_bit`] and
[`cursor::BitCursor::read_bit`] are that loop; everything else in the crate
is bookkeeping around it.
*/

pub mod cursor;
pub mod descriptor;
pub mod endian;
pub mod error;
pub mod primitive;
pub mod record;
pub mod scalar;

pub use cursor::BitCursor;
pub use descriptor::FieldDescriptor;
pub use endian::Endian;
pub use error::Error;
