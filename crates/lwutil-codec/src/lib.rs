//! Byte-level codecs for constrained targets.
//!
//! Two codecs share one buffer discipline: the caller owns every buffer and
//! nothing is retained past a call.
//! - [`endian`]: unchecked fixed-width `u16`/`u32` store/load, explicit byte order
//! - [`varint`]: checked 1-5 byte variable-length `u32` encode/decode
//!
//! Small helpers ride along: [`hex`] formatting, [`bits`] masks and
//! [`math::map_range`].

pub mod bits;
pub mod endian;
pub mod error;
pub mod hex;
pub mod math;
pub mod varint;

pub use endian::{
    load_u16_be, load_u16_le, load_u32_be, load_u32_le, store_u16_be, store_u16_le, store_u32_be,
    store_u32_le, ByteOrder, U16_LEN, U32_LEN,
};
pub use error::{CodecError, ErrorKind, Result};
pub use hex::{u16_to_hex, u32_to_hex, u8_to_hex};
pub use math::map_range;
pub use varint::{
    decode_varint, encode_varint, get_varint, put_varint, varint_len, CONTINUATION_BIT,
    MAX_VARINT_LEN,
};
