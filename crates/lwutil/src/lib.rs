//! Lightweight byte codecs for constrained targets.
//!
//! # Crate Structure
//!
//! - [`endian`]: Unchecked fixed-width `u16`/`u32` store/load in explicit byte order
//! - [`varint`]: Checked variable-length `u32` encode/decode
//! - [`hex`]: Fixed-width lowercase hex formatting
//! - [`bits`]: Bit-mask helpers
//! - [`math`]: Integer range mapping
//!
//! C callers link `lwutil-ffi` instead.

/// Re-export fixed-width codec.
pub mod endian {
    pub use lwutil_codec::endian::*;
}

/// Re-export varint codec.
pub mod varint {
    pub use lwutil_codec::varint::*;
}

/// Re-export hex formatting.
pub mod hex {
    pub use lwutil_codec::hex::*;
}

/// Re-export bit-mask helpers.
pub mod bits {
    pub use lwutil_codec::bits::*;
}

/// Re-export range helpers.
pub mod math {
    pub use lwutil_codec::math::*;
}

pub use lwutil_codec::{ByteOrder, CodecError, ErrorKind, Result};
