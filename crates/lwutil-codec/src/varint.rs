//! Variable-length `u32` codec.
//!
//! Each byte carries 7 value bits, least significant group first. The high bit
//! ([`CONTINUATION_BIT`]) is set on every byte except the last:
//!
//! ```text
//! 150    -> 0x96 0x01
//! 86942  -> 0x9E 0xA7 0x05
//! ```
//!
//! A `u32` needs between 1 and [`MAX_VARINT_LEN`] bytes.

use std::io::IoSlice;

use bytes::{Buf, BufMut};
use tracing::debug;

use crate::error::{CodecError, Result};

/// Longest encoding of a `u32`: ceil(32 / 7) bytes.
pub const MAX_VARINT_LEN: usize = 5;

/// High bit of each encoded byte; set means another byte follows.
pub const CONTINUATION_BIT: u8 = 0x80;

const PAYLOAD_MASK: u8 = 0x7F;

/// Value bits left for the final byte of a maximum-length encoding (32 - 4 * 7).
const LAST_BYTE_MAX: u8 = 0x0F;

/// Number of bytes the canonical encoding of `value` occupies.
pub const fn varint_len(value: u32) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0x0FFF_FFFF => 4,
        _ => 5,
    }
}

/// Encode `value` into the start of `dst`.
///
/// Returns the number of bytes written (1..=5). Fails with
/// [`CodecError::InvalidArgument`] if `dst` is empty and with
/// [`CodecError::BufferTooSmall`] if the encoding does not fit. `dst` is left
/// untouched on failure.
pub fn encode_varint(value: u32, dst: &mut [u8]) -> Result<usize> {
    if dst.is_empty() {
        debug!("varint encode into empty buffer");
        return Err(CodecError::InvalidArgument("output buffer is empty"));
    }

    let needed = varint_len(value);
    if dst.len() < needed {
        debug!(
            value,
            needed,
            capacity = dst.len(),
            "varint does not fit output buffer"
        );
        return Err(CodecError::BufferTooSmall {
            needed,
            capacity: dst.len(),
        });
    }

    let mut remaining = value;
    let mut written = 0;
    loop {
        let group = (remaining as u8) & PAYLOAD_MASK;
        remaining >>= 7;
        if remaining == 0 {
            dst[written] = group;
            return Ok(written + 1);
        }
        dst[written] = group | CONTINUATION_BIT;
        written += 1;
    }
}

/// Decode a varint from the start of `src`.
///
/// Returns the value and the number of bytes consumed (1..=5). Bytes after the
/// terminating byte are ignored. Zero-padded encodings are accepted.
///
/// Fails with:
/// - [`CodecError::InvalidArgument`] if `src` is empty
/// - [`CodecError::TruncatedVarint`] if `src` ends on a byte with the
///   continuation bit set
/// - [`CodecError::VarintOverflow`] if the 5th byte has the continuation bit
///   set or carries more than the 4 value bits a `u32` has left
pub fn decode_varint(src: &[u8]) -> Result<(u32, usize)> {
    if src.is_empty() {
        debug!("varint decode from empty buffer");
        return Err(CodecError::InvalidArgument("input buffer is empty"));
    }

    let mut value = 0u32;
    for (index, &byte) in src.iter().take(MAX_VARINT_LEN).enumerate() {
        let group = byte & PAYLOAD_MASK;
        if index == MAX_VARINT_LEN - 1
            && (byte & CONTINUATION_BIT != 0 || group > LAST_BYTE_MAX)
        {
            debug!(byte, "varint exceeds 32 bits");
            return Err(CodecError::VarintOverflow);
        }

        value |= u32::from(group) << (7 * index);
        if byte & CONTINUATION_BIT == 0 {
            return Ok((value, index + 1));
        }
    }

    // Only reachable when src is shorter than MAX_VARINT_LEN.
    debug!(consumed = src.len(), "varint truncated");
    Err(CodecError::TruncatedVarint {
        consumed: src.len(),
    })
}

/// Encode `value` into a [`BufMut`], advancing it by the encoded length.
///
/// Fails without writing if the buffer has no room at all
/// ([`CodecError::InvalidArgument`]) or not enough room
/// ([`CodecError::BufferTooSmall`]).
pub fn put_varint<B: BufMut>(dst: &mut B, value: u32) -> Result<usize> {
    let capacity = dst.remaining_mut();
    if capacity == 0 {
        debug!("varint put into full buffer");
        return Err(CodecError::InvalidArgument("output buffer is full"));
    }

    let mut scratch = [0u8; MAX_VARINT_LEN];
    let len = encode_varint(value, &mut scratch)?;
    if capacity < len {
        debug!(needed = len, capacity, "varint does not fit output buffer");
        return Err(CodecError::BufferTooSmall {
            needed: len,
            capacity,
        });
    }

    dst.put_slice(&scratch[..len]);
    Ok(len)
}

/// Decode a varint from a [`Buf`], advancing it past the consumed bytes.
///
/// Up to [`MAX_VARINT_LEN`] bytes of `src.remaining()` are examined, across
/// chunk boundaries. The buffer is not advanced on failure, provided it exposes
/// its later chunks through [`Buf::chunks_vectored`] (as `Chain` does). A
/// buffer that only exposes its current chunk is read byte by byte, and the
/// bytes read stay consumed on failure.
pub fn get_varint<B: Buf>(src: &mut B) -> Result<u32> {
    let wanted = src.remaining().min(MAX_VARINT_LEN);
    if src.chunk().len() >= wanted {
        let (value, consumed) = decode_varint(src.chunk())?;
        src.advance(consumed);
        return Ok(value);
    }

    let mut scratch = [0u8; MAX_VARINT_LEN];
    if peek_into(src, &mut scratch[..wanted]) == wanted {
        let (value, consumed) = decode_varint(&scratch[..wanted])?;
        src.advance(consumed);
        return Ok(value);
    }

    let mut len = 0;
    while len < wanted {
        let byte = src.get_u8();
        scratch[len] = byte;
        len += 1;
        if byte & CONTINUATION_BIT == 0 {
            break;
        }
    }
    decode_varint(&scratch[..len]).map(|(value, _)| value)
}

/// Copy the leading bytes of `src` into `dst` without advancing it.
fn peek_into<B: Buf>(src: &B, dst: &mut [u8]) -> usize {
    // Every chunk holds at least one byte, so MAX_VARINT_LEN slices suffice.
    let mut slices = [IoSlice::new(&[]); MAX_VARINT_LEN];
    let count = src.chunks_vectored(&mut slices);

    let mut filled = 0;
    for slice in &slices[..count] {
        if filled == dst.len() {
            break;
        }
        let take = slice.len().min(dst.len() - filled);
        dst[filled..filled + take].copy_from_slice(&slice[..take]);
        filled += take;
    }
    filled
}
