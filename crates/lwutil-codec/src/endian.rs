//! Fixed-width integer codec.
//!
//! Stores and loads `u16`/`u32` values at offset 0 of a byte buffer in an
//! explicit byte order. The host byte order is never consulted.
//!
//! These are unchecked primitives: there is no error path. The slice entry
//! points rely on ordinary indexing and panic when the buffer is shorter than
//! the value width. The [`raw`] entry points take pointers and perform no
//! check at all; a short buffer there is undefined behavior.

/// Width of a `u16` on the wire.
pub const U16_LEN: usize = 2;

/// Width of a `u32` on the wire.
pub const U32_LEN: usize = 4;

/// Byte order used by the fixed-width codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Network byte order.
    pub const NETWORK: ByteOrder = ByteOrder::Big;

    /// Store a `u16` into the first 2 bytes of `dst`.
    ///
    /// # Panics
    /// Panics if `dst` is shorter than 2 bytes.
    #[inline]
    pub fn store_u16(self, value: u16, dst: &mut [u8]) {
        match self {
            ByteOrder::Little => store_u16_le(value, dst),
            ByteOrder::Big => store_u16_be(value, dst),
        }
    }

    /// Store a `u32` into the first 4 bytes of `dst`.
    ///
    /// # Panics
    /// Panics if `dst` is shorter than 4 bytes.
    #[inline]
    pub fn store_u32(self, value: u32, dst: &mut [u8]) {
        match self {
            ByteOrder::Little => store_u32_le(value, dst),
            ByteOrder::Big => store_u32_be(value, dst),
        }
    }

    /// Load a `u16` from the first 2 bytes of `src`.
    ///
    /// # Panics
    /// Panics if `src` is shorter than 2 bytes.
    #[inline]
    pub fn load_u16(self, src: &[u8]) -> u16 {
        match self {
            ByteOrder::Little => load_u16_le(src),
            ByteOrder::Big => load_u16_be(src),
        }
    }

    /// Load a `u32` from the first 4 bytes of `src`.
    ///
    /// # Panics
    /// Panics if `src` is shorter than 4 bytes.
    #[inline]
    pub fn load_u32(self, src: &[u8]) -> u32 {
        match self {
            ByteOrder::Little => load_u32_le(src),
            ByteOrder::Big => load_u32_be(src),
        }
    }
}

/// Store `value` little-endian into `dst[..2]`.
#[inline]
pub fn store_u16_le(value: u16, dst: &mut [u8]) {
    dst[..U16_LEN].copy_from_slice(&value.to_le_bytes());
}

/// Store `value` little-endian into `dst[..4]`.
#[inline]
pub fn store_u32_le(value: u32, dst: &mut [u8]) {
    dst[..U32_LEN].copy_from_slice(&value.to_le_bytes());
}

/// Load a little-endian `u16` from `src[..2]`.
#[inline]
pub fn load_u16_le(src: &[u8]) -> u16 {
    u16::from_le_bytes([src[0], src[1]])
}

/// Load a little-endian `u32` from `src[..4]`.
#[inline]
pub fn load_u32_le(src: &[u8]) -> u32 {
    u32::from_le_bytes([src[0], src[1], src[2], src[3]])
}

/// Store `value` big-endian into `dst[..2]`.
#[inline]
pub fn store_u16_be(value: u16, dst: &mut [u8]) {
    dst[..U16_LEN].copy_from_slice(&value.to_be_bytes());
}

/// Store `value` big-endian into `dst[..4]`.
#[inline]
pub fn store_u32_be(value: u32, dst: &mut [u8]) {
    dst[..U32_LEN].copy_from_slice(&value.to_be_bytes());
}

/// Load a big-endian `u16` from `src[..2]`.
#[inline]
pub fn load_u16_be(src: &[u8]) -> u16 {
    u16::from_be_bytes([src[0], src[1]])
}

/// Load a big-endian `u32` from `src[..4]`.
#[inline]
pub fn load_u32_be(src: &[u8]) -> u32 {
    u32::from_be_bytes([src[0], src[1], src[2], src[3]])
}

/// Pointer-based fixed-width codec with no bounds checks.
///
/// Pointers need not be aligned.
pub mod raw {
    use std::ptr;

    use super::{U16_LEN, U32_LEN};

    /// # Safety
    /// `dst` must be valid for writes of 2 bytes.
    #[inline]
    pub unsafe fn store_u16_le(value: u16, dst: *mut u8) {
        // SAFETY: Caller guarantees `dst` is writable for U16_LEN bytes.
        unsafe { ptr::copy_nonoverlapping(value.to_le_bytes().as_ptr(), dst, U16_LEN) }
    }

    /// # Safety
    /// `dst` must be valid for writes of 4 bytes.
    #[inline]
    pub unsafe fn store_u32_le(value: u32, dst: *mut u8) {
        // SAFETY: Caller guarantees `dst` is writable for U32_LEN bytes.
        unsafe { ptr::copy_nonoverlapping(value.to_le_bytes().as_ptr(), dst, U32_LEN) }
    }

    /// # Safety
    /// `src` must be valid for reads of 2 bytes.
    #[inline]
    pub unsafe fn load_u16_le(src: *const u8) -> u16 {
        // SAFETY: Caller guarantees `src` is readable for U16_LEN bytes; [u8; N] has alignment 1.
        u16::from_le_bytes(unsafe { ptr::read(src.cast::<[u8; U16_LEN]>()) })
    }

    /// # Safety
    /// `src` must be valid for reads of 4 bytes.
    #[inline]
    pub unsafe fn load_u32_le(src: *const u8) -> u32 {
        // SAFETY: Caller guarantees `src` is readable for U32_LEN bytes; [u8; N] has alignment 1.
        u32::from_le_bytes(unsafe { ptr::read(src.cast::<[u8; U32_LEN]>()) })
    }

    /// # Safety
    /// `dst` must be valid for writes of 2 bytes.
    #[inline]
    pub unsafe fn store_u16_be(value: u16, dst: *mut u8) {
        // SAFETY: Caller guarantees `dst` is writable for U16_LEN bytes.
        unsafe { ptr::copy_nonoverlapping(value.to_be_bytes().as_ptr(), dst, U16_LEN) }
    }

    /// # Safety
    /// `dst` must be valid for writes of 4 bytes.
    #[inline]
    pub unsafe fn store_u32_be(value: u32, dst: *mut u8) {
        // SAFETY: Caller guarantees `dst` is writable for U32_LEN bytes.
        unsafe { ptr::copy_nonoverlapping(value.to_be_bytes().as_ptr(), dst, U32_LEN) }
    }

    /// # Safety
    /// `src` must be valid for reads of 2 bytes.
    #[inline]
    pub unsafe fn load_u16_be(src: *const u8) -> u16 {
        // SAFETY: Caller guarantees `src` is readable for U16_LEN bytes; [u8; N] has alignment 1.
        u16::from_be_bytes(unsafe { ptr::read(src.cast::<[u8; U16_LEN]>()) })
    }

    /// # Safety
    /// `src` must be valid for reads of 4 bytes.
    #[inline]
    pub unsafe fn load_u32_be(src: *const u8) -> u32 {
        // SAFETY: Caller guarantees `src` is readable for U32_LEN bytes; [u8; N] has alignment 1.
        u32::from_be_bytes(unsafe { ptr::read(src.cast::<[u8; U32_LEN]>()) })
    }
}
