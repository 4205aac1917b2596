//! Unchecked fixed-width exports.
//!
//! No null or length checks and no error state: these mirror a direct memory
//! store/load and are undefined behavior on a short or invalid buffer.

use std::ffi::c_void;

use lwutil_codec::endian::raw;

/// Store `val` little-endian into 2 bytes at `ptr`.
///
/// # Safety
/// `ptr` must be valid for writes of 2 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_st_u16_le(val: u16, ptr: *mut c_void) {
    // SAFETY: Forwarded caller guarantee.
    unsafe { raw::store_u16_le(val, ptr.cast()) }
}

/// Store `val` little-endian into 4 bytes at `ptr`.
///
/// # Safety
/// `ptr` must be valid for writes of 4 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_st_u32_le(val: u32, ptr: *mut c_void) {
    // SAFETY: Forwarded caller guarantee.
    unsafe { raw::store_u32_le(val, ptr.cast()) }
}

/// Load a little-endian `u16` from 2 bytes at `ptr`.
///
/// # Safety
/// `ptr` must be valid for reads of 2 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_ld_u16_le(ptr: *const c_void) -> u16 {
    // SAFETY: Forwarded caller guarantee.
    unsafe { raw::load_u16_le(ptr.cast()) }
}

/// Load a little-endian `u32` from 4 bytes at `ptr`.
///
/// # Safety
/// `ptr` must be valid for reads of 4 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_ld_u32_le(ptr: *const c_void) -> u32 {
    // SAFETY: Forwarded caller guarantee.
    unsafe { raw::load_u32_le(ptr.cast()) }
}

/// Store `val` big-endian into 2 bytes at `ptr`.
///
/// # Safety
/// `ptr` must be valid for writes of 2 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_st_u16_be(val: u16, ptr: *mut c_void) {
    // SAFETY: Forwarded caller guarantee.
    unsafe { raw::store_u16_be(val, ptr.cast()) }
}

/// Store `val` big-endian into 4 bytes at `ptr`.
///
/// # Safety
/// `ptr` must be valid for writes of 4 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_st_u32_be(val: u32, ptr: *mut c_void) {
    // SAFETY: Forwarded caller guarantee.
    unsafe { raw::store_u32_be(val, ptr.cast()) }
}

/// Load a big-endian `u16` from 2 bytes at `ptr`.
///
/// # Safety
/// `ptr` must be valid for reads of 2 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_ld_u16_be(ptr: *const c_void) -> u16 {
    // SAFETY: Forwarded caller guarantee.
    unsafe { raw::load_u16_be(ptr.cast()) }
}

/// Load a big-endian `u32` from 4 bytes at `ptr`.
///
/// # Safety
/// `ptr` must be valid for reads of 4 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_ld_u32_be(ptr: *const c_void) -> u32 {
    // SAFETY: Forwarded caller guarantee.
    unsafe { raw::load_u32_be(ptr.cast()) }
}
