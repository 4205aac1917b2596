//! lwutil-ffi: C-ABI exports for the lwutil codecs.
//!
//! Fixed-width and hex exports are unchecked. Varint exports return `0` on
//! failure and record the cause in thread-local state, read back with
//! [`lwutil_last_error_code`] and [`lwutil_last_error`].

mod args;
mod endian;
mod error;
mod hex;
mod types;
mod varint;

use std::panic::AssertUnwindSafe;

pub use endian::{
    lwutil_ld_u16_be, lwutil_ld_u16_le, lwutil_ld_u32_be, lwutil_ld_u32_le, lwutil_st_u16_be,
    lwutil_st_u16_le, lwutil_st_u32_be, lwutil_st_u32_le,
};
pub use hex::{lwutil_u16_to_4asciis, lwutil_u32_to_8asciis, lwutil_u8_to_2asciis};
pub use types::{
    LwutilResult, LWUTIL_ERR_BUFFER_TOO_SMALL, LWUTIL_ERR_INTERNAL, LWUTIL_ERR_INVALID_ARGUMENT,
    LWUTIL_ERR_TRUNCATED_VARINT, LWUTIL_ERR_VARINT_OVERFLOW, LWUTIL_OK,
};
pub use varint::{lwutil_ld_u32_varint, lwutil_st_u32_varint};

fn ffi_boundary<T>(on_panic: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            error::set_panic_error();
            on_panic
        }
    }
}

/// Reset the calling thread's error state.
#[no_mangle]
pub extern "C" fn lwutil_clear_error() {
    ffi_boundary((), error::clear_error_state);
}

/// Result code of the last varint call on this thread.
#[no_mangle]
pub extern "C" fn lwutil_last_error_code() -> LwutilResult {
    ffi_boundary(LwutilResult::Internal, error::last_error_code)
}

/// Message for the last varint failure on this thread, or an empty string.
///
/// The pointer stays valid until the next varint call on the same thread.
#[no_mangle]
pub extern "C" fn lwutil_last_error() -> *const std::os::raw::c_char {
    ffi_boundary(std::ptr::null(), error::last_error_ptr)
}
