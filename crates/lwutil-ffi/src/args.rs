use std::ffi::c_void;

use crate::error;

/// Convert a required input pointer + length into a slice.
///
/// # Safety
/// If `ptr` is non-null, it must be readable for `len` bytes for the duration of the call.
pub(crate) unsafe fn bytes_arg<'a>(ptr: *const c_void, len: usize, name: &str) -> Option<&'a [u8]> {
    if ptr.is_null() {
        error::set_invalid_argument(format!("{name} cannot be null"));
        return None;
    }
    if len == 0 {
        error::set_invalid_argument(format!("{name} length must be non-zero"));
        return None;
    }

    // SAFETY: Pointer and length are validated above and owned by caller for the call duration.
    Some(unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), len) })
}

/// Convert a required output pointer + length into a mutable slice.
///
/// # Safety
/// If `ptr` is non-null, it must be writable for `len` bytes and not aliased for the duration of
/// the call.
pub(crate) unsafe fn bytes_mut_arg<'a>(
    ptr: *mut c_void,
    len: usize,
    name: &str,
) -> Option<&'a mut [u8]> {
    if ptr.is_null() {
        error::set_invalid_argument(format!("{name} cannot be null"));
        return None;
    }
    if len == 0 {
        error::set_invalid_argument(format!("{name} length must be non-zero"));
        return None;
    }

    // SAFETY: Pointer and length are validated above; exclusivity is guaranteed by the caller.
    Some(unsafe { std::slice::from_raw_parts_mut(ptr.cast::<u8>(), len) })
}
