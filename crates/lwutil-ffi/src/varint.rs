use std::ffi::c_void;

use lwutil_codec::{decode_varint, encode_varint, CodecError};

use crate::args;
use crate::error;

/// Encode `val` as a varint into `ptr`.
///
/// Returns the number of bytes written (1-5), or `0` on failure. The failure
/// cause is available through `lwutil_last_error_code`; `ptr` is left
/// untouched on failure.
///
/// # Safety
/// `ptr` must be null or writable for `ptr_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_st_u32_varint(val: u32, ptr: *mut c_void, ptr_len: usize) -> u8 {
    crate::ffi_boundary(0, || {
        error::clear_error_state();

        let dst = {
            // SAFETY: Null and zero length are rejected in the helper.
            match unsafe { args::bytes_mut_arg(ptr, ptr_len, "ptr") } {
                Some(v) => v,
                None => return 0,
            }
        };

        match encode_varint(val, dst) {
            Ok(len) => len as u8,
            Err(err) => {
                error::record_codec_error(&err);
                0
            }
        }
    })
}

/// Decode a varint from `ptr` into `*val_out`.
///
/// Returns the number of bytes consumed (1-5), or `0` on failure. A truncated
/// or overflowing input writes `0` to `*val_out`; invalid arguments leave it
/// untouched.
///
/// # Safety
/// `ptr` must be null or readable for `ptr_len` bytes. `val_out` must be null or
/// valid for a `u32` write.
#[no_mangle]
pub unsafe extern "C" fn lwutil_ld_u32_varint(
    ptr: *const c_void,
    ptr_len: usize,
    val_out: *mut u32,
) -> u8 {
    crate::ffi_boundary(0, || {
        error::clear_error_state();

        if val_out.is_null() {
            error::set_invalid_argument("val_out cannot be null");
            return 0;
        }

        let src = {
            // SAFETY: Null and zero length are rejected in the helper.
            match unsafe { args::bytes_arg(ptr, ptr_len, "ptr") } {
                Some(v) => v,
                None => return 0,
            }
        };

        let (value, consumed) = match decode_varint(src) {
            Ok(decoded) => decoded,
            Err(err) => {
                error::record_codec_error(&err);
                if !matches!(err, CodecError::InvalidArgument(_)) {
                    // SAFETY: `val_out` was checked for null above.
                    unsafe { val_out.write(0) };
                }
                return 0;
            }
        };

        // SAFETY: `val_out` was checked for null above.
        unsafe { val_out.write(value) };
        consumed as u8
    })
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;
    use crate::error::last_error_code;
    use crate::types::LwutilResult;

    #[test]
    fn decode_150() {
        let mut arr = [0u8; 10];
        arr[0] = 0x96;
        arr[1] = 0x01;
        let mut val = 0u32;

        // SAFETY: `arr` and `val` are valid for the call.
        let len = unsafe { lwutil_ld_u32_varint(arr.as_ptr().cast(), arr.len(), &mut val) };
        assert_eq!((val, len), (150, 2));
        assert_eq!(last_error_code(), LwutilResult::Ok);
    }

    #[test]
    fn decode_truncated_zeroes_output() {
        let arr = [0x9Eu8, 0xA7, 0x05];
        let mut val = 0xFFFF_FFFFu32;

        // SAFETY: the first 2 bytes of `arr` are readable.
        let len = unsafe { lwutil_ld_u32_varint(arr.as_ptr().cast(), 2, &mut val) };
        assert_eq!((val, len), (0, 0));
        assert_eq!(last_error_code(), LwutilResult::TruncatedVarint);
    }

    #[test]
    fn decode_overflow_is_reported() {
        let arr = [0xFFu8; 6];
        let mut val = 7u32;

        // SAFETY: `arr` is readable for its length.
        let len = unsafe { lwutil_ld_u32_varint(arr.as_ptr().cast(), arr.len(), &mut val) };
        assert_eq!((val, len), (0, 0));
        assert_eq!(last_error_code(), LwutilResult::VarintOverflow);
    }

    #[test]
    fn decode_rejects_null_arguments() {
        let arr = [0x01u8];
        let mut val = 42u32;

        // SAFETY: null pointers are rejected before any access.
        unsafe {
            assert_eq!(lwutil_ld_u32_varint(ptr::null(), 1, &mut val), 0);
            assert_eq!(last_error_code(), LwutilResult::InvalidArgument);

            assert_eq!(
                lwutil_ld_u32_varint(arr.as_ptr().cast(), 1, ptr::null_mut()),
                0
            );
            assert_eq!(last_error_code(), LwutilResult::InvalidArgument);

            assert_eq!(lwutil_ld_u32_varint(arr.as_ptr().cast(), 0, &mut val), 0);
            assert_eq!(last_error_code(), LwutilResult::InvalidArgument);
        }
        assert_eq!(val, 42);
    }

    #[test]
    fn encode_values() {
        let mut arr = [0u8; 10];

        // SAFETY: `arr` is writable for its length.
        let len = unsafe { lwutil_st_u32_varint(150, arr.as_mut_ptr().cast(), arr.len()) };
        assert_eq!(len, 2);
        assert_eq!(&arr[..2], &[0x96, 0x01]);

        // SAFETY: as above.
        let len = unsafe { lwutil_st_u32_varint(86942, arr.as_mut_ptr().cast(), arr.len()) };
        assert_eq!(len, 3);
        assert_eq!(&arr[..3], &[0x9E, 0xA7, 0x05]);
    }

    #[test]
    fn encode_buffer_too_small() {
        let mut arr = [0u8; 10];

        // SAFETY: the first 2 bytes of `arr` are writable.
        let len = unsafe { lwutil_st_u32_varint(86942, arr.as_mut_ptr().cast(), 2) };
        assert_eq!(len, 0);
        assert_eq!(last_error_code(), LwutilResult::BufferTooSmall);
    }

    #[test]
    fn encode_rejects_null_and_empty() {
        let mut arr = [0u8; 4];

        // SAFETY: null pointers and zero lengths are rejected before any access.
        unsafe {
            assert_eq!(lwutil_st_u32_varint(1, ptr::null_mut(), 4), 0);
            assert_eq!(last_error_code(), LwutilResult::InvalidArgument);

            assert_eq!(lwutil_st_u32_varint(1, arr.as_mut_ptr().cast(), 0), 0);
            assert_eq!(last_error_code(), LwutilResult::InvalidArgument);
        }
    }

    #[test]
    fn success_clears_previous_error() {
        let mut arr = [0u8; 1];

        // SAFETY: `arr` is writable for 1 byte.
        unsafe {
            assert_eq!(lwutil_st_u32_varint(300, arr.as_mut_ptr().cast(), 1), 0);
            assert_eq!(last_error_code(), LwutilResult::BufferTooSmall);
            assert_eq!(lwutil_st_u32_varint(5, arr.as_mut_ptr().cast(), 1), 1);
        }
        assert_eq!(last_error_code(), LwutilResult::Ok);
    }
}
