use std::os::raw::c_char;
use std::ptr;

use lwutil_codec::hex;

/// # Safety
/// `ascii` must be valid for writes of `digits.len() + 1` bytes.
unsafe fn write_nul_terminated(digits: &[u8], ascii: *mut c_char) {
    let dst = ascii.cast::<u8>();
    // SAFETY: Caller guarantees room for the digits and the terminator.
    unsafe {
        ptr::copy_nonoverlapping(digits.as_ptr(), dst, digits.len());
        dst.add(digits.len()).write(0);
    }
}

/// Write `value` as 2 lowercase hex digits plus a NUL terminator.
///
/// # Safety
/// `ascii` must be valid for writes of 3 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_u8_to_2asciis(value: u8, ascii: *mut c_char) {
    // SAFETY: Forwarded caller guarantee.
    unsafe { write_nul_terminated(&hex::u8_to_hex(value), ascii) }
}

/// Write `value` as 4 lowercase hex digits plus a NUL terminator.
///
/// # Safety
/// `ascii` must be valid for writes of 5 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_u16_to_4asciis(value: u16, ascii: *mut c_char) {
    // SAFETY: Forwarded caller guarantee.
    unsafe { write_nul_terminated(&hex::u16_to_hex(value), ascii) }
}

/// Write `value` as 8 lowercase hex digits plus a NUL terminator.
///
/// # Safety
/// `ascii` must be valid for writes of 9 bytes.
#[no_mangle]
pub unsafe extern "C" fn lwutil_u32_to_8asciis(value: u32, ascii: *mut c_char) {
    // SAFETY: Forwarded caller guarantee.
    unsafe { write_nul_terminated(&hex::u32_to_hex(value), ascii) }
}
