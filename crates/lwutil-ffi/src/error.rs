use std::cell::{Cell, RefCell};
use std::ffi::CString;
use std::os::raw::c_char;

use lwutil_codec::CodecError;

use crate::types::LwutilResult;

thread_local! {
    static LAST_ERROR: RefCell<CString> = RefCell::new(CString::default());
    static LAST_CODE: Cell<LwutilResult> = const { Cell::new(LwutilResult::Ok) };
}

pub(crate) fn clear_error_state() {
    LAST_ERROR.with(|state| {
        *state.borrow_mut() = CString::default();
    });
    LAST_CODE.with(|code| code.set(LwutilResult::Ok));
}

pub(crate) fn set_error(code: LwutilResult, message: impl Into<String>) {
    let message = message.into();
    let sanitized = message.replace('\0', "?");
    LAST_ERROR.with(|state| {
        *state.borrow_mut() = CString::new(sanitized).unwrap_or_default();
    });
    LAST_CODE.with(|state| state.set(code));
}

pub(crate) fn set_invalid_argument(message: impl Into<String>) {
    set_error(LwutilResult::InvalidArgument, message);
}

pub(crate) fn set_panic_error() {
    set_error(LwutilResult::Internal, "panic across FFI boundary");
}

pub(crate) fn record_codec_error(err: &CodecError) {
    set_error(LwutilResult::from(err.kind()), err.to_string());
}

pub(crate) fn last_error_ptr() -> *const c_char {
    LAST_ERROR.with(|state| state.borrow().as_ptr())
}

pub(crate) fn last_error_code() -> LwutilResult {
    LAST_CODE.with(Cell::get)
}
