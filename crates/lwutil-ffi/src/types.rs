use lwutil_codec::ErrorKind;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LwutilResult {
    Ok = 0,
    InvalidArgument = 1,
    BufferTooSmall = 2,
    TruncatedVarint = 3,
    VarintOverflow = 4,
    Internal = 99,
}

impl From<ErrorKind> for LwutilResult {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidArgument => LwutilResult::InvalidArgument,
            ErrorKind::BufferTooSmall => LwutilResult::BufferTooSmall,
            ErrorKind::TruncatedVarint => LwutilResult::TruncatedVarint,
            ErrorKind::VarintOverflow => LwutilResult::VarintOverflow,
        }
    }
}

#[allow(dead_code)]
pub const LWUTIL_OK: LwutilResult = LwutilResult::Ok;
#[allow(dead_code)]
pub const LWUTIL_ERR_INVALID_ARGUMENT: LwutilResult = LwutilResult::InvalidArgument;
#[allow(dead_code)]
pub const LWUTIL_ERR_BUFFER_TOO_SMALL: LwutilResult = LwutilResult::BufferTooSmall;
#[allow(dead_code)]
pub const LWUTIL_ERR_TRUNCATED_VARINT: LwutilResult = LwutilResult::TruncatedVarint;
#[allow(dead_code)]
pub const LWUTIL_ERR_VARINT_OVERFLOW: LwutilResult = LwutilResult::VarintOverflow;
#[allow(dead_code)]
pub const LWUTIL_ERR_INTERNAL: LwutilResult = LwutilResult::Internal;
