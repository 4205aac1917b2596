/// Errors returned by the checked (varint) codec operations.
///
/// The fixed-width codec never returns these: it is an unchecked primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// An input the operation validates was empty or absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The encoded form of the value does not fit into the output buffer.
    #[error("buffer too small ({needed} bytes needed, capacity {capacity})")]
    BufferTooSmall { needed: usize, capacity: usize },

    /// Input ended while the last byte read still had its continuation bit set.
    #[error("truncated varint (input ended after {consumed} bytes)")]
    TruncatedVarint { consumed: usize },

    /// The encoded value does not fit into 32 bits.
    #[error("varint overflows 32 bits")]
    VarintOverflow,
}

impl CodecError {
    /// The category of this error, without its details.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CodecError::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            CodecError::TruncatedVarint { .. } => ErrorKind::TruncatedVarint,
            CodecError::VarintOverflow => ErrorKind::VarintOverflow,
        }
    }
}

/// Fieldless counterpart of [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    InvalidArgument,
    BufferTooSmall,
    TruncatedVarint,
    VarintOverflow,
}

pub type Result<T> = std::result::Result<T, CodecError>;
