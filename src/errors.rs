//! Error types for thread-index

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Reasons a Thread-Index header could not be decoded
pub enum DecodeError {
    /// The header value was empty or only whitespace
    #[error("Thread index header is empty")]
    Empty,
    /// The header value is not valid base64
    #[error("Thread index is not valid base64 - {0}")]
    Base64(#[from] base64::DecodeError),
    /// The header value decoded to zero bytes
    #[error("Thread index decoded to no data")]
    NoData,
    /// The decoded data is too short to contain a header block
    #[error("Thread index too short - {0} bytes, need at least {min}", min = crate::HEADER_BLOCK_LEN)]
    Truncated(usize),
}
