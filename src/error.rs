//! Error types for buffer and codec operations

use thiserror::Error;

/// Error type for buffer and codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid bool")]
    InvalidBool,
    #[error("invalid char: {0:#x}")]
    InvalidChar(u32),
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("length not addressable: {0}")]
    InvalidLength(u64),
    #[error("invalid cursor position: {0}")]
    InvalidPosition(i64),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
