//! Error types for cipher mode operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherModeError {
    #[error("Invalid block size (must be > 0)")]
    InvalidBlockSize,

    #[error("Invalid block length: expected {expected} bytes, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    #[error("Invalid IV length (must match block size)")]
    InvalidIvLength,

    #[error("{cipher} key must be {expected} bytes, got {actual}")]
    InvalidKeyLength {
        cipher: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("Padding error")]
    PaddingError,

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Encryption error: {0}")]
    EncryptionError(String),
}

pub type Result<T> = std::result::Result<T, CipherModeError>;
