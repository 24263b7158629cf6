//! Error types for the classical cipher engines

use thiserror::Error;

/// Malformed construction input. Only ever returned while building an engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Table must contain exactly {expected} alphabetic characters, got {actual}")]
    InvalidTableSize { expected: usize, actual: usize },

    #[error("Letter '{0}' appears more than once in the Playfair matrix")]
    DuplicateLetter(char),

    #[error("Key must contain at least one letter")]
    EmptyKey,

    #[error("Key contains non-alphabetic character {0:?}")]
    InvalidKeyCharacter(char),
}

/// Failure while running an encrypt or decrypt call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Vigenère table row '{row}' has no entry for '{letter}'")]
    CorruptTable { row: char, letter: char },

    #[error("Playfair ciphertext must have an even number of letters, got {0}")]
    OddLength(usize),

    #[error("Playfair ciphertext contains non-alphabetic character {0:?}")]
    InvalidCiphertext(char),
}

pub type Result<T> = std::result::Result<T, CipherError>;
