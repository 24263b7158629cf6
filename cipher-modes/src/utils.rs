//! Utility functions for cipher modes

use crate::error::{CipherModeError, Result};

/// Add PKCS#7 padding to data
///
/// A full block of padding is appended when the data is already aligned, so
/// the padding can always be removed unambiguously.
pub fn add_padding(data: &[u8], block_size: usize) -> Vec<u8> {
    let padding_needed = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + padding_needed);
    padded.extend_from_slice(data);
    padded.resize(data.len() + padding_needed, padding_needed as u8);
    padded
}

/// Remove and check PKCS#7 padding
pub fn remove_padding(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let pad = *data.last().ok_or(CipherModeError::PaddingError)? as usize;

    if pad == 0 || pad > block_size || pad > data.len() {
        return Err(CipherModeError::PaddingError);
    }

    let (content, padding) = data.split_at(data.len() - pad);
    if padding.iter().any(|&b| b as usize != pad) {
        return Err(CipherModeError::PaddingError);
    }

    Ok(content.to_vec())
}

/// XOR two byte arrays
pub fn xor_blocks(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CipherModeError::EncryptionError(
            "Blocks have different lengths for XOR".to_string()
        ));
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}
