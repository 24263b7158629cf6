//! Text form of sealed messages: `base64(IV):base64(ciphertext)`

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{CipherModeError, Result};

/// Encode an `IV || ciphertext` message as `base64(IV):base64(ciphertext)`
pub fn armor(sealed: &[u8], block_size: usize) -> Result<String> {
    if block_size == 0 || sealed.len() < block_size {
        return Err(CipherModeError::InvalidIvLength);
    }
    let (iv, ciphertext) = sealed.split_at(block_size);
    Ok(format!("{}:{}", STANDARD.encode(iv), STANDARD.encode(ciphertext)))
}

/// Decode armored text back into `IV || ciphertext`
///
/// Surrounding whitespace (a trailing newline from a file) is ignored.
pub fn dearmor(text: &str) -> Result<Vec<u8>> {
    let (iv, ciphertext) = text
        .trim()
        .split_once(':')
        .ok_or_else(|| CipherModeError::InvalidEncoding("expected IV:ciphertext".to_string()))?;

    let mut sealed = STANDARD
        .decode(iv)
        .map_err(|e| CipherModeError::InvalidEncoding(format!("IV: {e}")))?;
    let ciphertext = STANDARD
        .decode(ciphertext)
        .map_err(|e| CipherModeError::InvalidEncoding(format!("ciphertext: {e}")))?;

    sealed.extend(ciphertext);
    Ok(sealed)
}
