//! AES and DES block primitives
//!
//! Thin keyed wrappers around the RustCrypto `aes` and `des` crates that
//! implement [`BlockCipher`], so the modes in this crate can drive them.

use std::fmt;

use aes::cipher::{Block, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use des::Des as DesCore;

use crate::cipher::BlockCipher;
use crate::error::{CipherModeError, Result};

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// DES key size in bytes (parity bits included)
pub const DES_KEY_SIZE: usize = 8;

fn check_block(block: &[u8], expected: usize) -> Result<()> {
    if block.len() != expected {
        return Err(CipherModeError::InvalidBlockLength {
            expected,
            actual: block.len(),
        });
    }
    Ok(())
}

fn encrypt_with<C: BlockEncrypt>(cipher: &C, block: &[u8]) -> Result<Vec<u8>> {
    check_block(block, C::block_size())?;
    let mut buf = Block::<C>::clone_from_slice(block);
    cipher.encrypt_block(&mut buf);
    Ok(buf.to_vec())
}

fn decrypt_with<C: BlockDecrypt>(cipher: &C, block: &[u8]) -> Result<Vec<u8>> {
    check_block(block, C::block_size())?;
    let mut buf = Block::<C>::clone_from_slice(block);
    cipher.decrypt_block(&mut buf);
    Ok(buf.to_vec())
}

#[derive(Clone)]
enum AesVariant {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

/// AES with a 128, 192 or 256 bit key
#[derive(Clone)]
pub struct Aes {
    inner: AesVariant,
}

impl Aes {
    /// Create an AES cipher, choosing the variant from the key length
    ///
    /// # Arguments
    ///
    /// * `key` - 16, 24 or 32 raw key bytes
    ///
    /// # Example
    ///
    /// ```rust
    /// use cipher_modes::{Aes, BlockCipher};
    ///
    /// let cipher = Aes::new(b"0123456789abcdef")?;
    /// assert_eq!(cipher.name(), "AES-128");
    /// # Ok::<(), cipher_modes::CipherModeError>(())
    /// ```
    pub fn new(key: &[u8]) -> Result<Self> {
        let inner = match key.len() {
            16 => Aes128::new_from_slice(key).map(AesVariant::Aes128),
            24 => Aes192::new_from_slice(key).map(AesVariant::Aes192),
            32 => Aes256::new_from_slice(key).map(AesVariant::Aes256),
            _ => return Err(Self::key_error(key.len())),
        }
        .map_err(|_| Self::key_error(key.len()))?;

        Ok(Self { inner })
    }

    fn key_error(actual: usize) -> CipherModeError {
        CipherModeError::InvalidKeyLength {
            cipher: "AES",
            expected: "16, 24 or 32",
            actual,
        }
    }
}

impl BlockCipher for Aes {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        match &self.inner {
            AesVariant::Aes128(c) => encrypt_with(c, block),
            AesVariant::Aes192(c) => encrypt_with(c, block),
            AesVariant::Aes256(c) => encrypt_with(c, block),
        }
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        match &self.inner {
            AesVariant::Aes128(c) => decrypt_with(c, block),
            AesVariant::Aes192(c) => decrypt_with(c, block),
            AesVariant::Aes256(c) => decrypt_with(c, block),
        }
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn name(&self) -> &'static str {
        match self.inner {
            AesVariant::Aes128(_) => "AES-128",
            AesVariant::Aes192(_) => "AES-192",
            AesVariant::Aes256(_) => "AES-256",
        }
    }
}

// Key schedules stay out of debug output.
impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes").field("variant", &self.name()).finish_non_exhaustive()
    }
}

/// Single DES with an 8 byte key
#[derive(Clone)]
pub struct Des {
    inner: DesCore,
}

impl Des {
    /// Create a DES cipher from exactly 8 key bytes
    pub fn new(key: &[u8]) -> Result<Self> {
        let key_error = || CipherModeError::InvalidKeyLength {
            cipher: "DES",
            expected: "8",
            actual: key.len(),
        };

        if key.len() != DES_KEY_SIZE {
            return Err(key_error());
        }
        let inner = DesCore::new_from_slice(key).map_err(|_| key_error())?;
        Ok(Self { inner })
    }
}

impl BlockCipher for Des {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        encrypt_with(&self.inner, block)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>> {
        decrypt_with(&self.inner, block)
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn name(&self) -> &'static str {
        "DES"
    }
}

impl fmt::Debug for Des {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Des").finish_non_exhaustive()
    }
}
