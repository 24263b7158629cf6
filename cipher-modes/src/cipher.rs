//! Generic block cipher trait

use crate::error::Result;

/// Trait for a keyed block cipher
///
/// The key is bound when the cipher is constructed, so a mode only ever
/// hands over single blocks of exactly [`BlockCipher::block_size`] bytes.
pub trait BlockCipher {
    /// Encrypts a single block
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts a single block
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>>;

    /// Returns the block size of the cipher
    fn block_size(&self) -> usize;

    /// Short algorithm name, e.g. `"AES-128"`
    fn name(&self) -> &'static str;
}
