//! CBC (Cipher Block Chaining) mode implementation

use rand::RngCore;
use tracing::debug;

use crate::{BlockCipher, Result, utils, error::CipherModeError};

use super::CipherModes;

impl CipherModes {
    /// CBC mode encryption
    ///
    /// The plaintext is PKCS#7 padded, so the ciphertext is always at least
    /// one block long.
    ///
    /// Algorithm:
    /// 1. C_0 = IV
    /// 2. C_i = E(K, P_i ⊕ C_{i-1})
    pub fn cbc_encrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        plaintext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;

        let padded_data = utils::add_padding(plaintext, block_size);
        let mut ciphertext = Vec::with_capacity(padded_data.len());
        let mut previous_block = iv.to_vec();

        for chunk in padded_data.chunks(block_size) {
            let xored = utils::xor_blocks(chunk, &previous_block)?;
            let encrypted_block = cipher.encrypt_block(&xored)?;
            ciphertext.extend(&encrypted_block);
            previous_block = encrypted_block;
        }

        Ok(ciphertext)
    }

    /// CBC mode decryption
    ///
    /// Fails with [`CipherModeError::PaddingError`] when the ciphertext is
    /// empty, not block aligned, or does not end in valid PKCS#7 padding
    /// (which is also what a wrong key usually looks like).
    pub fn cbc_decrypt<C: BlockCipher + ?Sized>(
        cipher: &C,
        ciphertext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        Self::validate_block_size(block_size)?;
        Self::validate_iv_length(iv, block_size)?;

        if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
            return Err(CipherModeError::PaddingError);
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut previous_block = iv;

        for chunk in ciphertext.chunks(block_size) {
            let decrypted_block = cipher.decrypt_block(chunk)?;
            let xored = utils::xor_blocks(&decrypted_block, previous_block)?;
            plaintext.extend(xored);
            previous_block = chunk;
        }

        utils::remove_padding(&plaintext, block_size)
    }

    /// Encrypt under a fresh random IV and return `IV || ciphertext`
    pub fn cbc_seal<C: BlockCipher + ?Sized>(cipher: &C, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut iv = vec![0u8; cipher.block_size()];
        rand::thread_rng().fill_bytes(&mut iv);
        Self::cbc_seal_with_iv(cipher, plaintext, &iv)
    }

    /// Encrypt under the given IV and return `IV || ciphertext`
    pub fn cbc_seal_with_iv<C: BlockCipher + ?Sized>(
        cipher: &C,
        plaintext: &[u8],
        iv: &[u8],
    ) -> Result<Vec<u8>> {
        let ciphertext = Self::cbc_encrypt(cipher, plaintext, iv)?;
        debug!(
            cipher = cipher.name(),
            iv = %hex::encode(iv),
            bytes = plaintext.len(),
            "CBC sealed message"
        );

        let mut sealed = Vec::with_capacity(iv.len() + ciphertext.len());
        sealed.extend_from_slice(iv);
        sealed.extend(ciphertext);
        Ok(sealed)
    }

    /// Split an `IV || ciphertext` message and decrypt it
    pub fn cbc_open<C: BlockCipher + ?Sized>(cipher: &C, sealed: &[u8]) -> Result<Vec<u8>> {
        let block_size = cipher.block_size();
        if sealed.len() < block_size {
            return Err(CipherModeError::InvalidIvLength);
        }

        let (iv, ciphertext) = sealed.split_at(block_size);
        debug!(cipher = cipher.name(), iv = %hex::encode(iv), "opening CBC message");
        Self::cbc_decrypt(cipher, ciphertext, iv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Aes, Des};

    #[test]
    fn test_cbc_encrypt_decrypt() {
        let cipher = Des::new(b"testkey1").unwrap();
        let plaintext = b"Hello World! This is a test message.";
        let iv = b"initialv";

        let ciphertext = CipherModes::cbc_encrypt(&cipher, plaintext, iv).unwrap();
        assert_eq!(ciphertext.len(), 40);

        let decrypted = CipherModes::cbc_decrypt(&cipher, &ciphertext, iv).unwrap();
        assert_eq!(plaintext, &decrypted[..]);
    }

    #[test]
    fn test_cbc_nist_first_block() {
        // NIST SP 800-38A, F.2.1 CBC-AES128.Encrypt, block #1
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let plaintext = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();

        let cipher = Aes::new(&key).unwrap();
        let ciphertext = CipherModes::cbc_encrypt(&cipher, &plaintext, &iv).unwrap();

        // One data block plus one full padding block.
        assert_eq!(ciphertext.len(), 32);
        assert_eq!(hex::encode(&ciphertext[..16]), "7649abac8119b246cee98e9b12e9197d");
    }

    #[test]
    fn test_cbc_invalid_iv_length() {
        let cipher = Aes::new(b"0123456789abcdef").unwrap();
        let result = CipherModes::cbc_encrypt(&cipher, b"Hello", b"short");
        assert!(matches!(result, Err(CipherModeError::InvalidIvLength)));
    }

    #[test]
    fn test_cbc_decrypt_unaligned() {
        let cipher = Des::new(b"testkey1").unwrap();
        let result = CipherModes::cbc_decrypt(&cipher, &[0u8; 12], b"initialv");
        assert!(matches!(result, Err(CipherModeError::PaddingError)));

        let result = CipherModes::cbc_decrypt(&cipher, &[], b"initialv");
        assert!(matches!(result, Err(CipherModeError::PaddingError)));
    }

    #[test]
    fn test_cbc_empty_plaintext() {
        let cipher = Des::new(b"testkey1").unwrap();
        let ciphertext = CipherModes::cbc_encrypt(&cipher, b"", b"initialv").unwrap();
        assert_eq!(ciphertext.len(), 8);
        assert!(CipherModes::cbc_decrypt(&cipher, &ciphertext, b"initialv")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_seal_open_round_trip() {
        let cipher = Aes::new(&[7u8; 32]).unwrap();
        let plaintext = b"sealed with a random IV";

        let first = CipherModes::cbc_seal(&cipher, plaintext).unwrap();
        let second = CipherModes::cbc_seal(&cipher, plaintext).unwrap();
        assert_ne!(first, second);

        assert_eq!(CipherModes::cbc_open(&cipher, &first).unwrap(), plaintext);
        assert_eq!(CipherModes::cbc_open(&cipher, &second).unwrap(), plaintext);
    }

    #[test]
    fn test_seal_with_iv_prefixes_iv() {
        let cipher = Des::new(b"testkey1").unwrap();
        let sealed = CipherModes::cbc_seal_with_iv(&cipher, b"abc", b"initialv").unwrap();
        assert_eq!(&sealed[..8], b"initialv");
        assert_eq!(sealed.len(), 16);
    }

    #[test]
    fn test_open_too_short() {
        let cipher = Des::new(b"testkey1").unwrap();
        let result = CipherModes::cbc_open(&cipher, b"1234");
        assert!(matches!(result, Err(CipherModeError::InvalidIvLength)));
    }

    #[test]
    fn test_open_with_wrong_key_fails_or_differs() {
        let sealed = CipherModes::cbc_seal(&Des::new(b"rightkey").unwrap(), b"secret data").unwrap();
        let result = CipherModes::cbc_open(&Des::new(b"wrongkey").unwrap(), &sealed);
        assert_ne!(result.ok().as_deref(), Some(&b"secret data"[..]));
    }
}
