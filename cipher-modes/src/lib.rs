//! # Cipher Modes Library
//!
//! Block ciphers in CBC mode for the cryptokit toolkit.
//!
//! ## Supported Ciphers
//!
//! - **AES** (128/192/256 bit keys, 16 byte blocks)
//! - **DES** (8 byte key, 8 byte blocks) - broken, kept for teaching
//!
//! Messages are padded with PKCS#7 and chained in **CBC** mode. A sealed
//! message carries its random IV in front of the ciphertext; the [`armor`]
//! module turns it into the `base64(IV):base64(ciphertext)` text form.
//!
//! ## Usage
//!
//! ```rust
//! use cipher_modes::{Aes, CipherModes};
//!
//! let cipher = Aes::new(b"my-secret-key-16")?;
//! let plaintext = b"Hello, World!";
//! let iv = b"initialization16";
//!
//! // Encrypt using CBC mode
//! let encrypted = CipherModes::cbc_encrypt(&cipher, plaintext, iv)?;
//!
//! // Decrypt
//! let decrypted = CipherModes::cbc_decrypt(&cipher, &encrypted, iv)?;
//! assert_eq!(decrypted, plaintext);
//!
//! // Or let the library pick the IV
//! let sealed = CipherModes::cbc_seal(&cipher, plaintext)?;
//! assert_eq!(CipherModes::cbc_open(&cipher, &sealed)?, plaintext);
//! # Ok::<(), cipher_modes::CipherModeError>(())
//! ```

// Public modules
pub mod armor;
pub mod block;
pub mod cipher;
pub mod error;
pub mod modes;
pub mod utils;

// Re-exports for easy access
pub use block::{Aes, Des};
pub use cipher::BlockCipher;
pub use error::{CipherModeError, Result};
pub use modes::CipherModes;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience functions for common operations
impl CipherModes {
    /// Get version information
    pub fn version() -> &'static str {
        VERSION
    }

    /// List all supported cipher modes
    pub fn supported_modes() -> Vec<&'static str> {
        vec!["CBC"]
    }

    /// Validate block size
    pub fn validate_block_size(block_size: usize) -> Result<()> {
        if block_size == 0 {
            Err(CipherModeError::InvalidBlockSize)
        } else {
            Ok(())
        }
    }

    /// Validate IV length for modes that require it
    pub fn validate_iv_length(iv: &[u8], block_size: usize) -> Result<()> {
        if iv.len() != block_size {
            Err(CipherModeError::InvalidIvLength)
        } else {
            Ok(())
        }
    }
}
