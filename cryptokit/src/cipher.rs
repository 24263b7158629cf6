//! Uniform dispatch over the four supported ciphers

use anyhow::{bail, Context, Result};
use cipher_modes::{armor, Aes, BlockCipher, CipherModes, Des};
use classical_ciphers::{Playfair, Vigenere};
use clap::ValueEnum;
use tracing::{debug, warn};

/// Cipher algorithm selectable on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CipherKind {
    /// AES-128/192/256 in CBC mode (key file: 16, 24 or 32 characters)
    Aes,
    /// DES in CBC mode (key file: 8 characters)
    Des,
    /// Playfair digraph cipher (table file: 25 letters, or a key file)
    Playfair,
    /// Vigenère cipher (key file, optional 26x26 table file)
    Vigenere,
}

/// A fully configured cipher, ready to process one input.
#[derive(Debug)]
pub enum Cipher {
    Aes(Aes),
    Des(Des),
    Playfair(Playfair),
    Vigenere(Vigenere),
}

impl Cipher {
    /// Builds the cipher from the key and table contents the user supplied.
    ///
    /// `key` is expected to be trimmed already; `table` is raw file text.
    pub fn from_sources(kind: CipherKind, key: Option<&str>, table: Option<&str>) -> Result<Self> {
        let cipher = match (kind, key, table) {
            (CipherKind::Aes | CipherKind::Des, _, Some(_)) => {
                bail!("{kind:?} does not use a table file")
            }
            (CipherKind::Aes, Some(key), None) => Cipher::Aes(Aes::new(key.as_bytes())?),
            (CipherKind::Des, Some(key), None) => Cipher::Des(Des::new(key.as_bytes())?),
            (CipherKind::Aes | CipherKind::Des, None, None) => {
                bail!("{kind:?} requires a key file")
            }

            (CipherKind::Playfair, Some(_), Some(_)) => {
                bail!("Playfair takes either a key file or a table file, not both")
            }
            (CipherKind::Playfair, None, Some(table)) => Cipher::Playfair(
                Playfair::from_table(table).context("invalid Playfair table")?,
            ),
            (CipherKind::Playfair, Some(key), None) => Cipher::Playfair(Playfair::from_key(key)),
            (CipherKind::Playfair, None, None) => {
                bail!("Playfair requires a table file or a key file")
            }

            (CipherKind::Vigenere, Some(key), Some(table)) => Cipher::Vigenere(
                Vigenere::with_table(key, table).context("invalid Vigenère key or table")?,
            ),
            (CipherKind::Vigenere, Some(key), None) => {
                Cipher::Vigenere(Vigenere::new(key).context("invalid Vigenère key")?)
            }
            (CipherKind::Vigenere, None, _) => bail!("Vigenère requires a key file"),
        };

        debug!(cipher = cipher.name(), "cipher configured");
        Ok(cipher)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cipher::Aes(aes) => aes.name(),
            Cipher::Des(_) => "DES",
            Cipher::Playfair(_) => "Playfair",
            Cipher::Vigenere(_) => "Vigenère",
        }
    }

    /// Encrypts `input`
    ///
    /// Block ciphers accept any bytes and return `IV || ciphertext`, or its
    /// armored text form when `armored` is set. Classical ciphers require
    /// UTF-8 text and return text.
    pub fn encrypt(&self, input: &[u8], armored: bool) -> Result<Vec<u8>> {
        match self {
            Cipher::Aes(aes) => seal(aes, input, armored),
            Cipher::Des(des) => seal(des, input, armored),
            Cipher::Playfair(playfair) => {
                self.warn_if_armored(armored);
                Ok(playfair.encrypt(as_text(input)?).into_bytes())
            }
            Cipher::Vigenere(vigenere) => {
                self.warn_if_armored(armored);
                Ok(vigenere.encrypt(as_text(input)?).into_bytes())
            }
        }
    }

    /// Decrypts `input`; the inverse of [`Cipher::encrypt`] with the same `armored` flag.
    pub fn decrypt(&self, input: &[u8], armored: bool) -> Result<Vec<u8>> {
        match self {
            Cipher::Aes(aes) => open(aes, input, armored),
            Cipher::Des(des) => open(des, input, armored),
            Cipher::Playfair(playfair) => {
                self.warn_if_armored(armored);
                Ok(playfair.decrypt(as_text(input)?)?.into_bytes())
            }
            Cipher::Vigenere(vigenere) => {
                self.warn_if_armored(armored);
                Ok(vigenere.decrypt(as_text(input)?)?.into_bytes())
            }
        }
    }

    fn warn_if_armored(&self, armored: bool) {
        if armored {
            warn!(cipher = self.name(), "--armor only applies to AES and DES, ignoring it");
        }
    }
}

fn seal(cipher: &dyn BlockCipher, input: &[u8], armored: bool) -> Result<Vec<u8>> {
    let sealed = CipherModes::cbc_seal(cipher, input)?;
    if armored {
        Ok(armor::armor(&sealed, cipher.block_size())?.into_bytes())
    } else {
        Ok(sealed)
    }
}

fn open(cipher: &dyn BlockCipher, input: &[u8], armored: bool) -> Result<Vec<u8>> {
    let sealed = if armored {
        armor::dearmor(as_text(input)?)?
    } else {
        input.to_vec()
    };
    CipherModes::cbc_open(cipher, &sealed).with_context(|| {
        format!("{} decryption failed (wrong key or corrupted input?)", cipher.name())
    })
}

fn as_text(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).context("input is not valid UTF-8 text")
}
