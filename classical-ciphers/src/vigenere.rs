//! Vigenère polyalphabetic cipher with a pluggable substitution table
//!
//! Encryption looks up `table[key letter][plain letter]`. Decryption searches
//! the key letter's row for the ciphertext letter and returns the column.
//! With the standard tabula recta this is the familiar `(p + k) mod 26`
//! shift; a custom table has no closed-form inverse, hence the row search.

use std::fmt;

use tracing::debug;

use crate::error::{CipherError, Result, ValidationError};
use crate::text::{self, letter_at, letter_index, ALPHABET_LEN};

/// 26x26 substitution table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabula {
    rows: [[u8; ALPHABET_LEN]; ALPHABET_LEN],
}

impl Tabula {
    /// The standard tabula recta: row `i`, column `j` holds letter `(i + j) mod 26`.
    pub fn recta() -> Self {
        let mut rows = [[0u8; ALPHABET_LEN]; ALPHABET_LEN];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = letter_at(i + j);
            }
        }
        Self { rows }
    }

    /// Parses a custom table from text
    ///
    /// Exactly 676 ASCII letters are expected, read row-major; whitespace
    /// and any other separators are ignored. The rows are used verbatim and
    /// are not checked to be permutations of the alphabet.
    pub fn from_table(raw: &str) -> std::result::Result<Self, ValidationError> {
        let letters = text::parse_table(raw, ALPHABET_LEN * ALPHABET_LEN)?;

        let mut rows = [[0u8; ALPHABET_LEN]; ALPHABET_LEN];
        for (row, chunk) in rows.iter_mut().zip(letters.chunks_exact(ALPHABET_LEN)) {
            row.copy_from_slice(chunk);
        }
        Ok(Self { rows })
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    pub fn row(&self, row: usize) -> &[u8; ALPHABET_LEN] {
        &self.rows[row]
    }

    /// Column of `letter` within `row`, first match wins.
    pub fn column_of(&self, row: usize, letter: u8) -> Option<usize> {
        self.rows[row].iter().position(|&cell| cell == letter)
    }
}

impl Default for Tabula {
    fn default() -> Self {
        Self::recta()
    }
}

impl fmt::Display for Tabula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell as char)?;
            }
        }
        Ok(())
    }
}

/// Vigenère cipher engine
///
/// # Example
///
/// ```rust
/// use classical_ciphers::Vigenere;
///
/// let cipher = Vigenere::new("key")?;
/// assert_eq!(cipher.encrypt("Hello, World!"), "RIJVS, UYVJN!");
/// assert_eq!(cipher.decrypt("RIJVS, UYVJN!")?, "HELLO, WORLD!");
/// # Ok::<(), classical_ciphers::CipherError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    key: String,
    table: Tabula,
}

impl Vigenere {
    /// Creates an engine using the standard tabula recta.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyKey`] or [`ValidationError::InvalidKeyCharacter`]
    /// unless `key` is made of ASCII letters only.
    pub fn new(key: &str) -> std::result::Result<Self, ValidationError> {
        Self::with_tabula(key, Tabula::recta())
    }

    /// Creates an engine from a key and custom table text (676 letters).
    pub fn with_table(key: &str, raw_table: &str) -> std::result::Result<Self, ValidationError> {
        let table = Tabula::from_table(raw_table)?;
        debug!("loaded custom Vigenère table");
        Self::with_tabula(key, table)
    }

    pub fn with_tabula(key: &str, table: Tabula) -> std::result::Result<Self, ValidationError> {
        let key = normalize_key(key)?;
        debug!(key_len = key.len(), "built Vigenère engine");
        Ok(Self { key, table })
    }

    /// The upper-cased key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn table(&self) -> &Tabula {
        &self.table
    }

    /// Aligns the key with `text`
    ///
    /// Every ASCII letter of `text` receives the next key letter in cyclic
    /// order; every other character is copied through and does not advance
    /// the key.
    pub fn extend_key(&self, text: &str) -> String {
        let mut key_letters = self.key.chars().cycle();
        text.chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    key_letters.next().unwrap_or(ch)
                } else {
                    ch
                }
            })
            .collect()
    }

    /// Encrypts `plaintext`; the output is upper case, non-letters are kept in place.
    pub fn encrypt(&self, plaintext: &str) -> String {
        debug!(chars = plaintext.len(), "Vigenère encrypt");
        let mut key_letters = self.key.as_bytes().iter().cycle();
        plaintext
            .chars()
            .map(|ch| {
                if !ch.is_ascii_alphabetic() {
                    return ch;
                }
                let letter = ch.to_ascii_uppercase() as u8;
                match key_letters.next() {
                    Some(&k) => self.table.get(letter_index(k), letter_index(letter)) as char,
                    None => letter as char,
                }
            })
            .collect()
    }

    /// Decrypts `ciphertext` by searching the key letter's row for each letter.
    ///
    /// # Errors
    ///
    /// [`CipherError::CorruptTable`] when a row of a custom table does not
    /// contain the ciphertext letter. The standard table never fails.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        debug!(chars = ciphertext.len(), "Vigenère decrypt");
        let mut key_letters = self.key.as_bytes().iter().cycle();
        let mut plaintext = String::with_capacity(ciphertext.len());

        for ch in ciphertext.chars() {
            if !ch.is_ascii_alphabetic() {
                plaintext.push(ch);
                continue;
            }
            let letter = ch.to_ascii_uppercase() as u8;
            let Some(&k) = key_letters.next() else {
                plaintext.push(letter as char);
                continue;
            };
            let col = self
                .table
                .column_of(letter_index(k), letter)
                .ok_or(CipherError::CorruptTable {
                    row: k as char,
                    letter: letter as char,
                })?;
            plaintext.push(letter_at(col) as char);
        }

        Ok(plaintext)
    }
}

fn normalize_key(key: &str) -> std::result::Result<String, ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey);
    }
    key.chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                Ok(ch.to_ascii_uppercase())
            } else {
                Err(ValidationError::InvalidKeyCharacter(ch))
            }
        })
        .collect()
}
