//! Playfair digraph cipher
//!
//! The cipher works on a 5x5 matrix holding the alphabet without `J` (which is
//! merged into `I`). Plaintext is split into digraphs and every digraph is
//! replaced according to where its two letters sit in the matrix:
//!
//! - same row: each letter moves one column to the right (wrapping)
//! - same column: each letter moves one row down (wrapping)
//! - otherwise: the letters swap columns (the "rectangle" rule)
//!
//! Decryption applies the mirrored moves. The rectangle rule is its own inverse.

use std::fmt;

use tracing::debug;

use crate::error::{CipherError, Result, ValidationError};
use crate::text::{self, letter_index, ALPHABET_LEN};

/// Side length of the Playfair matrix.
pub const SIZE: usize = 5;

/// Letter inserted between doubled letters and after an unpaired final letter.
pub const FILLER: u8 = b'X';

/// The 25-letter Playfair alphabet (no `J`).
const ALPHABET: &[u8; SIZE * SIZE] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Upper-cases an ASCII letter and folds `J` into `I`.
fn normalize(letter: u8) -> u8 {
    match letter.to_ascii_uppercase() {
        b'J' => b'I',
        other => other,
    }
}

/// 5x5 Playfair key square
///
/// Holds each letter of A-Z except `J` exactly once, plus a reverse index so
/// that position lookups do not scan the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    cells: [[u8; SIZE]; SIZE],
    positions: [(usize, usize); ALPHABET_LEN],
}

impl Matrix {
    /// Lays 25 distinct normalized letters out row-major.
    fn from_letters(letters: &[u8]) -> Self {
        let mut cells = [[0u8; SIZE]; SIZE];
        let mut positions = [(0, 0); ALPHABET_LEN];

        for (i, &letter) in letters.iter().enumerate() {
            let (row, col) = (i / SIZE, i % SIZE);
            cells[row][col] = letter;
            positions[letter_index(letter)] = (row, col);
        }
        // J never occurs in the grid; it resolves to I's cell.
        positions[letter_index(b'J')] = positions[letter_index(b'I')];

        Self { cells, positions }
    }

    /// Builds the key square for `key`
    ///
    /// Key letters are taken in order of first appearance (non-letters are
    /// skipped, `J` counts as `I`), followed by the rest of the alphabet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use classical_ciphers::playfair::Matrix;
    ///
    /// let matrix = Matrix::from_key("monarchy");
    /// assert_eq!(matrix.row(0), b"MONAR");
    /// assert_eq!(matrix.row(1), b"CHYBD");
    /// ```
    pub fn from_key(key: &str) -> Self {
        let mut seen = [false; ALPHABET_LEN];
        let mut sequence = Vec::with_capacity(SIZE * SIZE);

        let key_letters = key
            .bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(normalize);

        for letter in key_letters.chain(ALPHABET.iter().copied()) {
            let slot = &mut seen[letter_index(letter)];
            if !*slot {
                *slot = true;
                sequence.push(letter);
            }
        }

        Self::from_letters(&sequence)
    }

    /// Parses a matrix from table text
    ///
    /// Only ASCII letters are read; any layout works. The text must hold
    /// exactly 25 letters, with `J` read as `I`, and no letter may repeat.
    pub fn from_table(raw: &str) -> std::result::Result<Self, ValidationError> {
        let letters: Vec<u8> = text::parse_table(raw, SIZE * SIZE)?
            .into_iter()
            .map(normalize)
            .collect();

        let mut seen = [false; ALPHABET_LEN];
        for &letter in &letters {
            let slot = &mut seen[letter_index(letter)];
            if *slot {
                return Err(ValidationError::DuplicateLetter(letter as char));
            }
            *slot = true;
        }

        Ok(Self::from_letters(&letters))
    }

    /// Row and column of `letter`. `J` resolves to the cell of `I`.
    pub fn position(&self, letter: u8) -> (usize, usize) {
        self.positions[letter_index(normalize(letter))]
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row % SIZE][col % SIZE]
    }

    pub fn row(&self, row: usize) -> &[u8; SIZE] {
        &self.cells[row]
    }

    /// Replaces one digraph. `shift` is 1 to encrypt and `SIZE - 1` to decrypt.
    fn substitute(&self, first: u8, second: u8, shift: usize) -> [u8; 2] {
        let (row1, col1) = self.position(first);
        let (row2, col2) = self.position(second);

        if row1 == row2 {
            [self.get(row1, col1 + shift), self.get(row2, col2 + shift)]
        } else if col1 == col2 {
            [self.get(row1 + shift, col1), self.get(row2 + shift, col2)]
        } else {
            [self.get(row1, col2), self.get(row2, col1)]
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|&b| (b as char).to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Normalizes plaintext into Playfair digraphs
///
/// The text is upper-cased, `J` becomes `I` and every non-letter is removed.
/// The letters are then paired left to right: a letter followed by the same
/// letter is paired with the filler `X` and only that one letter is consumed;
/// a trailing unpaired letter is also padded with `X`. The result always has
/// even length.
///
/// ```rust
/// use classical_ciphers::playfair::prepare;
///
/// assert_eq!(prepare("Hello"), "HELXLO");
/// assert_eq!(prepare("balloon"), "BALXLOON");
/// ```
pub fn prepare(text: &str) -> String {
    let letters: Vec<u8> = text
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(normalize)
        .collect();

    let mut prepared = String::with_capacity(letters.len() + letters.len() / 2 + 1);
    let mut i = 0;

    while i < letters.len() {
        let current = letters[i];
        match letters.get(i + 1) {
            Some(&next) if next != current => {
                prepared.push(current as char);
                prepared.push(next as char);
                i += 2;
            }
            _ => {
                prepared.push(current as char);
                prepared.push(FILLER as char);
                i += 1;
            }
        }
    }

    prepared
}

/// Playfair cipher engine
///
/// Built once from a key or a table and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    matrix: Matrix,
}

impl Playfair {
    /// Creates an engine whose matrix is derived from `key`.
    pub fn from_key(key: &str) -> Self {
        let engine = Self::from_matrix(Matrix::from_key(key));
        debug!("built Playfair matrix from key");
        engine
    }

    /// Creates an engine from table text holding the 25 matrix letters.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidTableSize`] if the text does not contain
    /// exactly 25 letters, [`ValidationError::DuplicateLetter`] if a letter
    /// repeats.
    pub fn from_table(raw: &str) -> std::result::Result<Self, ValidationError> {
        let matrix = Matrix::from_table(raw)?;
        debug!("loaded Playfair matrix from table");
        Ok(Self::from_matrix(matrix))
    }

    pub fn from_matrix(matrix: Matrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Encrypts `plaintext`
    ///
    /// The text is run through [`prepare`] first, so spacing, punctuation
    /// and repeated letters are not preserved.
    pub fn encrypt(&self, plaintext: &str) -> String {
        let prepared = prepare(plaintext);
        debug!(letters = prepared.len(), "Playfair encrypt");
        self.apply(prepared.as_bytes(), 1)
    }

    /// Decrypts digraph-aligned `ciphertext`
    ///
    /// Letters are upper-cased and whitespace is skipped; nothing else is
    /// normalized. Filler letters inserted during encryption stay in the
    /// output.
    ///
    /// # Errors
    ///
    /// [`CipherError::InvalidCiphertext`] for a character that is neither a
    /// letter nor whitespace, [`CipherError::OddLength`] if the letters
    /// cannot be split into digraphs.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let mut letters = Vec::with_capacity(ciphertext.len());
        for ch in ciphertext.chars() {
            if ch.is_ascii_alphabetic() {
                letters.push(normalize(ch as u8));
            } else if !ch.is_ascii_whitespace() {
                return Err(CipherError::InvalidCiphertext(ch));
            }
        }

        if letters.len() % 2 != 0 {
            return Err(CipherError::OddLength(letters.len()));
        }

        debug!(letters = letters.len(), "Playfair decrypt");
        Ok(self.apply(&letters, SIZE - 1))
    }

    fn apply(&self, letters: &[u8], shift: usize) -> String {
        letters
            .chunks_exact(2)
            .flat_map(|pair| self.matrix.substitute(pair[0], pair[1], shift))
            .map(char::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Matrix with `H` at (2, 0) and `I` at (2, 4).
    const ROW_TABLE: &str = "ABCDE\nFGKLM\nHNOPI\nQRSTU\nVWXYZ";

    #[test]
    fn test_matrix_from_key_dedups_and_merges_j() {
        let matrix = Matrix::from_key("Jazz jam");
        assert_eq!(matrix.row(0), b"IAZMB");
        assert_eq!(matrix.position(b'J'), matrix.position(b'I'));
    }

    #[test]
    fn test_matrix_from_key_contains_each_letter_once() {
        let matrix = Matrix::from_key("PLAYFAIR EXAMPLE");
        let mut letters: Vec<u8> = (0..SIZE).flat_map(|r| *matrix.row(r)).collect();
        letters.sort_unstable();
        assert_eq!(letters, ALPHABET.to_vec());
    }

    #[test]
    fn test_empty_key_gives_plain_alphabet() {
        let matrix = Matrix::from_key("");
        assert_eq!(matrix.row(0), b"ABCDE");
        assert_eq!(matrix.row(4), b"VWXYZ");
    }

    #[test]
    fn test_matrix_display_reparses() {
        let matrix = Matrix::from_key("keyword");
        let rendered = matrix.to_string();
        assert_eq!(rendered.lines().count(), SIZE);
        assert_eq!(Matrix::from_table(&rendered).unwrap(), matrix);
    }

    #[test]
    fn test_from_table_wrong_size() {
        let result = Playfair::from_table("ABCDEFGHIKLMNOPQRSTUVWXY");
        assert_eq!(
            result,
            Err(ValidationError::InvalidTableSize { expected: 25, actual: 24 })
        );

        let result = Playfair::from_table("ABCDEFGHIKLMNOPQRSTUVWXYZA");
        assert!(matches!(
            result,
            Err(ValidationError::InvalidTableSize { actual: 26, .. })
        ));
    }

    #[test]
    fn test_from_table_ignores_non_letters() {
        let table = "a b c d e | f g h i k\n1 l m n o p 2\nq r s t u; v w x y z";
        let engine = Playfair::from_table(table).unwrap();
        assert_eq!(engine.matrix(), &Matrix::from_key(""));
    }

    // The table path rejects repeated letters instead of trusting the caller.
    #[test]
    fn test_from_table_with_duplicate_letters_is_rejected() {
        let table = "AACDEFGHIKLMNOPQRSTUVWXYZ";
        assert_eq!(
            Playfair::from_table(table),
            Err(ValidationError::DuplicateLetter('A'))
        );
    }

    // J is folded into I on the table path too, so a table listing both repeats I.
    #[test]
    fn test_from_table_j_counts_as_i() {
        let with_j = "ABCDEFGHJKLMNOPQRSTUVWXYZ";
        assert_eq!(
            Playfair::from_table(with_j).unwrap().matrix(),
            &Matrix::from_key("")
        );

        let both = "ABCDEFGHIJLMNOPQRSTUVWXYZ";
        assert_eq!(
            Playfair::from_table(both),
            Err(ValidationError::DuplicateLetter('I'))
        );
    }

    #[test]
    fn test_prepare_filler_rules() {
        assert_eq!(prepare("BALLOON"), "BALXLOON");
        assert_eq!(prepare("hello world"), "HELXLOWORLDX");
        assert_eq!(prepare("Jump!"), "IUMP");
        assert_eq!(prepare("A"), "AX");
        assert_eq!(prepare("LLL"), "LXLXLX");
        assert_eq!(prepare("XX"), "XXXX");
        assert_eq!(prepare("123 ,."), "");
    }

    #[test]
    fn test_same_row_rule() {
        let engine = Playfair::from_table(ROW_TABLE).unwrap();
        assert_eq!(engine.matrix().position(b'H'), (2, 0));
        assert_eq!(engine.matrix().position(b'I'), (2, 4));
        assert_eq!(engine.encrypt("HI"), "NH");
        assert_eq!(engine.decrypt("NH").unwrap(), "HI");
    }

    #[test]
    fn test_same_column_rule() {
        let engine = Playfair::from_key("");
        // A (0,0) and F (1,0) share column 0.
        assert_eq!(engine.encrypt("AF"), "FL");
        // V (4,0) wraps to the top row.
        assert_eq!(engine.encrypt("QV"), "VA");
        assert_eq!(engine.decrypt("VA").unwrap(), "QV");
    }

    #[test]
    fn test_rectangle_rule() {
        let engine = Playfair::from_key("");
        // A (0,0) and G (1,1) swap columns.
        assert_eq!(engine.encrypt("AG"), "BF");
        assert_eq!(engine.decrypt("BF").unwrap(), "AG");
    }

    #[test]
    fn test_known_vector() {
        let engine = Playfair::from_key("playfair example");
        let ciphertext = engine.encrypt("Hide the gold in the tree stump");
        assert_eq!(ciphertext, "BMODZBXDNABEKUDMUIXMMOUVIF");
        assert_eq!(
            engine.decrypt(&ciphertext).unwrap(),
            prepare("Hide the gold in the tree stump")
        );
    }

    #[test]
    fn test_round_trip_against_prepared_form() {
        let engine = Playfair::from_key("monarchy");
        let plaintext = "Meet me at the balloon, at noon!";
        let ciphertext = engine.encrypt(plaintext);
        assert_eq!(ciphertext.len() % 2, 0);
        assert_eq!(engine.decrypt(&ciphertext).unwrap(), prepare(plaintext));
    }

    #[test]
    fn test_empty_input() {
        let engine = Playfair::from_key("monarchy");
        assert_eq!(engine.encrypt(""), "");
        assert_eq!(engine.decrypt("").unwrap(), "");
    }

    #[test]
    fn test_decrypt_skips_whitespace_and_lowercase() {
        let engine = Playfair::from_key("monarchy");
        let ciphertext = engine.encrypt("instruments");
        let spaced: String = ciphertext
            .to_lowercase()
            .chars()
            .flat_map(|c| [c, ' '])
            .chain("\n".chars())
            .collect();
        assert_eq!(engine.decrypt(&spaced).unwrap(), prepare("instruments"));
    }

    #[test]
    fn test_decrypt_rejects_malformed_input() {
        let engine = Playfair::from_key("monarchy");
        assert_eq!(engine.decrypt("ABC"), Err(CipherError::OddLength(3)));
        assert_eq!(
            engine.decrypt("AB,CD"),
            Err(CipherError::InvalidCiphertext(','))
        );
    }
}
