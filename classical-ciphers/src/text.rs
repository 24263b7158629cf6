//! Letter helpers shared by both engines

use crate::error::ValidationError;

/// Number of letters in the Latin alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Position of an uppercase ASCII letter in the alphabet (`'A'` -> 0).
pub fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

/// Uppercase letter at alphabet position `index`.
pub fn letter_at(index: usize) -> u8 {
    b'A' + (index % ALPHABET_LEN) as u8
}

/// Extracts the ASCII letters of `raw` in reading order, upper-cased.
///
/// Everything else (line breaks, spaces, separators, digits) is dropped and
/// does not count towards the table size.
pub fn table_letters(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
        .collect()
}

/// Parses table text into exactly `expected` letters.
pub fn parse_table(raw: &str, expected: usize) -> Result<Vec<u8>, ValidationError> {
    let letters = table_letters(raw);
    if letters.len() != expected {
        return Err(ValidationError::InvalidTableSize {
            expected,
            actual: letters.len(),
        });
    }
    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_round_trip() {
        assert_eq!(letter_index(b'A'), 0);
        assert_eq!(letter_index(b'Z'), 25);
        assert_eq!(letter_at(7), b'H');
        assert_eq!(letter_at(26 + 2), b'C');
    }

    #[test]
    fn test_table_letters_ignores_formatting() {
        let raw = "a b-c\n1d\te!";
        assert_eq!(table_letters(raw), b"ABCDE".to_vec());
    }

    #[test]
    fn test_parse_table_counts_letters_only() {
        assert!(parse_table("ABC\nDE", 5).is_ok());
        assert_eq!(
            parse_table("ABC 123", 5),
            Err(ValidationError::InvalidTableSize { expected: 5, actual: 3 })
        );
    }
}
