//! Vigenère keys, encryption and decryption
//!
//! Texts are processed letter by letter with the key advancing on every
//! position. Output is always lowercase.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{self, SIZE};
use crate::error::{AnalysisError, Result};

/// A repeating key, stored as one shift (0-25) per position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    shifts: Vec<u8>,
}

impl Key {
    /// Parses a key word such as `"lemon"`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidArgument`] if the key is empty or
    /// contains anything other than letters.
    pub fn parse(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(AnalysisError::InvalidArgument(
                "key cannot be empty".to_string(),
            ));
        }

        let shifts = key
            .chars()
            .map(|c| {
                alphabet::index_of(c).map(|i| i as u8).ok_or_else(|| {
                    AnalysisError::InvalidArgument(format!(
                        "key contains non-letter character {:?}",
                        c
                    ))
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { shifts })
    }

    /// Builds a key from raw shifts, each reduced mod 26.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidArgument`] if `shifts` is empty.
    pub fn from_shifts(shifts: &[usize]) -> Result<Self> {
        if shifts.is_empty() {
            return Err(AnalysisError::InvalidArgument(
                "key cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            shifts: shifts.iter().map(|&s| (s % SIZE) as u8).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always `false`, a key has at least one position.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Shift applied at text position `position`, cycling through the key.
    pub fn shift_at(&self, position: usize) -> usize {
        self.shifts[position % self.shifts.len()] as usize
    }

    pub fn shifts(&self) -> &[u8] {
        &self.shifts
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &shift in &self.shifts {
            write!(f, "{}", alphabet::letter_at(shift as usize))?;
        }
        Ok(())
    }
}

impl FromStr for Key {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Maps every letter of `text` through `apply(letter, key_shift)`.
fn transform(text: &str, key: &Key, apply: impl Fn(usize, usize) -> usize) -> Result<String> {
    text.chars()
        .enumerate()
        .map(|(position, character)| -> Result<char> {
            let index = alphabet::index_of(character)
                .ok_or(AnalysisError::DomainViolation { character, position })?;
            Ok(alphabet::letter_at(apply(index, key.shift_at(position))))
        })
        .collect()
}

/// Encrypts `plaintext` with `key`: `c = (p + k) mod 26`.
///
/// # Errors
///
/// Returns [`AnalysisError::DomainViolation`] if `plaintext` contains a non-letter.
pub fn encrypt(plaintext: &str, key: &Key) -> Result<String> {
    transform(plaintext, key, |p, k| (p + k) % SIZE)
}

/// Decrypts `ciphertext` with `key`: `p = (c - k) mod 26`, kept in `0..26`.
///
/// # Errors
///
/// Returns [`AnalysisError::DomainViolation`] if `ciphertext` contains a non-letter.
///
/// # Example
///
/// ```rust
/// use vigenere_analysis::{decrypt, Key};
///
/// let key = Key::parse("KEY").unwrap();
/// assert_eq!(decrypt("RIJVS", &key).unwrap(), "hello");
/// ```
pub fn decrypt(ciphertext: &str, key: &Key) -> Result<String> {
    transform(ciphertext, key, |c, k| (c + SIZE - k) % SIZE)
}

/// Splits `text` into blocks of `width` characters separated by spaces, so
/// each block lines up with one pass over the key.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] if `width` is 0.
pub fn group(text: &str, width: usize) -> Result<String> {
    if width == 0 {
        return Err(AnalysisError::InvalidArgument(
            "group width must be > 0".to_string(),
        ));
    }

    let chars: Vec<char> = text.chars().collect();
    let blocks: Vec<String> = chars
        .chunks(width)
        .map(|block| block.iter().collect())
        .collect();

    Ok(blocks.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrypt() {
        let key = Key::parse("KEY").unwrap();
        assert_eq!(decrypt("RIJVS", &key).unwrap(), "hello");
    }

    #[test]
    fn test_decrypt_with_zero_shift_key() {
        let key = Key::parse("AAAAA").unwrap();
        assert_eq!(decrypt("KHOOR", &key).unwrap(), "khoor");
    }

    #[test]
    fn test_decrypt_wraps_negative_difference() {
        // b(1) - c(2) = -1 -> z
        let key = Key::parse("c").unwrap();
        assert_eq!(decrypt("b", &key).unwrap(), "z");

        let key = Key::parse("b").unwrap();
        assert_eq!(decrypt("BMX", &key).unwrap(), "alw");
    }

    #[test]
    fn test_encrypt_known_vector() {
        let key = Key::parse("lemon").unwrap();
        assert_eq!(
            encrypt("attackatdawn", &key).unwrap(),
            "lxfopvefrnhr"
        );
    }

    #[test]
    fn test_round_trip() {
        let plaintext = "theenemyknowsthesystem";
        for word in ["a", "z", "key", "Shannon", "abcdefghijklmnopqrstuvwxyz"] {
            let key = Key::parse(word).unwrap();
            let ciphertext = encrypt(plaintext, &key).unwrap();
            assert_eq!(decrypt(&ciphertext, &key).unwrap(), plaintext, "key {}", word);
        }
    }

    #[test]
    fn test_output_is_lowercase() {
        let key = Key::parse("a").unwrap();
        assert_eq!(decrypt("HeLLo", &key).unwrap(), "hello");
    }

    #[test]
    fn test_empty_text() {
        let key = Key::parse("abc").unwrap();
        assert_eq!(decrypt("", &key).unwrap(), "");
        assert_eq!(encrypt("", &key).unwrap(), "");
    }

    #[test]
    fn test_ciphertext_with_non_letter() {
        let key = Key::parse("abc").unwrap();
        assert_eq!(
            decrypt("ab cd", &key),
            Err(AnalysisError::DomainViolation { character: ' ', position: 2 })
        );
        assert!(encrypt("a1", &key).is_err());
    }

    #[test]
    fn test_key_parse_errors() {
        assert!(matches!(Key::parse(""), Err(AnalysisError::InvalidArgument(_))));
        assert!(matches!(Key::parse("le mon"), Err(AnalysisError::InvalidArgument(_))));
        assert!(matches!("k3y".parse::<Key>(), Err(AnalysisError::InvalidArgument(_))));
    }

    #[test]
    fn test_key_accessors() {
        let key: Key = "Lemon".parse().unwrap();
        assert_eq!(key.len(), 5);
        assert!(!key.is_empty());
        assert_eq!(key.shift_at(0), 11);
        assert_eq!(key.shift_at(6), 4);
        assert_eq!(key.to_string(), "lemon");
    }

    #[test]
    fn test_key_from_shifts() {
        let key = Key::from_shifts(&[2, 8, 15, 7, 4, 17]).unwrap();
        assert_eq!(key.to_string(), "cipher");
        assert_eq!(Key::from_shifts(&[27]).unwrap().to_string(), "b");
        assert!(Key::from_shifts(&[]).is_err());
    }

    #[test]
    fn test_group() {
        assert_eq!(group("attackatdawn", 5).unwrap(), "attac katda wn");
        assert_eq!(group("abc", 3).unwrap(), "abc");
        assert_eq!(group("", 3).unwrap(), "");
        assert!(group("abc", 0).is_err());
    }
}
