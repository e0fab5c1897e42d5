//! Wordle word representation
//!
//! A Word is five uppercase ASCII letters stored inline, so it is `Copy` and
//! cheap to compare in the scoring loops.

use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacter(ch) => write!(f, "word contains non-letter {ch:?}"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, upper-casing it
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything but ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacter(ch));
            }
            *slot = ch.to_ascii_uppercase() as u8;
        }

        Ok(Self(letters))
    }

    /// Wrap letters that are already uppercase ASCII
    pub(crate) const fn from_upper(letters: [u8; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Number of times `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.0.iter().filter(|&&l| l == letter).count()
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.letters(), b"CRANE");
        assert_eq!(word.to_string(), "CRANE");
    }

    #[test]
    fn word_creation_uppercases() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CrAnE").unwrap());
        assert_eq!(Word::new("roate").unwrap().letters(), b"ROATE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        assert_eq!(Word::new("caf\u{e9}s"), Err(WordError::InvalidCharacter('\u{e9}')));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacter(' ')));
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_count_of_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b'E'), 2);
        assert_eq!(word.count_of(b'S'), 1);
        assert_eq!(word.count_of(b'Z'), 0);
    }

    #[test]
    fn word_parse() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(word.to_string(), "SLATE");
        assert!("slates".parse::<Word>().is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            WordError::InvalidLength(3).to_string(),
            "word must be exactly 5 letters, got 3"
        );
        assert_eq!(
            WordError::InvalidCharacter('1').to_string(),
            "word contains non-letter '1'"
        );
    }
}
