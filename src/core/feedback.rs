//! Wordle feedback marks and the evaluator that produces them
//!
//! Each of the five slots carries a mark with an ordinal value:
//! - 0 = Absent (letter not in word, or all copies already accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Mark {
    #[default]
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Mark {
    /// Ordinal value used for scoring
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Parse a hint character; anything unrecognised is `None`
    #[must_use]
    pub const fn from_hint_char(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Self::Absent),
            'y' | 'Y' => Some(Self::Present),
            'g' | 'G' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Character used in the squares transcript
    #[must_use]
    pub const fn square(self) -> char {
        match self {
            Self::Absent => 'x',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }
}

/// Error for a hint string that cannot be turned into feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    InvalidLength(usize),
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "hint must be exactly {WORD_LENGTH} characters, got {len}")
            }
        }
    }
}

impl std::error::Error for HintError {}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Compute the feedback for `guess` when `solution` is the secret
    ///
    /// Greens are marked first and consume their solution letter. Every other
    /// slot then claims the leftmost unconsumed copy of its letter, if any, so a
    /// repeated guess letter never earns more marks than the solution has copies.
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("snake").unwrap();
    /// assert_eq!(Feedback::evaluate(&guess, &solution).to_string(), "xxGYG");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        let guess = guess.letters();
        let mut remaining = *solution.letters();
        let mut marks = [Mark::Absent; WORD_LENGTH];

        // Index needed to set marks[i] and consume remaining[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == remaining[i] {
                marks[i] = Mark::Correct;
                remaining[i] = 0;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|l| **l == guess[i]) {
                marks[i] = Mark::Present;
                *slot = 0;
            }
        }

        Self(marks)
    }

    /// Parse a hint such as `xYgxx`
    ///
    /// Case-insensitive `x`/`y`/`g`. Any other character leaves its slot
    /// Absent without complaint.
    ///
    /// # Errors
    /// Returns `HintError::InvalidLength` unless the hint has exactly 5 characters.
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::{Feedback, Mark};
    ///
    /// let hint = Feedback::from_hint("gY?xx").unwrap();
    /// assert_eq!(hint.marks()[0], Mark::Correct);
    /// assert_eq!(hint.marks()[2], Mark::Absent);
    /// assert!(Feedback::from_hint("gyx").is_err());
    /// ```
    pub fn from_hint(hint: &str) -> Result<Self, HintError> {
        let len = hint.chars().count();
        if len != WORD_LENGTH {
            return Err(HintError::InvalidLength(len));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, c) in marks.iter_mut().zip(hint.chars()) {
            if let Some(parsed) = Mark::from_hint_char(c) {
                *mark = parsed;
            }
        }
        Ok(Self(marks))
    }

    /// True when every slot is Correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Sum of the mark ordinals (0-10)
    #[must_use]
    pub fn score(&self) -> u32 {
        self.0.iter().map(|m| u32::from(m.value())).sum()
    }

    /// Number of slots carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }
}

impl FromStr for Feedback {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hint(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.square())?;
        }
        Ok(())
    }
}
