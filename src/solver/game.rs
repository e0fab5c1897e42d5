//! One game of Wordle from the solver's side
//!
//! A game holds the current guess and the candidates still consistent with
//! every feedback seen so far. Each submitted feedback either ends the game
//! or narrows the candidates and picks the next guess.

use super::selector::{SelectError, Selector};
use crate::core::{Feedback, Word, filter};
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// A guess has been proposed and its feedback is pending
    AwaitingFeedback,
    /// The last feedback was all green
    Solved,
    /// No candidate matches the feedback seen so far
    Exhausted,
    /// The selector proposed the guess it had just played
    Stalled,
    /// The next guess could not be selected
    Aborted,
}

/// Result of a feedback that did not end the game in error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Solved,
    Continue { next: Word, remaining: usize },
}

/// One played guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
    /// Candidates left after this feedback (0 once solved)
    pub remaining: usize,
}

/// Errors that end a game early
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Filtering left no candidates; the feedback or the word lists are wrong
    NoConsistentCandidates { guess: Word, feedback: Feedback },
    /// The selector repeated the previous guess, which gains nothing
    StalledSelection { guess: Word },
    /// The selector could not produce a guess
    Selection(SelectError),
    /// Feedback was submitted after the game ended
    Finished(GameState),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConsistentCandidates { guess, feedback } => {
                write!(f, "no candidate is consistent with {guess} scoring {feedback}")
            }
            Self::StalledSelection { guess } => {
                write!(f, "selector repeated {guess} without new information")
            }
            Self::Selection(e) => write!(f, "{e}"),
            Self::Finished(state) => write!(f, "game already over ({state:?})"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<SelectError> for GameError {
    fn from(e: SelectError) -> Self {
        Self::Selection(e)
    }
}

/// A single game in progress
pub struct Game<'a> {
    selector: &'a Selector,
    guesses: &'a [Word],
    candidates: Vec<Word>,
    guess: Word,
    rounds: Vec<Round>,
    state: GameState,
    stall_guard: bool,
}

impl<'a> Game<'a> {
    /// Start a game that opens with `opener`
    #[must_use]
    pub fn new(selector: &'a Selector, guesses: &'a [Word], solutions: &[Word], opener: Word) -> Self {
        Self {
            selector,
            guesses,
            candidates: solutions.to_vec(),
            guess: opener,
            rounds: Vec::new(),
            state: GameState::AwaitingFeedback,
            stall_guard: false,
        }
    }

    /// Stop with `StalledSelection` when the next guess repeats the last one
    #[must_use]
    pub const fn with_stall_guard(mut self, enabled: bool) -> Self {
        self.stall_guard = enabled;
        self
    }

    /// The guess awaiting feedback (or the last one played, once over)
    #[must_use]
    pub const fn guess(&self) -> Word {
        self.guess
    }

    /// Candidates consistent with every feedback so far
    ///
    /// Once solved this is just the last guess.
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Apply the feedback for the current guess
    ///
    /// # Errors
    /// - `NoConsistentCandidates` when filtering empties the candidate set
    /// - `StalledSelection` when the stall guard is on and the selector repeats itself
    /// - `Selection` when no next guess can be selected
    /// - `Finished` when the game is already over
    pub fn submit(&mut self, feedback: Feedback) -> Result<Turn, GameError> {
        if self.state != GameState::AwaitingFeedback {
            return Err(GameError::Finished(self.state));
        }

        if feedback.is_solved() {
            self.candidates = vec![self.guess];
            self.finish_round(feedback, 0, GameState::Solved);
            return Ok(Turn::Solved);
        }

        self.candidates = filter(&feedback, &self.guess, &self.candidates);
        if self.candidates.is_empty() {
            self.finish_round(feedback, 0, GameState::Exhausted);
            return Err(GameError::NoConsistentCandidates {
                guess: self.guess,
                feedback,
            });
        }

        self.rounds.push(Round {
            guess: self.guess,
            feedback,
            remaining: self.candidates.len(),
        });

        let next = match self.selector.select_guess(self.guesses, &self.candidates) {
            Ok(next) => next,
            Err(e) => {
                self.state = GameState::Aborted;
                return Err(e.into());
            }
        };

        if self.stall_guard && next == self.guess {
            self.state = GameState::Stalled;
            return Err(GameError::StalledSelection { guess: next });
        }

        self.guess = next;
        Ok(Turn::Continue {
            next,
            remaining: self.candidates.len(),
        })
    }

    fn finish_round(&mut self, feedback: Feedback, remaining: usize, state: GameState) {
        self.rounds.push(Round {
            guess: self.guess,
            feedback,
            remaining,
        });
        self.state = state;
    }
}
