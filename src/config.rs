//! Runtime configuration
//!
//! Built once from the command line; every game, solve and benchmark in a
//! run shares the selector and opener it produces.

use crate::core::{Word, WordError};
use crate::solver::{DEFAULT_OPENER, DEFAULT_THREADS, SelectError, Selector, Solver, StrategyType};
use crate::wordlists::{DEFAULT_GUESSES, DEFAULT_SOLUTIONS, WordList, load_from_file};
use std::io;
use std::path::{Path, PathBuf};

/// How the first guess of every game is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opener {
    Fixed(Word),
    /// Selected once against the full word lists at startup
    Computed,
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub guesses_path: PathBuf,
    pub solutions_path: PathBuf,
    pub strategy: StrategyType,
    /// Selector workers; 0 lets rayon decide
    pub threads: usize,
    pub opener: Opener,
    /// Show a progress bar while guesses are scored
    pub progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            guesses_path: PathBuf::from(DEFAULT_GUESSES),
            solutions_path: PathBuf::from(DEFAULT_SOLUTIONS),
            strategy: StrategyType::default(),
            threads: DEFAULT_THREADS,
            opener: Opener::Fixed(DEFAULT_OPENER),
            progress: true,
        }
    }
}

impl Config {
    /// Replace the opener with a fixed word
    ///
    /// # Errors
    /// Returns `WordError` if `text` is not a valid word.
    pub fn with_opener_word(mut self, text: &str) -> Result<Self, WordError> {
        self.opener = Opener::Fixed(Word::new(text)?);
        Ok(self)
    }

    /// Read the guess list and the solution list
    ///
    /// # Errors
    /// Returns the I/O error of whichever file could not be read, with its
    /// path in the message.
    pub fn load_word_lists(&self) -> io::Result<(WordList, WordList)> {
        let guesses = load_list(&self.guesses_path)?;
        let solutions = load_list(&self.solutions_path)?;
        Ok((guesses, solutions))
    }

    /// Build the selector for this run
    ///
    /// # Errors
    /// Returns `SelectError::ThreadPool` if the worker pool cannot start.
    pub fn selector(&self) -> Result<Selector, SelectError> {
        Ok(Selector::new(self.strategy, self.threads)?.with_progress(self.progress))
    }

    /// Build the solver, computing the opener first if configured to
    ///
    /// # Errors
    /// Returns `SelectError` if the pool cannot start, or if the opener must
    /// be computed and a list is empty.
    pub fn solver<'a>(
        &self,
        guesses: &'a [Word],
        solutions: &'a [Word],
    ) -> Result<Solver<'a>, SelectError> {
        let selector = self.selector()?;
        match self.opener {
            Opener::Fixed(word) => Ok(Solver::new(selector, guesses, solutions, word)),
            Opener::Computed => Solver::with_computed_opener(selector, guesses, solutions),
        }
    }
}

fn load_list(path: &Path) -> io::Result<WordList> {
    load_from_file(path).map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.guesses_path, PathBuf::from("wordlist_guesses.txt"));
        assert_eq!(config.solutions_path, PathBuf::from("wordlist_solutions.txt"));
        assert_eq!(config.strategy, StrategyType::Complex);
        assert_eq!(config.threads, 16);
        assert_eq!(config.opener, Opener::Fixed(Word::new("roate").unwrap()));
        assert!(config.progress);
    }

    #[test]
    fn opener_word_is_validated() {
        let config = Config::default().with_opener_word("crane").unwrap();
        assert_eq!(config.opener, Opener::Fixed(Word::new("CRANE").unwrap()));

        assert_eq!(
            Config::default().with_opener_word("toolong"),
            Err(WordError::InvalidLength(7))
        );
    }

    #[test]
    fn solver_uses_fixed_opener() {
        let list = words(&["shake", "stake", "snake"]);
        let config = Config {
            threads: 2,
            progress: false,
            ..Config::default()
        };
        let solver = config.solver(&list, &list).unwrap();
        assert_eq!(solver.opener(), Word::new("roate").unwrap());
        assert_eq!(solver.selector().strategy(), StrategyType::Complex);
        assert_eq!(solver.selector().workers(), 2);
    }

    #[test]
    fn solver_computes_opener() {
        let guesses = words(&["fuzzy", "snort", "shake"]);
        let solutions = words(&["shake", "stake", "snake", "crate"]);
        let config = Config {
            strategy: StrategyType::MinMax,
            threads: 2,
            opener: Opener::Computed,
            progress: false,
            ..Config::default()
        };
        let solver = config.solver(&guesses, &solutions).unwrap();
        assert_eq!(solver.opener(), Word::new("snort").unwrap());
    }

    #[test]
    fn computed_opener_fails_on_empty_lists() {
        let config = Config {
            opener: Opener::Computed,
            progress: false,
            ..Config::default()
        };
        assert!(config.solver(&[], &[]).is_err());
    }

    #[test]
    fn missing_list_is_an_error() {
        let config = Config {
            guesses_path: PathBuf::from("/nonexistent/wordlebot/guesses.txt"),
            ..Config::default()
        };
        let err = config.load_word_lists().unwrap_err();
        assert!(err.to_string().starts_with("/nonexistent/wordlebot/guesses.txt: "));
    }
}
