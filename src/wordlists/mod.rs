//! Word lists for Wordle solving
//!
//! Guess and solution lists are plain text files read once at startup.

pub mod loader;

pub use loader::{Rejected, WordList, load_from_file, parse_words};

/// Default path of the list of allowed guesses
pub const DEFAULT_GUESSES: &str = "wordlist_guesses.txt";

/// Default path of the list of possible solutions
pub const DEFAULT_SOLUTIONS: &str = "wordlist_solutions.txt";
