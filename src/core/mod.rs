//! Core domain types for Wordle
//!
//! Words, feedback and the candidate filter. Everything here is pure and
//! has no dependencies outside the standard library.

mod feedback;
mod filter;
mod word;

pub use feedback::{Feedback, HintError, Mark};
pub use filter::{filter, filtered_len, is_consistent};
pub use word::{WORD_LENGTH, Word, WordError};
