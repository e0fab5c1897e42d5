//! Wordlebot
//!
//! A Wordle assistant that narrows the possible solutions from color-coded
//! feedback and proposes the guess that splits the remaining candidates best.
//!
//! # Quick Start
//!
//! ```rust
//! use wordlebot::core::{Feedback, Word, filter};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("snake").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &answer);
//! assert_eq!(feedback.to_string(), "xxGYG");
//!
//! let candidates = [answer, Word::new("shake").unwrap()];
//! assert_eq!(filter(&feedback, &guess, &candidates), vec![answer]);
//! ```

// Core domain types
pub mod core;

// Guess selection and game driving
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Run settings
pub mod config;
