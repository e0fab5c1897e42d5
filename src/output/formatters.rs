//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};

/// Words separated by single spaces
#[must_use]
pub fn word_row(words: &[Word]) -> String {
    words
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Absent => '⬜',
            Mark::Present => '🟨',
            Mark::Correct => '🟩',
        })
        .collect()
}

/// A guess with each letter colored by its mark
#[must_use]
pub fn colored_guess(guess: &Word, feedback: Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, mark)| {
            let tile = format!(" {} ", char::from(letter)).bold();
            let tile: ColoredString = match mark {
                Mark::Absent => tile.on_bright_black(),
                Mark::Present => tile.black().on_yellow(),
                Mark::Correct => tile.black().on_green(),
            };
            tile.to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
