//! Word solving command
//!
//! Plays a game against a known target and keeps the candidate list left by
//! every guess.

use crate::core::Word;
use crate::output::formatters::word_row;
use crate::solver::{GameRecord, Solver};
use std::io::{self, Write};

/// Result of solving a word
pub struct SolveResult {
    pub record: GameRecord,
    /// Candidates left after each round, aligned with `record.rounds`
    pub remaining: Vec<Vec<Word>>,
    /// Whether the target is in the solution list at all
    pub known_target: bool,
}

/// Solve `target` with the solver's opener and strategy
#[must_use]
pub fn solve_word(solver: &Solver<'_>, target: Word) -> SolveResult {
    let mut remaining = Vec::new();
    let record = solver.simulate_with(target, |_, left| remaining.push(left.to_vec()));

    SolveResult {
        record,
        remaining,
        known_target: solver.solutions().contains(&target),
    }
}

/// Write the plain transcript: each guess, its squares and the words it left
///
/// # Errors
///
/// Returns an error if writing to `output` fails.
pub fn write_transcript<W: Write>(result: &SolveResult, output: &mut W) -> io::Result<()> {
    for (round, left) in result.record.rounds.iter().zip(&result.remaining) {
        writeln!(output, "Guess: {}", round.guess)?;
        writeln!(output, "Result: {}", round.feedback)?;
        if !round.feedback.is_solved() {
            writeln!(output, "{}", word_row(left))?;
        }
    }
    Ok(())
}
