//! Interactive solving session
//!
//! The solver proposes a guess, the player types the hint the game showed
//! (`x` gray, `y` yellow, `g` green) and the solver narrows the candidates
//! until the hint is all green.

use crate::core::{Feedback, HintError};
use crate::output::formatters::word_row;
use crate::solver::{GameError, Solver, Turn};
use std::io::{self, BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Solved { guesses: usize },
    /// The hints contradict every solution
    Exhausted,
    /// A hint was not five characters long
    BadHint(HintError),
    /// The next guess could not be picked
    Aborted(GameError),
    /// Input ran out before the game finished
    Quit,
}

/// Run one interactive game over `input` and `output`
///
/// Blank lines are ignored. Characters other than `x`, `y` and `g` in a hint
/// count as gray.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
///
/// # Examples
/// ```
/// use wordlebot::commands::{SessionEnd, run_play};
/// use wordlebot::core::Word;
/// use wordlebot::solver::{Selector, Solver, StrategyType};
///
/// let words = vec![Word::new("crane").unwrap()];
/// let selector = Selector::new(StrategyType::Complex, 1).unwrap();
/// let solver = Solver::new(selector, &words, &words, words[0]);
///
/// let mut transcript = Vec::new();
/// let end = run_play(&solver, "ggggg\n".as_bytes(), &mut transcript).unwrap();
/// assert_eq!(end, SessionEnd::Solved { guesses: 1 });
/// ```
pub fn run_play<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    input: R,
    output: &mut W,
) -> io::Result<SessionEnd> {
    let mut game = solver.new_game();
    let mut lines = input.lines();

    loop {
        writeln!(output, "Guess: {}", game.guess())?;

        let hint = loop {
            write!(output, "Enter Result: ")?;
            output.flush()?;
            match lines.next() {
                None => {
                    writeln!(output)?;
                    return Ok(SessionEnd::Quit);
                }
                Some(line) => {
                    let line = line?;
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        break trimmed.to_owned();
                    }
                }
            }
        };

        let feedback = match Feedback::from_hint(&hint) {
            Ok(feedback) => feedback,
            Err(e) => {
                writeln!(output, "error in hint, aborting")?;
                return Ok(SessionEnd::BadHint(e));
            }
        };

        match game.submit(feedback) {
            Ok(Turn::Solved) => {
                writeln!(output, "You did it!")?;
                return Ok(SessionEnd::Solved {
                    guesses: game.rounds().len(),
                });
            }
            Ok(Turn::Continue { .. }) => {
                writeln!(output, "Possible Words: {}", word_row(game.candidates()))?;
            }
            Err(GameError::NoConsistentCandidates { .. }) => {
                writeln!(output, "impossible, no words left to guess")?;
                return Ok(SessionEnd::Exhausted);
            }
            Err(e) => return Ok(SessionEnd::Aborted(e)),
        }
    }
}
