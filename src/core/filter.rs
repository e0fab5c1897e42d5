//! Candidate pruning
//!
//! Checks a candidate against a (guess, feedback) pair without running the
//! evaluator. The checks work on a copy of the candidate's letters where a
//! consumed letter is zeroed, and they must run in this order: greens, then
//! yellows, then grays. The gray check only sees letters the first two passes
//! left unclaimed.

use super::feedback::{Feedback, Mark};
use super::word::{WORD_LENGTH, Word};

/// Whether `candidate` could be the solution given that `guess` got `feedback`
///
/// For any feedback the evaluator can actually produce this agrees with
/// `Feedback::evaluate(guess, candidate) == *feedback`. Feedback no solution
/// could produce (a duplicate letter marked gray before being marked yellow)
/// may still be accepted.
///
/// # Examples
/// ```
/// use wordlebot::core::{Feedback, Word, is_consistent};
///
/// let guess = Word::new("crane").unwrap();
/// let feedback = Feedback::from_hint("xxGYG").unwrap();
/// assert!(is_consistent(&feedback, &guess, &Word::new("snake").unwrap()));
/// assert!(!is_consistent(&feedback, &guess, &Word::new("crate").unwrap()));
/// ```
#[must_use]
pub fn is_consistent(feedback: &Feedback, guess: &Word, candidate: &Word) -> bool {
    let marks = feedback.marks();
    let guess = guess.letters();
    let mut working = *candidate.letters();

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if marks[i] == Mark::Correct {
            if guess[i] != working[i] {
                return false;
            }
            working[i] = 0;
        } else if guess[i] == working[i] {
            // Same letter in the same slot would have been green
            return false;
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if marks[i] == Mark::Present {
            match working.iter_mut().find(|l| **l == guess[i]) {
                Some(slot) => *slot = 0,
                None => return false,
            }
        }
    }

    (0..WORD_LENGTH)
        .filter(|&i| marks[i] == Mark::Absent)
        .all(|i| !working.contains(&guess[i]))
}

/// Keep the candidates consistent with `guess` scoring `feedback`, in order
#[must_use]
pub fn filter(feedback: &Feedback, guess: &Word, candidates: &[Word]) -> Vec<Word> {
    candidates
        .iter()
        .filter(|c| is_consistent(feedback, guess, c))
        .copied()
        .collect()
}

/// Size of `filter(feedback, guess, candidates)` without building it
#[must_use]
pub fn filtered_len(feedback: &Feedback, guess: &Word, candidates: &[Word]) -> usize {
    candidates
        .iter()
        .filter(|c| is_consistent(feedback, guess, c))
        .count()
}
