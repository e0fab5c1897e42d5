//! Main Wordle solver interface

use super::game::{Game, GameError, Round, Turn};
use super::selector::{SelectError, Selector};
use crate::core::{Feedback, Word};

/// Opening guess used unless another is configured or computed
pub const DEFAULT_OPENER: Word = Word::from_upper(*b"ROATE");

/// Guess count charged to a simulated game that did not reach the solution
pub const STALLED_SCORE: usize = 9999;

/// Main Wordle solver
///
/// Owns the selector and borrows the two word lists, so every game it starts
/// shares the same strategy, thread pool and opening guess.
pub struct Solver<'a> {
    selector: Selector,
    guesses: &'a [Word],
    solutions: &'a [Word],
    opener: Word,
}

/// How a simulated game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Failed(GameError),
}

/// Full account of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub solution: Word,
    pub rounds: Vec<Round>,
    pub outcome: Outcome,
}

impl GameRecord {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved)
    }

    /// Guesses needed to solve, or [`STALLED_SCORE`] for a failed game
    #[must_use]
    pub fn guess_count(&self) -> usize {
        if self.is_solved() {
            self.rounds.len()
        } else {
            STALLED_SCORE
        }
    }
}

impl<'a> Solver<'a> {
    /// Create a solver with a fixed opening guess
    ///
    /// # Parameters
    /// - `selector`: Picks every guess after the opener
    /// - `guesses`: All words allowed as guesses
    /// - `solutions`: Words that can be the hidden answer
    /// - `opener`: First guess of every game
    #[must_use]
    pub const fn new(
        selector: Selector,
        guesses: &'a [Word],
        solutions: &'a [Word],
        opener: Word,
    ) -> Self {
        Self {
            selector,
            guesses,
            solutions,
            opener,
        }
    }

    /// Create a solver whose opener is the selector's pick over the full lists
    ///
    /// This scores every guess against every solution once, so it is the
    /// slowest selection the solver ever makes.
    ///
    /// # Errors
    /// Returns `SelectError` when either list is empty.
    pub fn with_computed_opener(
        selector: Selector,
        guesses: &'a [Word],
        solutions: &'a [Word],
    ) -> Result<Self, SelectError> {
        let opener = selector.select_guess(guesses, solutions)?;
        Ok(Self::new(selector, guesses, solutions, opener))
    }

    #[must_use]
    pub const fn opener(&self) -> Word {
        self.opener
    }

    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    #[must_use]
    pub const fn guesses(&self) -> &'a [Word] {
        self.guesses
    }

    #[must_use]
    pub const fn solutions(&self) -> &'a [Word] {
        self.solutions
    }

    /// Start a game driven by outside feedback
    #[must_use]
    pub fn new_game(&self) -> Game<'_> {
        Game::new(&self.selector, self.guesses, self.solutions, self.opener)
    }

    /// Play a whole game against a known solution
    ///
    /// Feedback comes from the evaluator. A repeated guess ends the game as
    /// stalled instead of looping.
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::Word;
    /// use wordlebot::solver::{Selector, Solver, StrategyType};
    ///
    /// let words: Vec<Word> = ["shake", "stake", "snake", "crate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let selector = Selector::new(StrategyType::MinMax, 2).unwrap();
    /// let solver = Solver::new(selector, &words, &words, Word::new("crate").unwrap());
    ///
    /// let record = solver.simulate(Word::new("crate").unwrap());
    /// assert!(record.is_solved());
    /// assert_eq!(record.guess_count(), 1);
    /// ```
    #[must_use]
    pub fn simulate(&self, solution: Word) -> GameRecord {
        self.simulate_with(solution, |_, _| {})
    }

    /// Like [`Solver::simulate`], calling `on_round` after every round with
    /// the candidates that round left
    pub fn simulate_with<F>(&self, solution: Word, mut on_round: F) -> GameRecord
    where
        F: FnMut(&Round, &[Word]),
    {
        let mut game = self.new_game().with_stall_guard(true);

        let outcome = loop {
            let feedback = Feedback::evaluate(&game.guess(), &solution);
            let turn = game.submit(feedback);
            if let Some(round) = game.rounds().last() {
                on_round(round, game.candidates());
            }
            match turn {
                Ok(Turn::Solved) => break Outcome::Solved,
                Ok(Turn::Continue { .. }) => {}
                Err(e) => break Outcome::Failed(e),
            }
        };

        GameRecord {
            solution,
            rounds: game.rounds().to_vec(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyType;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn setup() -> (Vec<Word>, Vec<Word>) {
        let guesses = words(&[
            "crane", "slate", "irate", "crate", "grate", "snort", "shake", "stake", "snake",
        ]);
        let solutions = words(&["irate", "crate", "grate", "shake", "stake", "snake"]);
        (guesses, solutions)
    }

    #[test]
    fn every_solution_is_reached() {
        let (guesses, solutions) = setup();
        for strategy in [StrategyType::Simple, StrategyType::Complex, StrategyType::MinMax] {
            let selector = Selector::new(strategy, 2).unwrap();
            let solver = Solver::new(selector, &guesses, &solutions, w("crane"));

            for &solution in &solutions {
                let record = solver.simulate(solution);
                assert!(record.is_solved(), "{strategy} failed on {solution}");
                assert_eq!(record.rounds.last().unwrap().guess, solution);
                assert!(record.guess_count() <= solutions.len());
            }
        }
    }

    #[test]
    fn rounds_record_shrinking_candidates() {
        let (guesses, solutions) = setup();
        let selector = Selector::new(StrategyType::MinMax, 4).unwrap();
        let solver = Solver::new(selector, &guesses, &solutions, w("crane"));

        let record = solver.simulate(w("snake"));
        assert_eq!(record.rounds[0].guess, w("crane"));
        assert_eq!(record.rounds[0].feedback.to_string(), "xxGYG");
        for pair in record.rounds.windows(2) {
            assert!(pair[1].remaining < pair[0].remaining || pair[1].feedback.is_solved());
        }
        assert_eq!(record.rounds.last().unwrap().remaining, 0);
    }

    #[test]
    fn simulate_with_reports_each_round() {
        let (guesses, solutions) = setup();
        let selector = Selector::new(StrategyType::MinMax, 2).unwrap();
        let solver = Solver::new(selector, &guesses, &solutions, w("crane"));

        let mut seen = Vec::new();
        let record = solver.simulate_with(w("shake"), |round, left| {
            seen.push((round.guess, left.to_vec()));
        });

        assert_eq!(seen.len(), record.rounds.len());
        assert_eq!(seen[0], (w("crane"), words(&["shake", "stake"])));
        assert_eq!(seen.last().unwrap(), &(w("shake"), words(&["shake"])));
    }

    #[test]
    fn opener_that_is_the_solution_takes_one_guess() {
        let (guesses, solutions) = setup();
        let selector = Selector::new(StrategyType::Complex, 2).unwrap();
        let solver = Solver::new(selector, &guesses, &solutions, w("grate"));
        assert_eq!(solver.simulate(w("grate")).guess_count(), 1);
    }

    #[test]
    fn stalled_game_scores_sentinel() {
        // FUZZY is the only guess and cannot tell SHAKE from STAKE
        let guesses = words(&["fuzzy"]);
        let solutions = words(&["shake", "stake"]);
        let selector = Selector::new(StrategyType::MinMax, 2).unwrap();
        let solver = Solver::new(selector, &guesses, &solutions, w("fuzzy"));

        let record = solver.simulate(w("stake"));
        assert_eq!(
            record.outcome,
            Outcome::Failed(GameError::StalledSelection { guess: w("fuzzy") })
        );
        assert_eq!(record.guess_count(), STALLED_SCORE);
    }

    #[test]
    fn unknown_solution_exhausts_candidates() {
        let (guesses, solutions) = setup();
        let selector = Selector::new(StrategyType::MinMax, 2).unwrap();
        let solver = Solver::new(selector, &guesses, &solutions, w("crane"));

        let record = solver.simulate(w("fuzzy"));
        assert!(matches!(
            record.outcome,
            Outcome::Failed(GameError::NoConsistentCandidates { .. })
        ));
        assert_eq!(record.guess_count(), STALLED_SCORE);
    }

    #[test]
    fn computed_opener_matches_direct_selection() {
        let (guesses, solutions) = setup();
        let expected = Selector::new(StrategyType::MinMax, 1)
            .unwrap()
            .select_guess(&guesses, &solutions)
            .unwrap();

        let selector = Selector::new(StrategyType::MinMax, 3).unwrap();
        let solver = Solver::with_computed_opener(selector, &guesses, &solutions).unwrap();
        assert_eq!(solver.opener(), expected);
        assert_eq!(solver.new_game().guess(), expected);
    }

    #[test]
    fn computed_opener_needs_words() {
        let selector = Selector::new(StrategyType::MinMax, 2).unwrap();
        assert!(matches!(
            Solver::with_computed_opener(selector, &[], &[]),
            Err(SelectError::NoCandidates)
        ));
    }
}
