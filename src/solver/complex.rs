//! Summed partition strategy
//!
//! For every candidate other than the guess itself, hypothesize it as the
//! solution and count how many candidates the resulting feedback would leave.
//! The guess with the smallest total (equivalently, the smallest average
//! remaining set) wins.

use super::partition::PartitionSizes;
use super::strategy::{Rank, Strategy};
use crate::core::{Feedback, Word};

/// Smallest summed partition size wins
pub struct ComplexStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ComplexRank {
    pub total: u64,
    pub index: usize,
}

impl Rank for ComplexRank {
    fn index(&self) -> usize {
        self.index
    }
}

impl Strategy for ComplexStrategy {
    type Rank = ComplexRank;

    fn rank(
        &self,
        index: usize,
        guess: &Word,
        partitions: &mut PartitionSizes<'_>,
        _best: Option<&ComplexRank>,
    ) -> Option<ComplexRank> {
        let candidates = partitions.candidates();
        let full = candidates.len() as u64;

        let mut total = 0;
        for candidate in candidates.iter().filter(|&c| c != guess) {
            let feedback = Feedback::evaluate(guess, candidate);
            // An empty partition is charged as the whole candidate set
            total += match partitions.size(guess, feedback) {
                0 => full,
                size => size as u64,
            };
        }

        Some(ComplexRank { total, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn total(guess: &str, candidates: &[Word]) -> u64 {
        let mut partitions = PartitionSizes::new(candidates);
        ComplexStrategy
            .rank(0, &Word::new(guess).unwrap(), &mut partitions, None)
            .unwrap()
            .total
    }

    #[test]
    fn splitting_guess_scores_lower() {
        let candidates = words(&["shake", "stake", "snake", "crate"]);
        // FUZZY tells nothing: every candidate leaves all 4
        assert_eq!(total("fuzzy", &candidates), 16);
        // SNORT: snake, shake, stake and crate all land in different partitions
        assert_eq!(total("snort", &candidates), 4);
    }

    #[test]
    fn guess_itself_is_skipped() {
        let candidates = words(&["shake", "stake"]);
        // Only STAKE is hypothesized, and it leaves just STAKE
        assert_eq!(total("shake", &candidates), 1);
    }

    #[test]
    fn ties_prefer_earlier_index() {
        let candidates = words(&["shake", "stake"]);
        let mut partitions = PartitionSizes::new(&candidates);
        let guess = Word::new("fuzzy").unwrap();
        let late = ComplexStrategy.rank(7, &guess, &mut partitions, None).unwrap();
        partitions.reset();
        let early = ComplexStrategy.rank(2, &guess, &mut partitions, None).unwrap();
        assert!(early < late);
    }
}
