//! Coverage strategy
//!
//! Adds up the raw feedback score (0 per gray, 1 per yellow, 2 per green) a
//! guess earns against every candidate and prefers the highest total. Cheap,
//! but it rewards guesses that look close rather than ones that split the
//! candidates well.

use super::partition::PartitionSizes;
use super::strategy::{Rank, Strategy};
use crate::core::{Feedback, Word};
use std::cmp::Reverse;

/// Highest total feedback score wins
pub struct SimpleStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SimpleRank {
    pub total: Reverse<u64>,
    pub index: usize,
}

impl Rank for SimpleRank {
    fn index(&self) -> usize {
        self.index
    }
}

impl Strategy for SimpleStrategy {
    type Rank = SimpleRank;

    fn rank(
        &self,
        index: usize,
        guess: &Word,
        partitions: &mut PartitionSizes<'_>,
        _best: Option<&SimpleRank>,
    ) -> Option<SimpleRank> {
        let total = partitions
            .candidates()
            .iter()
            .map(|c| u64::from(Feedback::evaluate(guess, c).score()))
            .sum();

        Some(SimpleRank {
            total: Reverse(total),
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn rank(guess: &str, index: usize, candidates: &[Word]) -> SimpleRank {
        let mut partitions = PartitionSizes::new(candidates);
        SimpleStrategy
            .rank(index, &Word::new(guess).unwrap(), &mut partitions, None)
            .unwrap()
    }

    #[test]
    fn total_is_sum_of_feedback_scores() {
        let candidates = words(&["crate", "snake"]);
        // CRANE vs CRATE = GGGxG (8), CRANE vs SNAKE = xxGYG (5)
        assert_eq!(rank("crane", 0, &candidates).total, Reverse(13));
        assert_eq!(rank("fuzzy", 1, &candidates).total, Reverse(0));
    }

    #[test]
    fn higher_total_ranks_first() {
        let candidates = words(&["crate", "snake"]);
        assert!(rank("crane", 5, &candidates) < rank("fuzzy", 0, &candidates));
    }

    #[test]
    fn equal_totals_prefer_earlier_index() {
        let candidates = words(&["crate"]);
        let a = rank("fuzzy", 3, &candidates);
        let b = rank("jumpy", 1, &candidates);
        assert_eq!(a.total, b.total);
        assert!(b < a);
        assert_eq!(b.index(), 1);
    }
}
