//! Worst-case partition strategy
//!
//! Ranks a guess by the largest candidate set it could leave, then by the
//! average, then by the smallest, then by list position. Hypothesizing the
//! guess itself as the solution counts as an empty partition (an immediate
//! win) and costs no feedback computation.

use super::partition::PartitionSizes;
use super::strategy::{Rank, Strategy};
use crate::core::{Feedback, Word};

/// Smallest worst case wins
pub struct MinMaxStrategy;

/// Ranking record for one guess
///
/// Fields compare in declaration order. `total` stands in for the average,
/// since every guess is scored against the same number of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinMaxRank {
    pub worst: usize,
    pub total: usize,
    pub best: usize,
    pub index: usize,
}

impl MinMaxRank {
    /// Average partition size over `candidates` hypothesized solutions
    #[must_use]
    pub fn average(&self, candidates: usize) -> f64 {
        self.total as f64 / candidates as f64
    }
}

impl Rank for MinMaxRank {
    fn index(&self) -> usize {
        self.index
    }
}

impl Strategy for MinMaxStrategy {
    type Rank = MinMaxRank;

    fn rank(
        &self,
        index: usize,
        guess: &Word,
        partitions: &mut PartitionSizes<'_>,
        best: Option<&MinMaxRank>,
    ) -> Option<MinMaxRank> {
        let mut rank = MinMaxRank {
            worst: 0,
            total: 0,
            best: usize::MAX,
            index,
        };

        for candidate in partitions.candidates() {
            let size = if candidate == guess {
                0
            } else {
                partitions.size(guess, Feedback::evaluate(guess, candidate))
            };

            rank.worst = rank.worst.max(size);
            rank.total += size;
            rank.best = rank.best.min(size);

            if let Some(best) = best
                && rank.worst > best.worst
            {
                return None;
            }
        }

        Some(rank)
    }
}
