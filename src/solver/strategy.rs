//! Guess scoring strategies
//!
//! Defines the Strategy trait the selector drives, and the enum that picks one
//! of the concrete strategies at startup.

use super::partition::PartitionSizes;
use crate::core::Word;
use std::fmt;

/// Ranking of one guess; smaller is better
///
/// Every ranking ends with the guess index, so two different guesses never
/// compare equal and the earliest listed guess wins a tie.
pub trait Rank: Copy + Ord + Send {
    /// Position of the ranked guess in the guess list
    fn index(&self) -> usize;
}

/// Scores a single guess against the current candidates
pub trait Strategy: Sync {
    type Rank: Rank;

    /// Rank `guess`, found at `index` in the guess list
    ///
    /// `best` is the best ranking the calling worker has produced so far. A
    /// strategy may return `None` once it knows `guess` cannot beat it.
    fn rank(
        &self,
        index: usize,
        guess: &Word,
        partitions: &mut PartitionSizes<'_>,
        best: Option<&Self::Rank>,
    ) -> Option<Self::Rank>;
}

/// Strategy chosen for the whole process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StrategyType {
    /// Maximize total feedback score over the candidates
    Simple,
    /// Minimize the summed partition size
    #[default]
    Complex,
    /// Minimize the worst-case partition, then the average, then the best case
    #[value(name = "minmax", alias = "minimax")]
    MinMax,
}

impl StrategyType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Complex => "complex",
            Self::MinMax => "minmax",
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::ValueEnum;

    #[test]
    fn names_parse_back() {
        for strategy in StrategyType::value_variants() {
            assert_eq!(StrategyType::from_str(strategy.name(), false), Ok(*strategy));
        }
        assert_eq!(StrategyType::from_str("MINIMAX", true), Ok(StrategyType::MinMax));
        assert!(StrategyType::from_str("entropy", true).is_err());
    }

    #[test]
    fn default_is_complex() {
        assert_eq!(StrategyType::default(), StrategyType::Complex);
        assert_eq!(StrategyType::default().to_string(), "complex");
    }
}
