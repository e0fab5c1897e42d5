//! Partition size lookup for one guess at a time
//!
//! For a fixed guess, the number of candidates that survive a piece of
//! feedback depends only on that feedback. Workers keep one of these per
//! thread and reset it before each guess, so a feedback shared by many
//! hypothesized solutions is filtered once.

use crate::core::{Feedback, Word, filtered_len};
use rustc_hash::FxHashMap;

pub struct PartitionSizes<'c> {
    candidates: &'c [Word],
    sizes: FxHashMap<Feedback, usize>,
}

impl<'c> PartitionSizes<'c> {
    #[must_use]
    pub fn new(candidates: &'c [Word]) -> Self {
        Self {
            candidates,
            sizes: FxHashMap::default(),
        }
    }

    /// The candidate set every partition is drawn from
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &'c [Word] {
        self.candidates
    }

    /// Forget sizes cached for the previous guess
    pub fn reset(&mut self) {
        self.sizes.clear();
    }

    /// Number of candidates left if `guess` scored `feedback`
    ///
    /// Only valid for the guess the cache was last reset for.
    pub fn size(&mut self, guess: &Word, feedback: Feedback) -> usize {
        let candidates = self.candidates;
        *self
            .sizes
            .entry(feedback)
            .or_insert_with(|| filtered_len(&feedback, guess, candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn size_matches_filter() {
        let candidates = words(&["shake", "stake", "snake", "crate", "trace"]);
        let guess = Word::new("crane").unwrap();
        let mut partitions = PartitionSizes::new(&candidates);

        for truth in &candidates {
            let feedback = Feedback::evaluate(&guess, truth);
            let expected = filtered_len(&feedback, &guess, &candidates);
            assert_eq!(partitions.size(&guess, feedback), expected);
            // Cached value is identical
            assert_eq!(partitions.size(&guess, feedback), expected);
        }
    }

    #[test]
    fn reset_clears_previous_guess() {
        let candidates = words(&["shake", "stake", "snake"]);
        let mut partitions = PartitionSizes::new(&candidates);
        let feedback = Feedback::from_hint("xxGxG").unwrap();

        let crane = Word::new("crane").unwrap();
        assert_eq!(partitions.size(&crane, feedback), 2);

        partitions.reset();
        let stake = Word::new("stake").unwrap();
        assert_eq!(
            partitions.size(&stake, feedback),
            filtered_len(&feedback, &stake, &candidates)
        );
        assert_eq!(partitions.candidates().len(), 3);
    }
}
