//! Benchmark command
//!
//! Plays every target word with the same opener and strategy and summarizes
//! how many guesses each took.

use crate::core::Word;
use crate::solver::{STALLED_SCORE, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Which solutions to play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Play at most this many targets
    pub limit: Option<usize>,
    /// Play a random sample of this size instead of the list in order
    pub sample: Option<usize>,
    /// Seed for the sample shuffle
    pub seed: u64,
}

/// Guesses one target took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordScore {
    pub word: Word,
    /// [`STALLED_SCORE`] when the game failed
    pub guesses: usize,
}

impl WordScore {
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.guesses == STALLED_SCORE
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    /// One entry per target, in play order
    pub scores: Vec<WordScore>,
    /// Mean over all targets, failed games counted at [`STALLED_SCORE`]
    pub average_guesses: f64,
    /// First target with the highest count
    pub worst: Option<WordScore>,
    pub failures: usize,
    /// Guess count to number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.scores.len() - self.failures
    }
}

/// Pick the targets to play from the solution list
///
/// A sample is drawn first, then the limit applies to what remains. The same
/// seed always draws the same sample.
#[must_use]
pub fn select_targets(solutions: &[Word], config: &BenchmarkConfig) -> Vec<Word> {
    let mut targets = solutions.to_vec();

    if let Some(size) = config.sample {
        let mut rng = StdRng::seed_from_u64(config.seed);
        targets.shuffle(&mut rng);
        targets.truncate(size);
    }
    if let Some(limit) = config.limit {
        targets.truncate(limit);
    }

    targets
}

/// Run benchmark on a set of target words
pub fn run_benchmark(solver: &Solver<'_>, targets: &[Word], progress: bool) -> BenchmarkResult {
    let start = Instant::now();
    let bar = progress.then(|| progress_bar(targets.len()));

    let mut scores = Vec::with_capacity(targets.len());
    let mut total_guesses = 0;
    let mut worst: Option<WordScore> = None;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for &word in targets {
        let score = WordScore {
            word,
            guesses: solver.simulate(word).guess_count(),
        };

        total_guesses += score.guesses;
        if worst.is_none_or(|w| score.guesses > w.guesses) {
            worst = Some(score);
        }
        if !score.failed() {
            *distribution.entry(score.guesses).or_insert(0) += 1;
        }
        scores.push(score);

        if let Some(bar) = &bar {
            let avg = total_guesses as f64 / scores.len() as f64;
            bar.set_message(format!("Avg: {avg:.3}"));
            bar.inc(1);
        }
    }

    if let Some(bar) = bar {
        bar.finish_with_message("Complete!");
    }

    let failures = scores.iter().filter(|s| s.failed()).count();
    let average_guesses = if scores.is_empty() {
        0.0
    } else {
        total_guesses as f64 / scores.len() as f64
    };

    BenchmarkResult {
        scores,
        average_guesses,
        worst,
        failures,
        distribution,
        duration: start.elapsed(),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}
