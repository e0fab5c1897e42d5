//! Parallel guess selection
//!
//! Every call fans the guess list out over a fixed set of workers. Worker `k`
//! scores guesses `k`, `k + n`, `k + 2n`, ... and hands back the best ranking
//! it saw. The per-worker results are then reduced on the calling thread,
//! so nothing is shared between workers except two progress counters.

use super::partition::PartitionSizes;
use super::strategy::{Rank, Strategy, StrategyType};
use super::{ComplexStrategy, MinMaxStrategy, SimpleStrategy};
use crate::core::Word;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// Worker count used when none is configured
pub const DEFAULT_THREADS: usize = 16;

const PROGRESS_INTERVAL: Duration = Duration::from_millis(250);

/// Error type for guess selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// No candidate solutions were supplied
    NoCandidates,
    /// No guesses were supplied
    NoGuesses,
    /// The worker pool could not be started
    ThreadPool(String),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "cannot select a guess without candidates"),
            Self::NoGuesses => write!(f, "cannot select from an empty guess list"),
            Self::ThreadPool(e) => write!(f, "failed to start worker threads: {e}"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Picks the next guess with one strategy for its whole lifetime
pub struct Selector {
    strategy: StrategyType,
    pool: ThreadPool,
    progress: bool,
}

impl Selector {
    /// Create a selector running `threads` workers
    ///
    /// Zero lets rayon pick the worker count.
    ///
    /// # Errors
    /// Returns `SelectError::ThreadPool` if the threads cannot be spawned.
    pub fn new(strategy: StrategyType, threads: usize) -> Result<Self, SelectError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("wordlebot-worker-{i}"))
            .build()
            .map_err(|e| SelectError::ThreadPool(e.to_string()))?;

        Ok(Self {
            strategy,
            pool,
            progress: false,
        })
    }

    /// Show a progress bar on stderr while scoring
    #[must_use]
    pub const fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub const fn strategy(&self) -> StrategyType {
        self.strategy
    }

    /// Number of workers each selection is split across
    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Select the best guess from `guesses` for the remaining `candidates`
    ///
    /// A single remaining candidate is returned as is, without scoring.
    ///
    /// # Errors
    /// Returns `SelectError::NoCandidates` or `SelectError::NoGuesses` when the
    /// respective list is empty.
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::Word;
    /// use wordlebot::solver::{Selector, StrategyType};
    ///
    /// let words: Vec<Word> = ["shake", "stake", "snake", "snort"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let selector = Selector::new(StrategyType::MinMax, 2).unwrap();
    ///
    /// let guess = selector.select_guess(&words, &words[..3]).unwrap();
    /// assert_eq!(guess.to_string(), "SNORT");
    /// ```
    pub fn select_guess(&self, guesses: &[Word], candidates: &[Word]) -> Result<Word, SelectError> {
        match candidates {
            [] => return Err(SelectError::NoCandidates),
            [only] => return Ok(*only),
            _ => {}
        }
        if guesses.is_empty() {
            return Err(SelectError::NoGuesses);
        }

        let best = match self.strategy {
            StrategyType::Simple => self.scan(&SimpleStrategy, guesses, candidates),
            StrategyType::Complex => self.scan(&ComplexStrategy, guesses, candidates),
            StrategyType::MinMax => self.scan(&MinMaxStrategy, guesses, candidates),
        };

        best.map(|index| guesses[index]).ok_or(SelectError::NoGuesses)
    }

    /// Index of the best guess under `strategy`
    fn scan<S: Strategy>(
        &self,
        strategy: &S,
        guesses: &[Word],
        candidates: &[Word],
    ) -> Option<usize> {
        let workers = self.workers();
        let processed = AtomicUsize::new(0);
        let finished = AtomicUsize::new(0);

        let slots: Vec<Option<S::Rank>> = thread::scope(|scope| {
            if self.progress {
                scope.spawn(|| report_progress(guesses.len(), workers, &processed, &finished));
            }

            self.pool.install(|| {
                (0..workers)
                    .into_par_iter()
                    .map(|worker| {
                        let _done = Finished(&finished);
                        best_of_worker(strategy, worker, workers, guesses, candidates, &processed)
                    })
                    .collect()
            })
        });

        slots.into_iter().flatten().min().map(|rank| rank.index())
    }
}

/// Best ranking among the guesses assigned to `worker`
fn best_of_worker<S: Strategy>(
    strategy: &S,
    worker: usize,
    workers: usize,
    guesses: &[Word],
    candidates: &[Word],
    processed: &AtomicUsize,
) -> Option<S::Rank> {
    let mut partitions = PartitionSizes::new(candidates);
    let mut best: Option<S::Rank> = None;

    for index in (worker..guesses.len()).step_by(workers) {
        partitions.reset();
        if let Some(rank) = strategy.rank(index, &guesses[index], &mut partitions, best.as_ref())
            && best.is_none_or(|b| rank < b)
        {
            best = Some(rank);
        }
        processed.fetch_add(1, Ordering::Relaxed);
    }

    best
}

/// Bumps the finished-worker count when a worker exits, even by panic
struct Finished<'a>(&'a AtomicUsize);

impl Drop for Finished<'_> {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

fn report_progress(total: usize, workers: usize, processed: &AtomicUsize, finished: &AtomicUsize) {
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} guesses scored")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }

    while finished.load(Ordering::Relaxed) < workers {
        bar.set_position(processed.load(Ordering::Relaxed) as u64);
        thread::sleep(PROGRESS_INTERVAL);
    }

    bar.finish_and_clear();
}
