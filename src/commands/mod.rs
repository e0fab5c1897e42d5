//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, WordScore, run_benchmark, select_targets};
pub use play::{SessionEnd, run_play};
pub use solve::{SolveResult, solve_word, write_transcript};
