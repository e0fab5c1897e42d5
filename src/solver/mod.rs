//! Wordle solving algorithms
//!
//! Three interchangeable ranking strategies share one parallel selector,
//! which the game driver and the solver use to pick each guess.

mod complex;
mod engine;
mod game;
mod minmax;
mod partition;
mod selector;
mod simple;
pub mod strategy;

pub use complex::{ComplexRank, ComplexStrategy};
pub use engine::{DEFAULT_OPENER, GameRecord, Outcome, STALLED_SCORE, Solver};
pub use game::{Game, GameError, GameState, Round, Turn};
pub use minmax::{MinMaxRank, MinMaxStrategy};
pub use partition::PartitionSizes;
pub use selector::{DEFAULT_THREADS, SelectError, Selector};
pub use simple::{SimpleRank, SimpleStrategy};
pub use strategy::{Rank, Strategy, StrategyType};
