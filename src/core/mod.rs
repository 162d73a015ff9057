//! Core game types: teams, words, RNG, configuration.
//!
//! Nothing in here touches storage or time; the round and store modules
//! build on these.

pub mod team;
pub mod word;
pub mod rng;
pub mod config;

pub use team::{Team, TeamScores};
pub use word::{WordBank, WordList, WordPair};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_ROUND_DURATION_MS, DEFAULT_TICK_MS};
