//! # bonk-big-word
//!
//! Engine for a two-team party word-guessing game: one device is passed
//! between teams, each team gets a fixed time window, and teammates guess
//! as many displayed words as they can. A guessed hard word scores 3, a
//! guessed easy clue 1, a fail or skip costs 1.
//!
//! ## Design Principles
//!
//! 1. **Storage Behind a Trait**: Every durable read and write goes through
//!    `KeyValueStore`, so the browser, a file, or an in-memory fake can
//!    back the same game.
//!
//! 2. **Rebuild, Don't Reset**: A finished round is never reset in place.
//!    The next team's round is a freshly constructed `RoundController`.
//!
//! 3. **Externally Driven Time**: The countdown only moves when the host
//!    calls `tick` or `advance`, which keeps rounds deterministic in tests.
//!
//! ## Modules
//!
//! - `core`: Teams, word pairs and word bank, RNG, configuration
//! - `store`: Key-value backends, score store, session store
//! - `round`: Round controller, word selection, countdown, scoring actions
//! - `landing`: Landing screen controller
//! - `web`: Browser bindings (feature `web`)

pub mod core;
pub mod error;
pub mod landing;
pub mod round;
pub mod store;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, Team, TeamScores, WordBank, WordList, WordPair};

pub use crate::error::{GameError, Result, StoreError};

pub use crate::landing::LandingController;

pub use crate::round::{
    Countdown, PlayRoute, RoundController, RoundPhase, RoundState, RoundSummary, ScoreAction,
    ScoreRecord, SeenWords, Selection, TickOutcome, WordSelector,
};

pub use crate::store::{FileStore, KeyValueStore, MemoryStore, ScoreStore, SessionStore};
