//! A single team's timed round.
//!
//! ## Key Types
//!
//! - `RoundController`: the `INITIALIZING -> ACTIVE -> EXPIRED` state machine
//! - `WordSelector`: no-repeat uniform word selection with full-pool fallback
//! - `Countdown`: fixed-step, cancellable round timer
//! - `SeenWords`: persisted set of already-shown seen-keys
//! - `ScoreAction`: the scoring buttons and their point values
//! - `PlayRoute`: the play route and its team flags
//!
//! ## Example
//!
//! ```
//! use bonk_big_word::core::{GameConfig, Team, WordBank};
//! use bonk_big_word::round::{PlayRoute, RoundController, ScoreAction};
//! use bonk_big_word::store::{MemoryStore, ScoreStore};
//!
//! let store = MemoryStore::new();
//! let config = GameConfig::default().with_round_duration_ms(500).with_seed(1);
//! let mut round = RoundController::start(
//!     store.clone(),
//!     WordBank::builtin().unwrap(),
//!     config,
//!     PlayRoute::plain(),
//! );
//!
//! round.press(ScoreAction::Hard);
//! round.press(ScoreAction::Fail);
//!
//! let mut summary = None;
//! while summary.is_none() {
//!     summary = round.tick();
//! }
//!
//! assert_eq!(summary.unwrap().score, 2);
//! assert_eq!(ScoreStore::new(store).read().get(Team::Orange), 2);
//! ```

mod action;
mod controller;
mod countdown;
mod route;
mod seen;
mod selector;

pub use action::ScoreAction;
pub use controller::{RoundController, RoundPhase, RoundState, RoundSummary, ScoreRecord};
pub use countdown::{Countdown, TickOutcome};
pub use route::{PlayRoute, PLAY_PATH};
pub use seen::SeenWords;
pub use selector::{Selection, WordSelector};
