//! Browser bindings for the word game.
//!
//! Built with `--features web` for `wasm32-unknown-unknown`. Durable state
//! lives in `window.localStorage`, so scores survive a page reload.
//!
//! # Quick Start
//!
//! ```javascript
//! import init, { WebLanding, WebRound } from "./bonk_big_word.js";
//!
//! await init();
//!
//! // Landing page
//! const landing = new WebLanding();
//! console.log(landing.orangeScore, landing.purpleScore);
//! location.assign(landing.startGame());
//!
//! // Play page
//! let round = new WebRound(location.search);
//! setInterval(() => {
//!   if (round.tick()) showRoundOver(round.score);
//! }, round.tickMs);
//! ```

mod bindings;
mod local_storage;

pub use bindings::{WebLanding, WebRound};
pub use local_storage::LocalStorage;
