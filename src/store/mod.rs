//! Persisted key-value storage.
//!
//! All durable state goes through a [`KeyValueStore`]: a string-keyed,
//! string-valued map, the shape of a browser's `localStorage`. Typed access
//! sits on top:
//!
//! - [`ScoreStore`]: team totals under `teamScores`
//! - [`SessionStore`]: the active-team marker under `currentTeam` and the
//!   seen-word set under `seenWords`
//!
//! ## Backends
//!
//! - [`MemoryStore`]: shared in-memory map, the test fake
//! - [`FileStore`]: one JSON object file on disk
//! - `LocalStorage`: the browser's storage (feature `web`)
//!
//! Backends are cheap handles: cloning one yields another view of the same
//! underlying storage, so the landing and round controllers can each own a
//! handle the way two pages of a site share `localStorage`.

mod file;
mod memory;
mod scores;
mod session;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use scores::ScoreStore;
pub use session::SessionStore;

use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Key holding `{"orange": int, "purple": int}`.
pub const TEAM_SCORES_KEY: &str = "teamScores";

/// Key holding the team about to play.
pub const CURRENT_TEAM_KEY: &str = "currentTeam";

/// Key holding the JSON array of seen-keys.
pub const SEEN_WORDS_KEY: &str = "seenWords";

/// String-keyed, string-valued durable storage.
///
/// Operations are synchronous. Implementations need no locking: a single
/// game session is the only writer.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value. Deleting an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Outcome of reading a JSON payload.
#[derive(Debug)]
pub(crate) enum Loaded<T> {
    Present(T),
    Absent,
    /// Present but unreadable; treated like `Absent` by callers.
    Malformed,
}

impl<T> Loaded<T> {
    pub(crate) fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Loaded::Present(value) => value,
            Loaded::Absent | Loaded::Malformed => default(),
        }
    }
}

/// Read and decode a JSON payload, logging instead of failing.
pub(crate) fn load_json<S, T>(store: &S, key: &str) -> Loaded<T>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Loaded::Absent,
        Err(e) => {
            log::warn!("could not read `{key}` from storage: {e}");
            return Loaded::Malformed;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Loaded::Present(value),
        Err(e) => {
            log::warn!("ignoring malformed `{key}` payload: {e}");
            Loaded::Malformed
        }
    }
}
