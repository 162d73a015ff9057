//! Persisted session state: who plays next, and which words were shown.

use super::{load_json, KeyValueStore, CURRENT_TEAM_KEY, SEEN_WORDS_KEY};
use crate::core::Team;
use crate::error::{Result, StoreError};
use crate::round::SeenWords;

/// Typed access to the `currentTeam` and `seenWords` entries.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted active-team marker.
    ///
    /// `None` when absent, unreadable, or not a team name. Both the bare
    /// name and a JSON string are accepted.
    #[must_use]
    pub fn active_team(&self) -> Option<Team> {
        let raw = match self.store.get(CURRENT_TEAM_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("could not read `{CURRENT_TEAM_KEY}`: {e}");
                return None;
            }
        };

        match raw.parse() {
            Ok(team) => Some(team),
            Err(e) => {
                log::warn!("ignoring stored team marker: {e}");
                None
            }
        }
    }

    /// Persist the team about to play, as its bare name.
    pub fn set_active_team(&mut self, team: Team) -> Result<()> {
        self.store.set(CURRENT_TEAM_KEY, team.as_str())?;
        log::debug!("active team marker set to {team}");
        Ok(())
    }

    /// The persisted seen set. Absent or malformed data reads as empty.
    #[must_use]
    pub fn seen_words(&self) -> SeenWords {
        load_json(&self.store, SEEN_WORDS_KEY).unwrap_or_else(SeenWords::new)
    }

    pub fn save_seen_words(&mut self, seen: &SeenWords) -> Result<()> {
        let payload = serde_json::to_string(seen).map_err(StoreError::from)?;
        self.store.set(SEEN_WORDS_KEY, &payload)?;
        Ok(())
    }
}
