//! Persisted team totals.

use super::{load_json, KeyValueStore, TEAM_SCORES_KEY};
use crate::core::{Team, TeamScores};
use crate::error::{Result, StoreError};

/// Typed access to the `teamScores` entry.
///
/// ## Contract
///
/// - `read` never fails. Absent, unreadable or malformed data reads as
///   zeros (and a missing team inside a valid payload reads as 0).
/// - `reset` writes both zeros immediately.
/// - `commit` is a read-modify-write of the whole mapping. It is not atomic
///   against other writers; the game has only one.
#[derive(Clone, Debug)]
pub struct ScoreStore<S> {
    store: S,
}

impl<S: KeyValueStore> ScoreStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current totals.
    #[must_use]
    pub fn read(&self) -> TeamScores {
        load_json(&self.store, TEAM_SCORES_KEY).unwrap_or_else(TeamScores::zero)
    }

    /// Set both totals to zero.
    pub fn reset(&mut self) -> Result<()> {
        self.write(&TeamScores::zero())?;
        log::info!("team scores reset");
        Ok(())
    }

    /// Add `delta` to `team`'s total and persist. Returns the new totals.
    pub fn commit(&mut self, team: Team, delta: i64) -> Result<TeamScores> {
        let mut scores = self.read();
        scores.add(team, delta);
        self.write(&scores)?;
        log::info!(
            "committed {delta:+} for {team}: orange {} / purple {}",
            scores.orange,
            scores.purple
        );
        Ok(scores)
    }

    fn write(&mut self, scores: &TeamScores) -> Result<()> {
        let payload = serde_json::to_string(scores).map_err(StoreError::from)?;
        self.store.set(TEAM_SCORES_KEY, &payload)?;
        Ok(())
    }
}
