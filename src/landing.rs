//! The landing screen: running totals, reset, and the way into a round.

use crate::core::{Team, TeamScores};
use crate::error::Result;
use crate::round::PlayRoute;
use crate::store::{KeyValueStore, ScoreStore, SessionStore};

/// Landing screen controller.
///
/// Scores are read once when the screen opens and afterwards only change
/// through [`LandingController::reset_scores`].
#[derive(Debug)]
pub struct LandingController<S> {
    scores: ScoreStore<S>,
    session: SessionStore<S>,
    displayed: TeamScores,
}

impl<S: KeyValueStore + Clone> LandingController<S> {
    /// Open the landing screen, reading the persisted totals.
    pub fn open(store: S) -> Self {
        let scores = ScoreStore::new(store.clone());
        let displayed = scores.read();
        log::debug!("landing opened: orange {} / purple {}", displayed.orange, displayed.purple);
        Self {
            scores,
            session: SessionStore::new(store),
            displayed,
        }
    }

    /// Totals as displayed.
    #[must_use]
    pub fn scores(&self) -> TeamScores {
        self.displayed
    }

    /// Zero both totals, in storage and on screen.
    pub fn reset_scores(&mut self) -> Result<()> {
        self.scores.reset()?;
        self.displayed = TeamScores::zero();
        Ok(())
    }

    /// Make orange the team about to play and return where to navigate.
    pub fn start_game(&mut self) -> Result<PlayRoute> {
        self.session.set_active_team(Team::Orange)?;
        Ok(PlayRoute::plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CURRENT_TEAM_KEY, TEAM_SCORES_KEY};
    use crate::store::MemoryStore;

    #[test]
    fn test_open_reads_scores() {
        let store = MemoryStore::with_entries([(TEAM_SCORES_KEY, r#"{"orange": 4, "purple": 6}"#)]);
        let landing = LandingController::open(store);
        assert_eq!(landing.scores(), TeamScores { orange: 4, purple: 6 });
    }

    #[test]
    fn test_scores_are_read_once() {
        let store = MemoryStore::new();
        let landing = LandingController::open(store.clone());

        ScoreStore::new(store).commit(Team::Orange, 5).unwrap();

        assert_eq!(landing.scores(), TeamScores::zero());
    }

    #[test]
    fn test_reset_scores() {
        let store = MemoryStore::with_entries([(TEAM_SCORES_KEY, r#"{"orange": 4, "purple": 6}"#)]);
        let mut landing = LandingController::open(store.clone());

        landing.reset_scores().unwrap();

        assert_eq!(landing.scores(), TeamScores::zero());
        assert_eq!(ScoreStore::new(store).read(), TeamScores::zero());
    }

    #[test]
    fn test_start_game_sets_orange() {
        let store = MemoryStore::with_entries([(CURRENT_TEAM_KEY, "purple")]);
        let mut landing = LandingController::open(store.clone());

        let route = landing.start_game().unwrap();

        assert_eq!(route, PlayRoute::plain());
        assert_eq!(store.get(CURRENT_TEAM_KEY).unwrap().as_deref(), Some("orange"));
    }
}
