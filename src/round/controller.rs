//! The round controller: one team's timed turn.
//!
//! ## Lifecycle
//!
//! ```text
//! INITIALIZING --(start)--> ACTIVE --(countdown hits 0)--> EXPIRED
//! ```
//!
//! `EXPIRED` is terminal. The next team's round is a brand-new controller
//! built by [`RoundController::handoff`]; nothing is reset in place.
//!
//! ## Initialization
//!
//! 1. Resolve the team: route flag, else persisted marker, else orange.
//!    The resolved team is written back as the marker.
//! 2. Load the seen-word set.
//! 3. Select the first word.
//! 4. Start the countdown.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::{GameConfig, GameRng, Team, TeamScores, WordBank, WordPair};
use crate::error::{GameError, Result};
use crate::store::{KeyValueStore, ScoreStore, SessionStore};

use super::action::ScoreAction;
use super::countdown::{Countdown, TickOutcome};
use super::route::PlayRoute;
use super::seen::SeenWords;
use super::selector::{Selection, WordSelector};

/// Round lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    Initializing,
    Active,
    Expired,
}

/// Snapshot of the transient round state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub team: Team,
    pub current_word: Option<WordPair>,
    pub score: i64,
    pub time_remaining_ms: u64,
    pub phase: RoundPhase,
}

impl RoundState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }
}

/// One scoring action as it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// `None` for a raw [`RoundController::update`] with custom points.
    pub action: Option<ScoreAction>,
    pub points: i64,
    pub word: WordPair,
    pub score_after: i64,
    pub time_remaining_ms: u64,
}

/// What the round-end screen shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub team: Team,
    pub score: i64,
    pub words_played: usize,
    pub easy: usize,
    pub hard: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Totals after committing, `None` if the commit could not be written.
    pub totals: Option<TeamScores>,
}

impl RoundSummary {
    #[must_use]
    pub fn committed(&self) -> bool {
        self.totals.is_some()
    }
}

/// State machine for a single team's round.
///
/// The controller owns its round state exclusively. The storage handle is
/// the only thing shared with the rest of the game.
#[derive(Debug)]
pub struct RoundController<S> {
    config: GameConfig,
    bank: WordBank,
    store: S,
    scores: ScoreStore<S>,
    session: SessionStore<S>,
    rng: GameRng,
    seen: SeenWords,
    team: Team,
    phase: RoundPhase,
    current_word: Option<WordPair>,
    score: i64,
    countdown: Countdown,
    history: Vector<ScoreRecord>,
    summary: Option<RoundSummary>,
    pool_exhausted: bool,
}

impl<S: KeyValueStore + Clone> RoundController<S> {
    /// Initialize a round and start its countdown.
    pub fn start(store: S, bank: WordBank, config: GameConfig, route: PlayRoute) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(store, bank, config, route, rng)
    }

    fn with_rng(store: S, bank: WordBank, config: GameConfig, route: PlayRoute, rng: GameRng) -> Self {
        let countdown = Countdown::new(config.round_duration_ms, config.tick_ms);
        let mut controller = Self {
            scores: ScoreStore::new(store.clone()),
            session: SessionStore::new(store.clone()),
            store,
            bank,
            config,
            rng,
            seen: SeenWords::new(),
            team: Team::default(),
            phase: RoundPhase::Initializing,
            current_word: None,
            score: 0,
            countdown,
            history: Vector::new(),
            summary: None,
            pool_exhausted: false,
        };

        controller.team = controller.resolve_team(route);
        controller.seen = controller.session.seen_words();
        controller.current_word = controller.select_next();
        controller.countdown.start();
        controller.phase = RoundPhase::Active;

        let pool = controller.bank.pool(controller.team);
        let already_seen = pool
            .iter()
            .filter(|pair| controller.seen.has_seen(controller.team, pair))
            .count();
        log::info!(
            "{} round started: {} ms as {} ticks of {} ms, {already_seen} of {} words already seen, seed {}",
            controller.team,
            controller.countdown.duration_ms(),
            controller.config.ticks_per_round(),
            controller.countdown.tick_ms(),
            pool.len(),
            controller.rng.seed()
        );
        if controller.seen.covers(controller.team, pool) {
            log::debug!("{}: whole pool seen before the round began", controller.team);
        }
        controller
    }

    fn resolve_team(&mut self, route: PlayRoute) -> Team {
        let team = route
            .team_override
            .or_else(|| self.session.active_team())
            .unwrap_or_default();

        if let Err(e) = self.session.set_active_team(team) {
            log::warn!("could not persist active team {team}: {e}");
        }
        team
    }

    fn select_next(&mut self) -> Option<WordPair> {
        let mut selection = WordSelector::select(self.team, &self.bank, &self.seen, &mut self.rng)?;

        if selection.from_fallback {
            if self.config.recycle_exhausted_pool {
                let dropped = self.seen.forget_team(self.team);
                log::info!("{}: word pool exhausted, recycling {dropped} seen words", self.team);
                selection = self.redraw_after_recycle()?;
                self.persist_seen();
            } else if !self.pool_exhausted {
                log::warn!("{}: every word has been seen, repeating from the full pool", self.team);
            }
            self.pool_exhausted = true;
        }

        Some(selection.pair)
    }

    /// Draw from a freshly recycled pool without repeating the pair just
    /// played. The last pair stays marked until the next recycle.
    fn redraw_after_recycle(&mut self) -> Option<Selection> {
        let last = self.history.last().map(|record| record.word.clone());
        if let Some(last) = last.filter(|_| self.bank.len(self.team) > 1) {
            self.seen.mark(self.team, &last);
        }
        WordSelector::select(self.team, &self.bank, &self.seen, &mut self.rng)
    }

    fn persist_seen(&mut self) {
        if let Err(e) = self.session.save_seen_words(&self.seen) {
            log::warn!("could not persist seen words: {e}");
        }
    }

    /// The team playing this round.
    #[must_use]
    pub fn team(&self) -> Team {
        self.team
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    /// The pair on screen.
    #[must_use]
    pub fn current_word(&self) -> Option<&WordPair> {
        self.current_word.as_ref()
    }

    /// Running score for this round.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn time_remaining_ms(&self) -> u64 {
        self.countdown.remaining_ms()
    }

    /// Share of the round left, 1.0 at start and 0.0 at expiry.
    #[must_use]
    pub fn time_fraction(&self) -> f64 {
        self.countdown.fraction_remaining()
    }

    /// Is the countdown still being driven?
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Scoring actions so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ScoreRecord> {
        &self.history
    }

    /// The seen set as this controller knows it.
    #[must_use]
    pub fn seen(&self) -> &SeenWords {
        &self.seen
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Set once the round has expired.
    #[must_use]
    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    /// Snapshot of the round state.
    #[must_use]
    pub fn state(&self) -> RoundState {
        RoundState {
            team: self.team,
            current_word: self.current_word.clone(),
            score: self.score,
            time_remaining_ms: self.time_remaining_ms(),
            phase: self.phase,
        }
    }

    /// Apply a scoring button.
    ///
    /// Returns `false` (and changes nothing) unless the round is active.
    pub fn press(&mut self, action: ScoreAction) -> bool {
        self.apply(action.points(), Some(action))
    }

    /// Add `points` to the round score and move to the next word.
    ///
    /// Points may be negative; the score has no floor. Returns `false` (and
    /// changes nothing) unless the round is active with a word on screen.
    pub fn update(&mut self, points: i64) -> bool {
        self.apply(points, None)
    }

    fn apply(&mut self, points: i64, action: Option<ScoreAction>) -> bool {
        if self.phase != RoundPhase::Active {
            return false;
        }
        let Some(word) = self.current_word.take() else {
            return false;
        };

        self.score = self.score.saturating_add(points);
        if self.seen.mark(self.team, &word) {
            self.persist_seen();
        }

        self.history.push_back(ScoreRecord {
            action,
            points,
            word,
            score_after: self.score,
            time_remaining_ms: self.time_remaining_ms(),
        });
        self.current_word = self.select_next();
        true
    }

    /// One countdown tick.
    ///
    /// Returns the summary exactly once, on the tick that expires the round.
    pub fn tick(&mut self) -> Option<RoundSummary> {
        let outcome = self.countdown.tick();
        self.on_time(outcome)
    }

    /// Feed measured wall-clock time into the countdown.
    pub fn advance(&mut self, elapsed: Duration) -> Option<RoundSummary> {
        let outcome = self.countdown.advance(elapsed);
        self.on_time(outcome)
    }

    fn on_time(&mut self, outcome: TickOutcome) -> Option<RoundSummary> {
        match outcome {
            TickOutcome::Expired if self.phase == RoundPhase::Active => Some(self.expire()),
            _ => None,
        }
    }

    fn expire(&mut self) -> RoundSummary {
        self.phase = RoundPhase::Expired;
        self.countdown.cancel();

        let totals = match self.scores.commit(self.team, self.score) {
            Ok(totals) => Some(totals),
            Err(e) => {
                log::error!("could not commit {} points for {}: {e}", self.score, self.team);
                None
            }
        };

        let count = |wanted: ScoreAction| {
            self.history
                .iter()
                .filter(|record| record.action == Some(wanted))
                .count()
        };
        let summary = RoundSummary {
            team: self.team,
            score: self.score,
            words_played: self.history.len(),
            easy: count(ScoreAction::Easy),
            hard: count(ScoreAction::Hard),
            failed: count(ScoreAction::Fail),
            skipped: count(ScoreAction::Skip),
            totals,
        };

        log::info!(
            "{} round over: {} points from {} words",
            summary.team,
            summary.score,
            summary.words_played
        );
        self.summary = Some(summary.clone());
        summary
    }

    /// Hand the device to the other team.
    ///
    /// Only valid once expired. Persists the other team as the marker and
    /// builds a fresh controller for it; drop `self` afterwards.
    pub fn handoff(&self) -> Result<Self> {
        if self.phase != RoundPhase::Expired {
            return Err(GameError::RoundNotExpired);
        }

        let next = self.team.other();
        SessionStore::new(self.store.clone()).set_active_team(next)?;
        log::info!("handing off from {} to {next}", self.team);

        let rng = match self.config.seed {
            Some(_) => self.rng.clone().fork(),
            None => GameRng::from_entropy(),
        };
        Ok(Self::with_rng(
            self.store.clone(),
            self.bank.clone(),
            self.config.clone(),
            PlayRoute::plain(),
            rng,
        ))
    }

    /// Leave mid-round. Nothing is committed.
    pub fn abandon(mut self) {
        self.countdown.cancel();
        if self.phase == RoundPhase::Active {
            log::info!("{} round abandoned, {} points discarded", self.team, self.score);
        }
    }
}
