//! Round controller integration tests.
//!
//! These drive full rounds against in-memory storage and check what ends
//! up persisted.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use bonk_big_word::core::{GameConfig, Team, TeamScores, WordBank, WordPair};
use bonk_big_word::error::StoreError;
use bonk_big_word::landing::LandingController;
use bonk_big_word::round::{PlayRoute, RoundController, RoundPhase, ScoreAction, SeenWords};
use bonk_big_word::store::{
    KeyValueStore, MemoryStore, ScoreStore, SessionStore, CURRENT_TEAM_KEY, TEAM_SCORES_KEY,
};

fn small_bank(per_team: usize) -> WordBank {
    WordBank::from_pools(
        (0..per_team).map(|i| WordPair::new(format!("orange easy {i}"), format!("orange hard {i}"))),
        (0..per_team).map(|i| WordPair::new(format!("purple easy {i}"), format!("purple hard {i}"))),
    )
    .unwrap()
}

fn fast_config() -> GameConfig {
    GameConfig::default().with_round_duration_ms(2_000).with_seed(42)
}

fn run_to_expiry<S: KeyValueStore + Clone>(round: &mut RoundController<S>) {
    while round.is_active() {
        round.tick();
    }
}

/// Counts writes to the score key while delegating to a `MemoryStore`.
#[derive(Clone, Default)]
struct CountingStore {
    inner: MemoryStore,
    score_writes: Rc<Cell<usize>>,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if key == TEAM_SCORES_KEY {
            self.score_writes.set(self.score_writes.get() + 1);
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.inner.remove(key)
    }
}

/// Reads work, every write fails.
#[derive(Clone, Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("quota exceeded".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("quota exceeded".to_string()))
    }
}

// =============================================================================
// Scoring
// =============================================================================

/// Orange scores +1, +3, -1 and the round expires: totals become 3 / 0.
#[test]
fn test_orange_round_commits_final_score() {
    let store = MemoryStore::new();
    ScoreStore::new(store.clone()).reset().unwrap();

    let mut round = RoundController::start(store.clone(), small_bank(10), fast_config(), PlayRoute::plain());
    assert_eq!(round.team(), Team::Orange);

    round.press(ScoreAction::Easy);
    round.press(ScoreAction::Hard);
    round.press(ScoreAction::Fail);
    run_to_expiry(&mut round);

    let summary = round.summary().unwrap();
    assert_eq!(summary.score, 3);
    assert_eq!(summary.words_played, 3);
    assert_eq!((summary.easy, summary.hard, summary.failed, summary.skipped), (1, 1, 1, 0));
    assert_eq!(ScoreStore::new(store).read(), TeamScores { orange: 3, purple: 0 });
}

#[test]
fn test_score_can_go_negative() {
    let store = MemoryStore::new();
    let mut round = RoundController::start(store.clone(), small_bank(10), fast_config(), PlayRoute::plain());

    for _ in 0..4 {
        round.press(ScoreAction::Skip);
    }
    run_to_expiry(&mut round);

    assert_eq!(round.score(), -4);
    assert_eq!(ScoreStore::new(store).read().orange, -4);
}

#[test]
fn test_commit_happens_exactly_once() {
    let store = CountingStore::default();
    let mut round = RoundController::start(store.clone(), small_bank(10), fast_config(), PlayRoute::plain());
    round.press(ScoreAction::Hard);

    for _ in 0..100 {
        round.tick();
        round.advance(Duration::from_millis(250));
    }

    assert_eq!(round.phase(), RoundPhase::Expired);
    assert_eq!(store.score_writes.get(), 1);
    assert_eq!(ScoreStore::new(store.inner).read().orange, 3);
}

#[test]
fn test_nothing_committed_before_expiry() {
    let store = CountingStore::default();
    let mut round = RoundController::start(store.clone(), small_bank(10), fast_config(), PlayRoute::plain());

    round.press(ScoreAction::Hard);
    for _ in 0..19 {
        assert!(round.tick().is_none());
    }

    assert!(round.is_active());
    assert_eq!(round.time_remaining_ms(), 100);
    assert_eq!(store.score_writes.get(), 0);
}

#[test]
fn test_failed_commit_does_not_panic() {
    let store = ReadOnlyStore::default();
    let mut round = RoundController::start(store, small_bank(10), fast_config(), PlayRoute::plain());

    assert!(round.press(ScoreAction::Easy));
    run_to_expiry(&mut round);

    let summary = round.summary().unwrap();
    assert_eq!(summary.score, 1);
    assert!(!summary.committed());
    assert_eq!(round.phase(), RoundPhase::Expired);
}

// =============================================================================
// Team resolution
// =============================================================================

/// The route flag beats the stored marker and overwrites it.
#[test]
fn test_override_beats_stored_marker() {
    let store = MemoryStore::with_entries([(CURRENT_TEAM_KEY, "orange")]);

    let round = RoundController::start(
        store.clone(),
        small_bank(5),
        fast_config(),
        PlayRoute::parse("/play?purple"),
    );

    assert_eq!(round.team(), Team::Purple);
    assert_eq!(store.get(CURRENT_TEAM_KEY).unwrap().as_deref(), Some("purple"));
}

#[test]
fn test_stored_marker_used_without_override() {
    let store = MemoryStore::with_entries([(CURRENT_TEAM_KEY, "purple")]);
    let round = RoundController::start(store, small_bank(5), fast_config(), PlayRoute::plain());
    assert_eq!(round.team(), Team::Purple);
}

#[test]
fn test_defaults_to_orange() {
    let store = MemoryStore::with_entries([(CURRENT_TEAM_KEY, "teal")]);
    let round = RoundController::start(store.clone(), small_bank(5), fast_config(), PlayRoute::plain());

    assert_eq!(round.team(), Team::Orange);
    assert_eq!(SessionStore::new(store).active_team(), Some(Team::Orange));
}

// =============================================================================
// Word selection across rounds
// =============================================================================

#[test]
fn test_no_repeats_until_pool_exhausted() {
    let store = MemoryStore::new();
    let pool_size = 8;
    let mut round = RoundController::start(store, small_bank(pool_size), fast_config(), PlayRoute::plain());

    let mut shown = Vec::new();
    for _ in 0..pool_size {
        shown.push(round.current_word().cloned().unwrap());
        round.press(ScoreAction::Easy);
    }

    let mut unique = shown.clone();
    unique.sort_by(|a, b| a.easy.cmp(&b.easy));
    unique.dedup();
    assert_eq!(unique.len(), pool_size);
}

#[test]
fn test_seen_words_persist_between_rounds() {
    let store = MemoryStore::new();
    let bank = small_bank(6);

    let mut first = RoundController::start(store.clone(), bank.clone(), fast_config(), PlayRoute::plain());
    let mut shown = Vec::new();
    for _ in 0..3 {
        shown.push(first.current_word().cloned().unwrap());
        first.press(ScoreAction::Easy);
    }
    first.abandon();

    // A different seed would happily pick the same words if nothing was
    // remembered.
    let config = fast_config().with_seed(7);
    let mut second = RoundController::start(store.clone(), bank, config, PlayRoute::plain());
    for _ in 0..3 {
        let word = second.current_word().cloned().unwrap();
        assert!(!shown.contains(&word), "{word:?} shown twice");
        second.press(ScoreAction::Easy);
    }

    assert_eq!(SessionStore::new(store).seen_words().len(), 6);
}

/// Every purple word already seen: selection falls back to the full pool.
#[test]
fn test_exhausted_pool_still_yields_words() {
    let bank = small_bank(4);
    let seen: SeenWords = bank.pool(Team::Purple).iter().map(|p| p.seen_key(Team::Purple)).collect();

    let store = MemoryStore::new();
    SessionStore::new(store.clone()).save_seen_words(&seen).unwrap();

    let mut round = RoundController::start(store.clone(), bank.clone(), fast_config(), PlayRoute::for_team(Team::Purple));
    for _ in 0..10 {
        let word = round.current_word().cloned().unwrap();
        assert!(bank.pool(Team::Purple).contains(&word));
        assert!(round.press(ScoreAction::Skip));
    }

    // The stale set is left as it was.
    assert_eq!(SessionStore::new(store).seen_words().len(), 4);
}

#[test]
fn test_failed_seen_persist_keeps_playing() {
    let store = ReadOnlyStore::default();
    let mut round = RoundController::start(store, small_bank(3), fast_config(), PlayRoute::plain());

    let first = round.current_word().cloned().unwrap();
    assert!(round.press(ScoreAction::Hard));

    // Still tracked in memory even though the write failed.
    assert!(round.seen().has_seen(Team::Orange, &first));
    assert_ne!(round.current_word(), Some(&first));
}

// =============================================================================
// Full session
// =============================================================================

#[test]
fn test_landing_to_handoff_to_landing() {
    let store = MemoryStore::with_entries([(CURRENT_TEAM_KEY, "purple")]);

    let mut landing = LandingController::open(store.clone());
    landing.reset_scores().unwrap();
    let route = landing.start_game().unwrap();

    let mut orange = RoundController::start(store.clone(), small_bank(20), fast_config(), route);
    assert_eq!(orange.team(), Team::Orange);
    orange.press(ScoreAction::Hard);
    orange.press(ScoreAction::Hard);
    run_to_expiry(&mut orange);

    let mut purple = orange.handoff().unwrap();
    drop(orange);
    assert_eq!(purple.team(), Team::Purple);
    assert_eq!(purple.score(), 0);
    purple.press(ScoreAction::Easy);
    purple.advance(Duration::from_secs(3));

    assert_eq!(purple.phase(), RoundPhase::Expired);
    let summary = purple.summary().unwrap();
    assert_eq!(summary.totals, Some(TeamScores { orange: 6, purple: 1 }));

    let next = purple.handoff().unwrap();
    assert_eq!(next.team(), Team::Orange);
    next.abandon();

    let landing = LandingController::open(store);
    assert_eq!(landing.scores(), TeamScores { orange: 6, purple: 1 });
    assert_eq!(landing.scores().leader(), Some(Team::Orange));
}

#[test]
fn test_seeded_rounds_are_reproducible() {
    let play = || {
        let mut round = RoundController::start(MemoryStore::new(), small_bank(30), fast_config(), PlayRoute::plain());
        let mut words = Vec::new();
        for _ in 0..10 {
            words.push(round.current_word().cloned().unwrap());
            round.press(ScoreAction::Easy);
        }
        words
    };

    assert_eq!(play(), play());
}
