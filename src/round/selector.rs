//! Word selection without repeats.
//!
//! 1. Candidates are the team's pairs whose seen-key is not yet recorded.
//! 2. If every pair has been seen, the candidates are the full pool again.
//!    The seen set itself is left alone.
//! 3. One candidate is drawn uniformly at random.

use crate::core::{GameRng, Team, WordBank, WordPair};

use super::seen::SeenWords;

/// A selected pair and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub pair: WordPair,
    /// The team's unseen pool was exhausted; the pair may be a repeat.
    pub from_fallback: bool,
}

/// Stateless word selector.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordSelector;

impl WordSelector {
    /// Pick the next pair for `team`.
    ///
    /// Returns `None` only if the team's pool is empty, which a
    /// [`WordBank`] never allows.
    pub fn select(
        team: Team,
        bank: &WordBank,
        seen: &SeenWords,
        rng: &mut GameRng,
    ) -> Option<Selection> {
        let pool = bank.pool(team);
        let unseen: Vec<&WordPair> = pool.iter().filter(|pair| !seen.has_seen(team, pair)).collect();

        if let Some(pair) = rng.choose(&unseen) {
            log::debug!("{team}: picked `{}` from {} unseen", pair.easy, unseen.len());
            return Some(Selection {
                pair: (*pair).clone(),
                from_fallback: false,
            });
        }

        if pool.is_empty() {
            return None;
        }
        let pair = pool.get(rng.gen_range_usize(0..pool.len()))?;
        log::debug!("{team}: pool exhausted, picked `{}` from all {}", pair.easy, pool.len());
        Some(Selection {
            pair: pair.clone(),
            from_fallback: true,
        })
    }
}
