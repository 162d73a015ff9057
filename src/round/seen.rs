//! The persisted set of already-shown words.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{Team, WordPair};

/// Seen-keys (`team-easy-hard`) in first-seen order.
///
/// The set is per browser, not per round: it keeps growing across rounds
/// and sessions. Serialized as a JSON array of strings.
#[derive(Clone, Debug, Default)]
pub struct SeenWords {
    order: Vec<String>,
    index: FxHashSet<String>,
}

impl SeenWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    /// Has `team` been shown `pair`?
    #[must_use]
    pub fn has_seen(&self, team: Team, pair: &WordPair) -> bool {
        self.contains(&pair.seen_key(team))
    }

    /// Record a key. Returns `false` if it was already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.index.contains(&key) {
            return false;
        }
        self.index.insert(key.clone());
        self.order.push(key);
        true
    }

    /// Record that `team` was shown `pair`.
    pub fn mark(&mut self, team: Team, pair: &WordPair) -> bool {
        self.insert(pair.seen_key(team))
    }

    /// Does the set contain every pair of `pool` for `team`?
    pub fn covers<'a>(&self, team: Team, pool: impl IntoIterator<Item = &'a WordPair>) -> bool {
        pool.into_iter().all(|pair| self.has_seen(team, pair))
    }

    /// Drop every key belonging to `team`. Returns how many were removed.
    pub fn forget_team(&mut self, team: Team) -> usize {
        let prefix = format!("{}-", team.as_str());
        let before = self.order.len();
        self.order.retain(|key| !key.starts_with(&prefix));
        self.index.retain(|key| !key.starts_with(&prefix));
        before - self.order.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SeenWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seen = SeenWords::new();
        for key in iter {
            seen.insert(key);
        }
        seen
    }
}

impl Serialize for SeenWords {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.order.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SeenWords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keys = Vec::<String>::deserialize(deserializer)?;
        Ok(keys.into_iter().collect())
    }
}
