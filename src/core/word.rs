//! Word pairs and the per-team word bank.
//!
//! Word content is read-only data: each team has its own pool of
//! `{easy, hard}` pairs, loaded once at startup from JSON documents of the
//! form `{"words": [{"easy": "...", "hard": "..."}]}`.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::team::Team;
use crate::error::{GameError, Result};

const ORANGE_LISTS: [&str; 2] = [
    include_str!("../../words/orange/words-01.json"),
    include_str!("../../words/orange/words-02.json"),
];

const PURPLE_LISTS: [&str; 2] = [
    include_str!("../../words/purple/words-01.json"),
    include_str!("../../words/purple/words-02.json"),
];

/// An easy clue and a harder clue for the same concept.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub easy: String,
    pub hard: String,
}

impl WordPair {
    pub fn new(easy: impl Into<String>, hard: impl Into<String>) -> Self {
        Self {
            easy: easy.into(),
            hard: hard.into(),
        }
    }

    /// Identifier used to avoid showing this pair twice to `team`.
    ///
    /// ```
    /// use bonk_big_word::core::{Team, WordPair};
    ///
    /// let pair = WordPair::new("Cat", "Lynx");
    /// assert_eq!(pair.seen_key(Team::Purple), "purple-Cat-Lynx");
    /// ```
    #[must_use]
    pub fn seen_key(&self, team: Team) -> String {
        format!("{}-{}-{}", team.as_str(), self.easy, self.hard)
    }
}

/// One bundled word list document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WordList {
    pub words: Vec<WordPair>,
}

impl WordList {
    /// Parse a `{"words": [...]}` document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Per-team word pools.
///
/// Pools are `im::Vector`s so cloning a bank (once per controller) is O(1).
/// Every pool is guaranteed non-empty.
#[derive(Clone, Debug)]
pub struct WordBank {
    orange: Vector<WordPair>,
    purple: Vector<WordPair>,
}

impl WordBank {
    /// Build a bank from explicit pools.
    ///
    /// Fails if either pool is empty.
    pub fn from_pools(
        orange: impl IntoIterator<Item = WordPair>,
        purple: impl IntoIterator<Item = WordPair>,
    ) -> Result<Self> {
        let orange: Vector<WordPair> = orange.into_iter().collect();
        let purple: Vector<WordPair> = purple.into_iter().collect();

        for (team, pool) in [(Team::Orange, &orange), (Team::Purple, &purple)] {
            if pool.is_empty() {
                return Err(GameError::EmptyWordPool(team));
            }
        }

        Ok(Self { orange, purple })
    }

    /// Build a bank from JSON documents, concatenated per team in order.
    pub fn from_json(orange: &[&str], purple: &[&str]) -> Result<Self> {
        Self::from_pools(Self::parse_lists(orange)?, Self::parse_lists(purple)?)
    }

    /// The word lists bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(&ORANGE_LISTS, &PURPLE_LISTS)
    }

    /// Load `<dir>/orange/*.json` and `<dir>/purple/*.json`.
    ///
    /// Files are read in file-name order so `words-01.json` comes before
    /// `words-02.json`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let orange = Self::read_team_dir(&dir.join(Team::Orange.as_str()))?;
        let purple = Self::read_team_dir(&dir.join(Team::Purple.as_str()))?;
        log::debug!(
            "loaded word lists from {}: {} orange, {} purple",
            dir.display(),
            orange.len(),
            purple.len()
        );
        Self::from_pools(orange, purple)
    }

    /// The full pool for a team.
    #[must_use]
    pub fn pool(&self, team: Team) -> &Vector<WordPair> {
        match team {
            Team::Orange => &self.orange,
            Team::Purple => &self.purple,
        }
    }

    /// Number of pairs in a team's pool.
    #[must_use]
    pub fn len(&self, team: Team) -> usize {
        self.pool(team).len()
    }

    fn parse_lists(documents: &[&str]) -> Result<Vec<WordPair>> {
        let mut words = Vec::new();
        for json in documents {
            words.extend(WordList::from_json(json)?.words);
        }
        Ok(words)
    }

    fn read_team_dir(dir: &Path) -> Result<Vec<WordPair>> {
        let mut files: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        let mut words = Vec::new();
        for path in files {
            let json = std::fs::read_to_string(&path)?;
            words.extend(WordList::from_json(&json)?.words);
        }
        Ok(words)
    }
}
