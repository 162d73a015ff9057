//! Team identification and per-team score totals.
//!
//! ## Team
//!
//! The game always has exactly two teams, `orange` and `purple`. The
//! lowercase name is the persisted and displayed form.
//!
//! ## TeamScores
//!
//! Running totals across rounds. Serialized as `{"orange": n, "purple": n}`;
//! an absent team reads as 0.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::GameError;

/// One of the two fixed player groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Plays first when nothing else says otherwise.
    #[default]
    Orange,
    Purple,
}

impl Team {
    /// Both teams in play order.
    pub const ALL: [Team; 2] = [Team::Orange, Team::Purple];

    /// The team that plays after this one.
    ///
    /// ```
    /// use bonk_big_word::core::Team;
    ///
    /// assert_eq!(Team::Orange.other(), Team::Purple);
    /// assert_eq!(Team::Purple.other(), Team::Orange);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Team::Orange => Team::Purple,
            Team::Purple => Team::Orange,
        }
    }

    /// Lowercase name, as persisted and used in seen-keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Team::Orange => "orange",
            Team::Purple => "purple",
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Team {
    type Err = GameError;

    /// Accepts `orange`/`purple` in any case, optionally JSON-quoted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(trimmed);

        if bare.eq_ignore_ascii_case("orange") {
            Ok(Team::Orange)
        } else if bare.eq_ignore_ascii_case("purple") {
            Ok(Team::Purple)
        } else {
            Err(GameError::UnknownTeam(s.to_string()))
        }
    }
}

/// Accumulated score per team.
///
/// Scores are signed: a round made of nothing but fails commits a negative
/// delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamScores {
    #[serde(default)]
    pub orange: i64,
    #[serde(default)]
    pub purple: i64,
}

impl TeamScores {
    /// Both teams at zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self { orange: 0, purple: 0 }
    }

    #[must_use]
    pub const fn get(&self, team: Team) -> i64 {
        match team {
            Team::Orange => self.orange,
            Team::Purple => self.purple,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut i64 {
        match team {
            Team::Orange => &mut self.orange,
            Team::Purple => &mut self.purple,
        }
    }

    /// Add `delta` to one team's total, saturating at the `i64` bounds.
    pub fn add(&mut self, team: Team, delta: i64) {
        let score = self.get_mut(team);
        *score = score.saturating_add(delta);
    }

    #[must_use]
    pub const fn total(&self) -> i64 {
        self.orange.saturating_add(self.purple)
    }

    /// The team ahead, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<Team> {
        match self.orange.cmp(&self.purple) {
            std::cmp::Ordering::Greater => Some(Team::Orange),
            std::cmp::Ordering::Less => Some(Team::Purple),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Iterate over (Team, score) pairs in play order.
    pub fn iter(&self) -> impl Iterator<Item = (Team, i64)> + '_ {
        Team::ALL.into_iter().map(move |team| (team, self.get(team)))
    }
}

impl Index<Team> for TeamScores {
    type Output = i64;

    fn index(&self, team: Team) -> &Self::Output {
        match team {
            Team::Orange => &self.orange,
            Team::Purple => &self.purple,
        }
    }
}

impl IndexMut<Team> for TeamScores {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}
