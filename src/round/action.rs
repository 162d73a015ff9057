//! Scoring buttons.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::GameError;

/// What happened to the word on screen.
///
/// Every action moves on to a new word, failures included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreAction {
    /// The easy clue was guessed.
    Easy,
    /// The hard clue was guessed.
    Hard,
    /// The describer broke the rules.
    Fail,
    /// The team gave up on the word.
    Skip,
}

impl ScoreAction {
    pub const ALL: [ScoreAction; 4] = [
        ScoreAction::Easy,
        ScoreAction::Hard,
        ScoreAction::Fail,
        ScoreAction::Skip,
    ];

    /// Points awarded for this action.
    #[must_use]
    pub const fn points(self) -> i64 {
        match self {
            ScoreAction::Easy => 1,
            ScoreAction::Hard => 3,
            ScoreAction::Fail | ScoreAction::Skip => -1,
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ScoreAction::Easy => "+1",
            ScoreAction::Hard => "+3",
            ScoreAction::Fail => "Fail",
            ScoreAction::Skip => "Skip",
        }
    }
}

impl std::fmt::Display for ScoreAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScoreAction {
    type Err = GameError;

    /// Accepts the action name or its first letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "easy" | "+1" => Ok(ScoreAction::Easy),
            "h" | "hard" | "+3" => Ok(ScoreAction::Hard),
            "f" | "fail" => Ok(ScoreAction::Fail),
            "s" | "skip" => Ok(ScoreAction::Skip),
            _ => Err(GameError::UnknownAction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points() {
        assert_eq!(ScoreAction::Easy.points(), 1);
        assert_eq!(ScoreAction::Hard.points(), 3);
        assert_eq!(ScoreAction::Fail.points(), -1);
        assert_eq!(ScoreAction::Skip.points(), -1);
    }

    #[test]
    fn test_parse() {
        assert_eq!("e".parse::<ScoreAction>().unwrap(), ScoreAction::Easy);
        assert_eq!("HARD".parse::<ScoreAction>().unwrap(), ScoreAction::Hard);
        assert_eq!(" f ".parse::<ScoreAction>().unwrap(), ScoreAction::Fail);
        assert_eq!("+1".parse::<ScoreAction>().unwrap(), ScoreAction::Easy);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "x".parse::<ScoreAction>().unwrap_err();
        assert!(matches!(&err, GameError::UnknownAction(key) if key == "x"));
        assert_eq!(err.to_string(), "Unknown action `x`, expected e, h, f or s");
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: Vec<_> = ScoreAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["+1", "+3", "Fail", "Skip"]);
    }
}
