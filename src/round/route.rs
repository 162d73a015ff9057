//! The play route and its team flags.
//!
//! `/play?purple` or `/play?orange` forces the starting team. Flags are
//! presence-only (`?purple=0` still means purple), purple wins if both are
//! given, and once consumed they are scrubbed so a refresh does not apply
//! them again.

use crate::core::Team;

/// Path of the play screen.
pub const PLAY_PATH: &str = "/play";

/// A parsed navigation to the play screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayRoute {
    /// Team forced by a query flag, if any.
    pub team_override: Option<Team>,
}

impl PlayRoute {
    /// The plain play route, no override.
    #[must_use]
    pub const fn plain() -> Self {
        Self { team_override: None }
    }

    #[must_use]
    pub const fn for_team(team: Team) -> Self {
        Self {
            team_override: Some(team),
        }
    }

    /// Parse a path, a query string, or a full URL.
    ///
    /// ```
    /// use bonk_big_word::core::Team;
    /// use bonk_big_word::round::PlayRoute;
    ///
    /// assert_eq!(PlayRoute::parse("/play?purple").team_override, Some(Team::Purple));
    /// assert_eq!(PlayRoute::parse("?orange").team_override, Some(Team::Orange));
    /// assert_eq!(PlayRoute::parse("/play").team_override, None);
    /// ```
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let query = match location.split_once('?') {
            Some((_, query)) => query,
            None => return Self::plain(),
        };
        let query = query.split('#').next().unwrap_or_default();

        let mut has_orange = false;
        let mut has_purple = false;
        for param in query.split('&') {
            let name = param.split('=').next().unwrap_or_default();
            match name {
                "orange" => has_orange = true,
                "purple" => has_purple = true,
                _ => {}
            }
        }

        let team_override = if has_purple {
            Some(Team::Purple)
        } else if has_orange {
            Some(Team::Orange)
        } else {
            None
        };
        Self { team_override }
    }

    /// Does the visible address still carry a flag that should be removed?
    #[must_use]
    pub fn needs_scrub(&self) -> bool {
        self.team_override.is_some()
    }

    /// The address to show once flags have been consumed.
    #[must_use]
    pub const fn canonical(&self) -> &'static str {
        PLAY_PATH
    }

    /// Shareable deep link forcing this route's team.
    #[must_use]
    pub fn link(&self) -> String {
        match self.team_override {
            Some(team) => format!("{PLAY_PATH}?{team}"),
            None => PLAY_PATH.to_string(),
        }
    }
}
