//! Game configuration.
//!
//! Deployments supply a single round-duration value; everything else has a
//! sensible default and exists mainly so tests can pin timing and RNG.
//!
//! ## Environment
//!
//! - `GAME_TIME_MS`: round duration in milliseconds.
//! - `GAME_TIME`: round duration in seconds, read when `GAME_TIME_MS` is
//!   unset (the variable the web build has always used).
//! - `BONK_SEED`: fixed RNG seed.
//!
//! Unset, non-numeric or non-positive durations fall back to 90 seconds.

use serde::{Deserialize, Serialize};

/// Default round length.
pub const DEFAULT_ROUND_DURATION_MS: u64 = 90_000;

/// Countdown granularity.
pub const DEFAULT_TICK_MS: u64 = 100;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Length of one team's round.
    pub round_duration_ms: u64,

    /// Countdown step. The timer drops by exactly this much per tick.
    pub tick_ms: u64,

    /// RNG seed for word selection. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Drop a team's seen-keys once its whole pool has been shown.
    ///
    /// Off by default: an exhausted pool keeps sampling from the full list
    /// while the persisted seen set stays as it is.
    pub recycle_exhausted_pool: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_duration_ms: DEFAULT_ROUND_DURATION_MS,
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
            recycle_exhausted_pool: false,
        }
    }
}

impl GameConfig {
    /// Configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configuration from an arbitrary variable lookup.
    ///
    /// ```
    /// use bonk_big_word::core::GameConfig;
    ///
    /// let config = GameConfig::from_lookup(|key| match key {
    ///     "GAME_TIME" => Some("45".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.round_duration_ms, 45_000);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let round_duration_ms = lookup("GAME_TIME_MS")
            .and_then(|value| duration_ms(&value, 1.0))
            .or_else(|| lookup("GAME_TIME").and_then(|value| duration_ms(&value, 1000.0)))
            .unwrap_or(DEFAULT_ROUND_DURATION_MS);

        let seed = lookup("BONK_SEED").and_then(|value| value.trim().parse().ok());

        Self {
            round_duration_ms,
            seed,
            ..Self::default()
        }
    }

    /// Set the round duration. Zero is replaced by the default.
    #[must_use]
    pub fn with_round_duration_ms(mut self, ms: u64) -> Self {
        self.round_duration_ms = if ms == 0 { DEFAULT_ROUND_DURATION_MS } else { ms };
        self
    }

    /// Set the countdown step. Zero is replaced by the default.
    #[must_use]
    pub fn with_tick_ms(mut self, ms: u64) -> Self {
        self.tick_ms = if ms == 0 { DEFAULT_TICK_MS } else { ms };
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_recycle_exhausted_pool(mut self, recycle: bool) -> Self {
        self.recycle_exhausted_pool = recycle;
        self
    }

    /// Number of ticks in a full round, rounding a partial last tick up.
    #[must_use]
    pub fn ticks_per_round(&self) -> u64 {
        self.round_duration_ms.div_ceil(self.tick_ms)
    }
}

/// Parse a duration in units of `scale` milliseconds.
///
/// Scaling happens before rounding, so `1.5` seconds is 1500 ms. Anything
/// under one millisecond once scaled is rejected.
fn duration_ms(value: &str, scale: f64) -> Option<u64> {
    let number: f64 = value.trim().parse().ok()?;
    let ms = (number * scale).round();
    if ms.is_finite() && ms >= 1.0 {
        Some(ms as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.round_duration_ms, 90_000);
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.seed, None);
        assert!(!config.recycle_exhausted_pool);
        assert_eq!(config.ticks_per_round(), 900);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_round_duration_ms(1_000)
            .with_tick_ms(250)
            .with_seed(9)
            .with_recycle_exhausted_pool(true);

        assert_eq!(config.round_duration_ms, 1_000);
        assert_eq!(config.tick_ms, 250);
        assert_eq!(config.seed, Some(9));
        assert!(config.recycle_exhausted_pool);
        assert_eq!(config.ticks_per_round(), 4);
    }

    #[test]
    fn test_zero_values_fall_back() {
        let config = GameConfig::default().with_round_duration_ms(0).with_tick_ms(0);
        assert_eq!(config.round_duration_ms, DEFAULT_ROUND_DURATION_MS);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn test_partial_last_tick_rounds_up() {
        let config = GameConfig::default().with_round_duration_ms(250);
        assert_eq!(config.ticks_per_round(), 3);
    }

    #[test]
    fn test_env_milliseconds() {
        let config = GameConfig::from_lookup(lookup_from(&[("GAME_TIME_MS", "5000")]));
        assert_eq!(config.round_duration_ms, 5_000);
    }

    #[test]
    fn test_env_milliseconds_win_over_seconds() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("GAME_TIME_MS", "1500"),
            ("GAME_TIME", "60"),
        ]));
        assert_eq!(config.round_duration_ms, 1_500);
    }

    #[test]
    fn test_env_seconds() {
        let config = GameConfig::from_lookup(lookup_from(&[("GAME_TIME", "60")]));
        assert_eq!(config.round_duration_ms, 60_000);
    }

    #[test]
    fn test_env_fractional_seconds() {
        let config = GameConfig::from_lookup(lookup_from(&[("GAME_TIME", "1.5")]));
        assert_eq!(config.round_duration_ms, 1_500);

        let config = GameConfig::from_lookup(lookup_from(&[("GAME_TIME", "0.5")]));
        assert_eq!(config.round_duration_ms, 500);
    }

    #[test]
    fn test_env_sub_millisecond_uses_default() {
        let config = GameConfig::from_lookup(lookup_from(&[("GAME_TIME", "0.0001")]));
        assert_eq!(config.round_duration_ms, DEFAULT_ROUND_DURATION_MS);
    }

    #[test]
    fn test_env_invalid_values_use_default() {
        for bad in ["", "abc", "0", "-30", "NaN", "inf"] {
            let config = GameConfig::from_lookup(lookup_from(&[("GAME_TIME_MS", bad)]));
            assert_eq!(config.round_duration_ms, DEFAULT_ROUND_DURATION_MS, "value {bad:?}");
        }
        let config = GameConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.round_duration_ms, DEFAULT_ROUND_DURATION_MS);
    }

    #[test]
    fn test_env_seed() {
        let config = GameConfig::from_lookup(lookup_from(&[("BONK_SEED", "1234")]));
        assert_eq!(config.seed, Some(1234));

        let config = GameConfig::from_lookup(lookup_from(&[("BONK_SEED", "soon")]));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
