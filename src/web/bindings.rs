//! `wasm-bindgen` wrappers around the landing and round controllers.

use wasm_bindgen::prelude::*;

use super::local_storage::LocalStorage;
use crate::core::{GameConfig, WordBank};
use crate::landing::LandingController;
use crate::round::{PlayRoute, RoundController, ScoreAction};

/// Round settings baked in at build time from `GAME_TIME_MS` or `GAME_TIME`.
fn build_config() -> GameConfig {
    GameConfig::from_lookup(|key| {
        let value = match key {
            "GAME_TIME_MS" => option_env!("GAME_TIME_MS"),
            "GAME_TIME" => option_env!("GAME_TIME"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// Replace the visible address without reloading.
fn scrub_address(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(e) = result {
        log::warn!("could not scrub address to {path}: {e:?}");
    }
}

/// Landing page controller.
#[wasm_bindgen]
pub struct WebLanding {
    inner: LandingController<LocalStorage>,
}

#[wasm_bindgen]
impl WebLanding {
    /// Open the landing page, reading the stored totals.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebLanding {
        Self {
            inner: LandingController::open(LocalStorage),
        }
    }

    #[wasm_bindgen(getter, js_name = orangeScore)]
    pub fn orange_score(&self) -> f64 {
        self.inner.scores().orange as f64
    }

    #[wasm_bindgen(getter, js_name = purpleScore)]
    pub fn purple_score(&self) -> f64 {
        self.inner.scores().purple as f64
    }

    #[wasm_bindgen(js_name = resetScores)]
    pub fn reset_scores(&mut self) -> Result<(), JsError> {
        Ok(self.inner.reset_scores()?)
    }

    /// Mark orange as next and return the route to navigate to.
    #[wasm_bindgen(js_name = startGame)]
    pub fn start_game(&mut self) -> Result<String, JsError> {
        Ok(self.inner.start_game()?.link())
    }
}

impl Default for WebLanding {
    fn default() -> Self {
        Self::new()
    }
}

/// Play page controller.
///
/// JavaScript drives the countdown by calling `tick()` every `tickMs`
/// milliseconds and clears its interval once `tick()` returns `true`.
#[wasm_bindgen]
pub struct WebRound {
    inner: RoundController<LocalStorage>,
}

#[wasm_bindgen]
impl WebRound {
    /// Start a round from the page's query string (`location.search`).
    ///
    /// `round_ms` overrides the built-in duration when given.
    #[wasm_bindgen(constructor)]
    pub fn new(search: &str, round_ms: Option<f64>) -> Result<WebRound, JsError> {
        let route = PlayRoute::parse(search);
        let mut config = build_config();
        if let Some(ms) = round_ms.filter(|ms| ms.is_finite() && *ms >= 1.0) {
            config = config.with_round_duration_ms(ms as u64);
        }

        let inner = RoundController::start(LocalStorage, WordBank::builtin()?, config, route);
        if route.needs_scrub() {
            scrub_address(route.canonical());
        }
        Ok(Self { inner })
    }

    /// Advance one tick. Returns `true` on the tick that ends the round.
    pub fn tick(&mut self) -> bool {
        self.inner.tick().is_some()
    }

    pub fn easy(&mut self) -> bool {
        self.inner.press(ScoreAction::Easy)
    }

    pub fn hard(&mut self) -> bool {
        self.inner.press(ScoreAction::Hard)
    }

    pub fn fail(&mut self) -> bool {
        self.inner.press(ScoreAction::Fail)
    }

    pub fn skip(&mut self) -> bool {
        self.inner.press(ScoreAction::Skip)
    }

    #[wasm_bindgen(getter)]
    pub fn team(&self) -> String {
        self.inner.team().to_string()
    }

    #[wasm_bindgen(getter, js_name = easyWord)]
    pub fn easy_word(&self) -> Option<String> {
        self.inner.current_word().map(|pair| pair.easy.clone())
    }

    #[wasm_bindgen(getter, js_name = hardWord)]
    pub fn hard_word(&self) -> Option<String> {
        self.inner.current_word().map(|pair| pair.hard.clone())
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> f64 {
        self.inner.score() as f64
    }

    #[wasm_bindgen(getter, js_name = timeRemainingMs)]
    pub fn time_remaining_ms(&self) -> f64 {
        self.inner.time_remaining_ms() as f64
    }

    /// Height of the draining background bar, 1.0 to 0.0.
    #[wasm_bindgen(getter, js_name = timeFraction)]
    pub fn time_fraction(&self) -> f64 {
        self.inner.time_fraction()
    }

    #[wasm_bindgen(getter, js_name = tickMs)]
    pub fn tick_ms(&self) -> f64 {
        self.inner.config().tick_ms as f64
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.inner.is_active()
    }

    /// Full round state as JSON, for debugging overlays.
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.state())?)
    }

    /// "Next Player": start the other team's round.
    pub fn handoff(&self) -> Result<WebRound, JsError> {
        Ok(Self {
            inner: self.inner.handoff()?,
        })
    }
}
