//! The match game controller: owns the session state and applies user input.
//!
//! ## Transitions
//!
//! - `select_principle` arms a principle, replacing any previous one.
//! - `select_outcome` with nothing armed only highlights the outcome.
//! - `select_outcome` with a principle armed evaluates immediately: a correct
//!   pair scores +1 and records the match, a wrong pair costs 1 point (never
//!   below zero). Both selections are cleared either way.
//! - `reset` starts a new session with a fresh shuffle.
//!
//! Once every principle is matched the session is complete; only `reset`
//! leaves that state. The controller does not stop further input after
//! completion, it simply keeps scoring.

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::match_engine::{
    error::GameError,
    models::{
        GameConfig, GameEvent, GameState, InputPolicy, OutcomeView, Principle, PrincipleView,
        SelectionStatus,
    },
    principles::{self, PRINCIPLES},
    shuffle,
};

pub struct MatchGame {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    revision: u64,
}

impl MatchGame {
    /// Start a session with default config (entropy seed, strict input).
    pub fn new() -> Self {
        Self::with_config(GameConfig::new())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let state = Self::initialize(&mut rng);
        debug!(order = ?state.shuffled_outcomes, "session initialized");
        Self { config, rng, state, revision: 0 }
    }

    fn initialize(rng: &mut StdRng) -> GameState {
        GameState::fresh(shuffle::shuffled(&principles::outcome_texts(), rng))
    }

    // -----------------------------------------------------------------------
    // Input contract
    // -----------------------------------------------------------------------

    /// Arm `name` for matching. Re-arming an already matched principle is allowed.
    pub fn select_principle(&mut self, name: &str) -> Result<GameEvent, GameError> {
        let Some(principle) = principles::principle_by_name(name) else {
            return self.reject(GameError::unknown_principle(name));
        };

        self.state.selected_principle = Some(principle.name);
        self.touch();
        debug!(principle = principle.name, "principle armed");
        Ok(GameEvent::Armed { principle: principle.name })
    }

    /// Click an outcome; evaluates the pair if a principle is armed.
    pub fn select_outcome(&mut self, text: &str) -> Result<GameEvent, GameError> {
        let resolved = principles::principle_by_outcome(text);
        if resolved.is_none() {
            let permissive = self.config.input_policy == InputPolicy::Permissive;
            // Permissive input still needs an armed principle and non-empty text to count.
            if !permissive || text.is_empty() || self.state.selected_principle.is_none() {
                return self.reject(GameError::unknown_outcome(text));
            }
        }

        let Some(armed) = self.state.selected_principle else {
            // resolved is Some here: unknown text with nothing armed was rejected above.
            let outcome = resolved.map_or("", |p| p.outcome);
            self.state.selected_outcome = Some(outcome);
            self.touch();
            debug!(outcome, "outcome highlighted");
            return Ok(GameEvent::Highlighted { outcome });
        };

        let event = match resolved {
            Some(p) if p.name == armed => {
                self.state.matched.insert(armed);
                self.state.score += 1;
                let completed = self.state.matched.len() == PRINCIPLES.len();
                if completed && !self.state.is_complete {
                    self.state.is_complete = true;
                    info!(score = self.state.score, "all principles matched");
                }
                debug!(principle = armed, score = self.state.score, "correct match");
                GameEvent::Matched { principle: armed, completed }
            }
            other => {
                self.state.score = self.state.score.saturating_sub(1);
                debug!(principle = armed, outcome = text, score = self.state.score, "incorrect match");
                GameEvent::Missed { principle: armed, outcome: other.map(|p| p.outcome) }
            }
        };

        self.state.selected_principle = None;
        self.state.selected_outcome = None;
        self.touch();
        Ok(event)
    }

    /// Discard all progress and reshuffle.
    pub fn reset(&mut self) -> GameEvent {
        self.state = Self::initialize(&mut self.rng);
        self.touch();
        debug!(order = ?self.state.shuffled_outcomes, "session reset");
        GameEvent::Reset
    }

    fn reject(&self, err: GameError) -> Result<GameEvent, GameError> {
        match self.config.input_policy {
            InputPolicy::Strict => {
                warn!(%err, "input rejected");
                Err(err)
            }
            InputPolicy::Permissive => {
                warn!(%err, "input ignored");
                Ok(GameEvent::Ignored)
            }
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // -----------------------------------------------------------------------
    // Render contract
    // -----------------------------------------------------------------------

    pub fn principles(&self) -> &'static [Principle] {
        &PRINCIPLES
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    pub fn selected_principle(&self) -> Option<&'static str> {
        self.state.selected_principle
    }

    pub fn selected_outcome(&self) -> Option<&'static str> {
        self.state.selected_outcome
    }

    pub fn shuffled_outcomes(&self) -> &[&'static str] {
        &self.state.shuffled_outcomes
    }

    pub fn matched(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.state.matched.iter().copied()
    }

    /// Bumped on every state change; poll it to know when to redraw.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Principles in declaration order with their highlight status.
    pub fn principle_views(&self) -> Vec<PrincipleView> {
        PRINCIPLES
            .iter()
            .map(|p| PrincipleView {
                name: p.name,
                icon: p.icon,
                status: if self.state.is_matched(p.name) {
                    SelectionStatus::Matched
                } else if self.state.selected_principle == Some(p.name) {
                    SelectionStatus::Selected
                } else {
                    SelectionStatus::Idle
                },
            })
            .collect()
    }

    /// Outcomes in session order with their highlight status.
    pub fn outcome_views(&self) -> Vec<OutcomeView> {
        self.state
            .shuffled_outcomes
            .iter()
            .map(|&text| {
                let matched = principles::principle_by_outcome(text)
                    .is_some_and(|p| self.state.is_matched(p.name));
                let status = if matched {
                    SelectionStatus::Matched
                } else if self.state.selected_outcome == Some(text) {
                    SelectionStatus::Selected
                } else {
                    SelectionStatus::Idle
                };
                OutcomeView { text, status, enabled: !matched }
            })
            .collect()
    }
}

impl Default for MatchGame {
    fn default() -> Self {
        Self::new()
    }
}
