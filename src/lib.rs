//! # principle_match
//!
//! The game logic behind a small "match the principle to its outcome" widget.
//!
//! Six fixed principles are shown in declaration order next to their outcome
//! texts in shuffled order. The player arms a principle, then clicks an
//! outcome: a correct pair scores a point and is recorded as matched, a wrong
//! pair costs a point (the score never drops below zero). Matching all six
//! completes the session; `reset` starts over with a fresh shuffle.
//!
//! Rendering is left to the caller. [`MatchGame`] exposes read access to the
//! whole session plus ready-made per-button views, and
//! [`to_render_json`] packs a snapshot for a web front end.
//!
//! ## Quick start
//!
//! ```rust
//! use principle_match::{GameConfig, GameEvent, MatchGame};
//!
//! let mut game = MatchGame::with_config(GameConfig::seeded(42));
//! game.select_principle("Headline")?;
//! let event = game.select_outcome("Transforms complex AI into business-driving solutions")?;
//!
//! assert_eq!(event, GameEvent::Matched { principle: "Headline", completed: false });
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.selected_principle(), None);
//! # Ok::<(), principle_match::GameError>(())
//! ```
//!
//! Unknown names and texts are rejected with [`GameError::InvalidInput`] by
//! default; [`InputPolicy::Permissive`] tolerates them instead.

pub mod match_engine;
pub mod render_adapter;

pub use match_engine::{
    GameConfig, GameError, GameEvent, GameState, Icon, InputPolicy, InvalidInput, MatchGame,
    OutcomeView, Principle, PrincipleView, SelectionStatus, PRINCIPLES,
};
pub use render_adapter::to_render_json;
