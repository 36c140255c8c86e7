//! Core match engine: principle catalogue, shuffling, and the game controller.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: principles, icons, config, session state, events, views |
//! | `principles` | The fixed six-principle catalogue plus name/outcome lookups |
//! | `shuffle`    | Fisher-Yates shuffle used to order outcomes per session |
//! | `error`      | `GameError` / `InvalidInput` |
//! | `controller` | `MatchGame`, the single owner of session state |

pub mod controller;
pub mod error;
pub mod models;
pub mod principles;
pub mod shuffle;

pub use controller::MatchGame;
pub use error::{GameError, InvalidInput};
pub use models::{
    GameConfig, GameEvent, GameState, Icon, InputPolicy, OutcomeView, Principle,
    PrincipleView, SelectionStatus,
};
pub use principles::{principle_by_name, principle_by_outcome, PRINCIPLES};
