use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Principle catalogue primitives
// ---------------------------------------------------------------------------

/// Opaque display handle for a principle's icon.
///
/// The engine never interprets it; the presentation layer maps `key()` to
/// whatever glyph or image it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    ArrowUpRight,
    Brain,
    FileText,
    TrendingUp,
    Heart,
    BookOpen,
}

impl Icon {
    /// Stable kebab-case identifier for front ends.
    pub fn key(self) -> &'static str {
        match self {
            Icon::ArrowUpRight => "arrow-up-right",
            Icon::Brain        => "brain",
            Icon::FileText     => "file-text",
            Icon::TrendingUp   => "trending-up",
            Icon::Heart        => "heart",
            Icon::BookOpen     => "book-open",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One fixed principle: a unique name, its icon and the outcome it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Principle {
    pub name: &'static str,
    pub icon: Icon,
    pub outcome: &'static str,
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How the controller treats names/texts outside the fixed catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPolicy {
    /// Reject with [`GameError::InvalidInput`](super::GameError::InvalidInput).
    #[default]
    Strict,
    /// Tolerate: unknown names are ignored, unknown outcome text never matches.
    Permissive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `Some` makes every shuffle of the session reproducible.
    pub rng_seed: Option<u64>,
    pub input_policy: InputPolicy,
}

impl GameConfig {
    /// Defaults: entropy seed, strict input checking.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng_seed: Some(seed), ..Self::default() }
    }

    pub fn with_policy(mut self, input_policy: InputPolicy) -> Self {
        self.input_policy = input_policy;
        self
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Everything that changes during one play session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub selected_principle: Option<&'static str>,
    pub selected_outcome: Option<&'static str>,
    pub matched: BTreeSet<&'static str>,
    pub shuffled_outcomes: Vec<&'static str>,
    pub score: u32,
    pub is_complete: bool,
}

impl GameState {
    /// A fresh session around an already shuffled outcome order.
    pub fn fresh(shuffled_outcomes: Vec<&'static str>) -> Self {
        Self {
            selected_principle: None,
            selected_outcome: None,
            matched: BTreeSet::new(),
            shuffled_outcomes,
            score: 0,
            is_complete: false,
        }
    }

    pub fn is_matched(&self, name: &str) -> bool {
        self.matched.contains(name)
    }
}

/// What a single input did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A principle is now armed for matching.
    Armed { principle: &'static str },
    /// Outcome clicked with nothing armed; highlight only.
    Highlighted { outcome: &'static str },
    Matched { principle: &'static str, completed: bool },
    /// `outcome` is `None` when the clicked text was not in the catalogue.
    Missed { principle: &'static str, outcome: Option<&'static str> },
    /// Input tolerated under [`InputPolicy::Permissive`]; state unchanged.
    Ignored,
    Reset,
}

// ---------------------------------------------------------------------------
// Render views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    Matched,
    Selected,
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrincipleView {
    pub name: &'static str,
    pub icon: Icon,
    pub status: SelectionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeView {
    pub text: &'static str,
    pub status: SelectionStatus,
    /// Matched outcomes are shown disabled.
    pub enabled: bool,
}
