use thiserror::Error;

/// Input outside the fixed catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("unknown principle name {0:?}")]
    UnknownPrinciple(String),
    #[error("unknown outcome text {0:?}")]
    UnknownOutcome(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl GameError {
    pub fn unknown_principle(name: &str) -> Self {
        InvalidInput::UnknownPrinciple(name.to_string()).into()
    }

    pub fn unknown_outcome(text: &str) -> Self {
        InvalidInput::UnknownOutcome(text.to_string()).into()
    }
}
