//! Error types for the game engine and world configuration.

use thiserror::Error;

/// Recoverable conditions reported by the engine.
///
/// None of these are fatal: the operation that produced one leaves all
/// state untouched and the caller is expected to report it and re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough munnies. {item} costs {price}, you have {available}.")]
    InsufficientFunds {
        item: String,
        price: i32,
        available: i32,
    },
    #[error("Item not found: {0}")]
    ItemNotFound(String),
    #[error("Invalid action: {0:?}")]
    InvalidAction(String),
    /// A turn was submitted after the encounter reached a terminal state.
    #[error("The encounter is already over")]
    EncounterOver,
}

/// Failures while loading a [`crate::world::WorldConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
