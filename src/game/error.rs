//! Errors surfaced by the game core.

use thiserror::Error;

use crate::config::game::{MAX_LIFE_PURCHASE, MIN_LIFE_PURCHASE};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(
        "life quantity must be between {min} and {max}, got {quantity}",
        min = MIN_LIFE_PURCHASE,
        max = MAX_LIFE_PURCHASE
    )]
    InvalidLifeQuantity { quantity: i64 },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Stable code sent to clients alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidLifeQuantity { .. } => "INVALID_QUANTITY",
            GameError::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}
