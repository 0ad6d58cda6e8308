use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::error::GameError;
use crate::game::lives::{LifeOrder, PurchaseOutcome};
use crate::game::types::{Direction, Position, RoundStatus};

/// Client -> server, as JSON: `{"action": "Move", "data": "Up"}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    Move(Direction),
    /// Any JSON integer; range errors come back as `INVALID_QUANTITY`.
    /// Non-integer values fail to parse and come back as `INVALID_COMMAND`.
    BuyLives { quantity: i64 },
    ConfirmPurchase { order_id: Uuid },
    CancelPurchase { order_id: Uuid },
    Ping,
}

/// Full picture of a session, sent to newcomers and served over HTTP.
#[derive(Serialize, Clone, Debug)]
pub struct GameSnapshot {
    pub game_id: Uuid,
    pub tile_count: i32,
    pub snake: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub lives: u32,
    pub status: RoundStatus,
    pub tick_interval_ms: u64,
    pub awaiting_purchase: bool,
}

/// Server -> client, tagged the same way as `ClientWsMessage`.
#[derive(Message, Serialize, Clone, Debug)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    Snapshot(GameSnapshot),
    Frame {
        snake: Vec<Position>,
        food: Position,
    },
    Score {
        score: u32,
    },
    Lives {
        lives: u32,
    },
    RoundEnded {
        final_score: u32,
    },
    PurchaseQuote(LifeOrder),
    PurchaseResult {
        order_id: Uuid,
        outcome: PurchaseOutcome,
        lives: u32,
    },
    Error {
        code: String,
        message: String,
    },
}

impl ServerWsMessage {
    pub fn error(code: &str, message: &str) -> Self {
        Self::Error { code: code.to_string(), message: message.to_string() }
    }

    pub fn game_error(err: &GameError) -> Self {
        Self::error(err.code(), &err.to_string())
    }
}

/// A command from the player's connection.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ProcessClientMessage {
    pub msg: ClientWsMessage,
    pub connection_id: Uuid,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct RegisterSession {
    pub connection_id: Uuid,
    pub addr: Recipient<ServerWsMessage>,
    pub is_player: bool,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct UnregisterSession {
    pub connection_id: Uuid,
    pub is_player: bool,
}

#[derive(Message)]
#[rtype(result = "GameSnapshot")]
pub struct GetSnapshot;
