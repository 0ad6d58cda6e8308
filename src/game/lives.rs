//! Buying extra lives.
//!
//! The game never talks to a payment provider. It validates how many lives are
//! asked for, prices the order, and asks a `LifeBroker` whether the purchase
//! went through. Only a confirmed purchase touches the lives counter.

use serde::Serialize;
use uuid::Uuid;

use crate::config::game::{LIFE_UNIT_PRICE_CENTS, MAX_LIFE_PURCHASE, MIN_LIFE_PURCHASE};
use crate::game::error::GameError;

/// A number of lives within the purchasable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeQuantity(u32);

impl LifeQuantity {
    pub fn new(quantity: u32) -> Result<Self, GameError> {
        if (MIN_LIFE_PURCHASE..=MAX_LIFE_PURCHASE).contains(&quantity) {
            Ok(Self(quantity))
        } else {
            Err(GameError::InvalidLifeQuantity { quantity: i64::from(quantity) })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for LifeQuantity {
    type Error = GameError;

    fn try_from(quantity: u32) -> Result<Self, Self::Error> {
        Self::new(quantity)
    }
}

/// Quantities as they arrive from clients, possibly negative or huge.
impl TryFrom<i64> for LifeQuantity {
    type Error = GameError;

    fn try_from(quantity: i64) -> Result<Self, Self::Error> {
        u32::try_from(quantity)
            .map_err(|_| GameError::InvalidLifeQuantity { quantity })
            .and_then(Self::new)
    }
}

/// A priced request for lives, waiting for the player to confirm or cancel it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeOrder {
    pub order_id: Uuid,
    pub quantity: LifeQuantity,
    pub price_cents: u64,
}

impl LifeOrder {
    pub fn quote(quantity: LifeQuantity) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            quantity,
            price_cents: u64::from(quantity.get()) * LIFE_UNIT_PRICE_CENTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PurchaseOutcome {
    Confirmed,
    Cancelled,
}

/// Whoever decides whether a life purchase happened.
pub trait LifeBroker {
    fn request_life_purchase(&mut self, quantity: LifeQuantity) -> PurchaseOutcome;
}

/// Broker backed by the player's own answer to a quote.
#[derive(Debug, Clone, Copy)]
pub struct ClientConfirmation {
    confirmed: bool,
}

impl ClientConfirmation {
    pub fn new(confirmed: bool) -> Self {
        Self { confirmed }
    }
}

impl LifeBroker for ClientConfirmation {
    fn request_life_purchase(&mut self, _quantity: LifeQuantity) -> PurchaseOutcome {
        if self.confirmed {
            PurchaseOutcome::Confirmed
        } else {
            PurchaseOutcome::Cancelled
        }
    }
}
