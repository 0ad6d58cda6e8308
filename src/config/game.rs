/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid size, tick
/// interval, scoring and lives, plus the `GameConfig` built from them.
use std::time::Duration;

use crate::game::error::GameError;
use crate::game::types::Position;

/// Number of cells along each side of the square grid (400px canvas, 20px cells).
pub const TILE_COUNT: i32 = 20;

/// Largest accepted grid side.
pub const MAX_TILE_COUNT: i32 = 1_000;

/// Cell where the snake (re)spawns.
pub const START_POSITION: Position = Position { x: 10, y: 10 };

/// Lives at the start of a game session.
pub const INITIAL_LIVES: u32 = 3;

/// Score gained per food eaten.
pub const SCORE_PER_FOOD: u32 = 10;

/// Tick interval at the start of a round, in milliseconds.
pub const INITIAL_TICK_MS: u64 = 100;

/// How much faster the game gets per food eaten, in milliseconds.
pub const TICK_STEP_MS: u64 = 2;

/// Fastest allowed tick interval, in milliseconds.
pub const MIN_TICK_MS: u64 = 50;

/// Smallest number of lives that can be bought at once.
pub const MIN_LIFE_PURCHASE: u32 = 1;

/// Largest number of lives that can be bought at once.
pub const MAX_LIFE_PURCHASE: u32 = 100;

/// Price of a single life, in cents.
pub const LIFE_UNIT_PRICE_CENTS: u64 = 1;

/// Tunable gameplay parameters for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tile_count: i32,
    pub start: Position,
    pub initial_lives: u32,
    pub score_per_food: u32,
    pub initial_tick: Duration,
    pub tick_step: Duration,
    pub min_tick: Duration,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_count: TILE_COUNT,
            start: START_POSITION,
            initial_lives: INITIAL_LIVES,
            score_per_food: SCORE_PER_FOOD,
            initial_tick: Duration::from_millis(INITIAL_TICK_MS),
            tick_step: Duration::from_millis(TICK_STEP_MS),
            min_tick: Duration::from_millis(MIN_TICK_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Same defaults with a fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(1..=MAX_TILE_COUNT).contains(&self.tile_count) {
            return Err(GameError::InvalidConfig(format!(
                "tile_count must be between 1 and {}, got {}",
                MAX_TILE_COUNT, self.tile_count
            )));
        }
        let in_grid = |v: i32| (0..self.tile_count).contains(&v);
        if !in_grid(self.start.x) || !in_grid(self.start.y) {
            return Err(GameError::InvalidConfig(format!(
                "start position ({}, {}) is outside a {}x{} grid",
                self.start.x, self.start.y, self.tile_count, self.tile_count
            )));
        }
        if self.initial_lives == 0 {
            return Err(GameError::InvalidConfig("initial_lives must be at least 1".to_string()));
        }
        if self.min_tick.is_zero() || self.min_tick > self.initial_tick {
            return Err(GameError::InvalidConfig(format!(
                "min_tick {:?} must be non-zero and not above initial_tick {:?}",
                self.min_tick, self.initial_tick
            )));
        }
        Ok(())
    }
}
