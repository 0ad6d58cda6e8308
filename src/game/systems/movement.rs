//! Snake movement system.
//!
//! This module handles steering and moving the snake on the grid.

use log::debug;

use crate::game::types::{Direction, RoundStatus};
use crate::game::state::GameState;

/// Queue a new heading for the next tick.
///
/// Returns false, leaving the state untouched, when the round is over, the
/// intent is `Stay`, or the intent would turn the snake back onto its own neck.
/// The check is against the heading actually travelled last tick, so two quick
/// intents between ticks cannot chain into a reversal.
pub fn change_direction(game_state: &mut GameState, intent: Direction) -> bool {
    if game_state.status != RoundStatus::Active || intent == Direction::Stay {
        return false;
    }
    if intent == game_state.direction.opposite() {
        debug!("[Movement] Ignored reversing intent {:?} while heading {:?}", intent, game_state.direction);
        return false;
    }
    game_state.pending_direction = intent;
    true
}

/// Move the snake one cell along the pending direction.
/// Returns true when the new head landed on the food (the snake grew).
pub fn move_snake(game_state: &mut GameState) -> bool {
    game_state.direction = game_state.pending_direction;
    let new_head = game_state.snake.head().step(game_state.direction);
    let ate = new_head == game_state.food;
    game_state.snake.advance(new_head, ate);
    ate
}
