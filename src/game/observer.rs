//! Outbound notifications from the engine.
//!
//! The engine never draws or displays anything itself; whoever drives it passes
//! an observer that turns these calls into pixels, terminal output or network
//! messages.

use crate::game::entities::Snake;
use crate::game::types::Position;

pub trait GameObserver {
    /// Paint the current frame.
    fn render(&mut self, snake: &Snake, food: Position);

    fn on_score_changed(&mut self, _score: u32) {}

    fn on_lives_changed(&mut self, _lives: u32) {}

    /// Fired once, on the tick that uses up the last life.
    fn on_round_ended(&mut self, _final_score: u32) {}
}
