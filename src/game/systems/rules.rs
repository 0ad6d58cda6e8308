use std::time::Duration;

use crate::game::entities::Snake;
use crate::game::grid::Grid;
use crate::game::state::GameState;

/// Why a tick cost a life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Terminal check on the snake's head after it moved.
pub fn detect_collision(grid: &Grid, snake: &Snake) -> Option<Collision> {
    if !grid.contains(snake.head()) {
        Some(Collision::Wall)
    } else if snake.bites_itself() {
        Some(Collision::SelfBite)
    } else {
        None
    }
}

/// Interval after one more food: `step` faster, never below `min`.
pub fn next_tick_interval(current: Duration, step: Duration, min: Duration) -> Duration {
    current.saturating_sub(step).max(min)
}

/// Reward a meal: new food, more score, faster ticks.
pub fn apply_food_rules(game_state: &mut GameState) {
    let config = game_state.config();
    let (reward, step, min) = (config.score_per_food, config.tick_step, config.min_tick);

    game_state.place_food();
    game_state.score += reward;
    game_state.tick_interval = next_tick_interval(game_state.tick_interval, step, min);
}
