//! Food entity logic.
//!
//! Food is a single cell, resampled every time it is eaten or the snake respawns.

use rand::Rng;
use rand::seq::IteratorRandom;
use log::warn;

use crate::game::entities::Snake;
use crate::game::grid::Grid;
use crate::game::types::Position;

/// Pick a uniformly random cell not covered by the snake.
/// Falls back to any cell when the snake fills the whole grid.
pub fn spawn_food<R: Rng>(grid: &Grid, snake: &Snake, rng: &mut R) -> Position {
    let free = grid.cells().filter(|pos| !snake.occupies(*pos));

    match free.choose(&mut *rng) {
        Some(pos) => pos,
        None => {
            warn!("[Food] No free tile left, food placed under the snake");
            Position::new(
                rng.random_range(0..grid.tile_count),
                rng.random_range(0..grid.tile_count),
            )
        }
    }
}
