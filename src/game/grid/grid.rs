use crate::game::types::Position;

/// Square playing field of `tile_count` x `tile_count` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub tile_count: i32,
}

impl Grid {
    pub fn new(tile_count: i32) -> Self {
        Self { tile_count }
    }

    /// True when `pos` lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.tile_count).contains(&pos.x) && (0..self.tile_count).contains(&pos.y)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.tile_count).flat_map(move |y| (0..self.tile_count).map(move |x| Position { x, y }))
    }
}
