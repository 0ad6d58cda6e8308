use std::time::Duration;

use serde::{Serialize, Deserialize};

/// Grid cell coordinates. Signed so a head that left the grid is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Heading of the snake. `Stay` is the resting state after a (re)spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Stay,
}

impl Direction {
    /// Unit delta `(dx, dy)`; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Stay => (0, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Stay => Direction::Stay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundStatus {
    Active,
    Ended,
}

/// Result of a single tick, telling the driver whether to re-arm the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Round still running; next tick is due after `next_in`.
    Continue { next_in: Duration },
    /// This tick used up the last life.
    Ended { final_score: u32 },
    /// The round was already over; nothing happened.
    Inactive,
}

/// Result of a life-grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantOutcome {
    /// Lives added to a running round.
    Added,
    /// Lives added and an ended round restarted from scratch.
    Resumed,
}
