//! Snake entity.
//!
//! The body is stored head-first; moving pushes a new head and, unless the
//! snake grows, drops the tail.

use std::collections::VecDeque;

use crate::game::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// A one-segment snake at `start`.
    pub fn new(start: Position) -> Self {
        Self { body: VecDeque::from([start]) }
    }

    pub fn head(&self) -> Position {
        // Body is never empty: it starts with one segment and `advance` pushes before it pops.
        self.body[0]
    }


    /// Segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// True when the head overlaps any other segment.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Push `new_head`; keep the tail only when `grow` is set.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}
