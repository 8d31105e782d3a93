use std::collections::VecDeque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside a square board of the
    /// given side length.
    #[must_use]
    pub fn is_within_board(self, board_size: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < board_size && self.y < board_size
    }

    /// Returns this position translated one cell in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Ordered snake body, head-first. Always holds at least one segment.
///
/// The snake itself carries no direction; steering lives in the game state
/// as an explicit committed/buffered pair.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake must have at least one segment");
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Prepends a new head one cell in `direction`; never trims the tail.
    ///
    /// Growth vs. plain movement is the caller's call: a tick drops the tail
    /// afterwards unless food was captured, so eating lengthens the snake by
    /// exactly one segment.
    pub fn advance(&mut self, direction: Direction) {
        let next_head = self.head().stepped(direction);
        self.body.push_front(next_head);
    }

    /// Removes the tail segment (movement without growth).
    pub fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if stepping the head one cell in `direction` would hit
    /// a wall or the body.
    ///
    /// Checked with the tail still in place: the stepped body's non-head
    /// segments are exactly the current body, since the tail only trims
    /// after the collision check (grow first, then conditionally shrink).
    #[must_use]
    pub fn would_collide(&self, direction: Direction, board_size: i32) -> bool {
        let next_head = self.head().stepped(direction);
        !next_head.is_within_board(board_size) || self.occupies(next_head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
