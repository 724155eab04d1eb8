use std::collections::VecDeque;

use crate::board::{GridSize, Position};
use crate::input::{direction_change_is_valid, Direction};

/// Snake body, heading and deferred growth.
///
/// The body is never empty. Index 0 is the head; [`Snake::advance`] is the
/// only method that changes which cells are occupied.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    grow_pending: bool,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            grow_pending: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
            direction,
            grow_pending: false,
        })
    }

    /// Changes heading unless `direction` would reverse into the neck.
    ///
    /// Reversals are a normal input and are dropped without reporting.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.direction = direction;
        }
    }

    /// Returns the cell the head would occupy after the next move.
    #[must_use]
    pub fn next_head(&self) -> Position {
        let head = self.head();
        let (dx, dy) = self.direction.delta();
        Position {
            x: head.x + dx,
            y: head.y + dy,
        }
    }

    /// Queues growth on the next movement.
    pub fn grow_next(&mut self) {
        self.grow_pending = true;
    }

    /// Moves one cell in the current heading.
    ///
    /// The tail is kept when `grow` is set or growth was queued with
    /// [`Snake::grow_next`]; either way the pending flag is cleared.
    pub fn advance(&mut self, grow: bool) {
        let next_head = self.next_head();
        self.body.push_front(next_head);

        if !(grow || self.grow_pending) {
            let _ = self.body.pop_back();
        }
        self.grow_pending = false;
    }

    /// Returns true when `cell` is any current segment, tail included.
    ///
    /// Call before [`Snake::advance`]: the tail that is about to move away
    /// still counts as occupied.
    #[must_use]
    pub fn collides_with_self(&self, cell: Position) -> bool {
        self.occupies(cell)
    }

    /// Returns true when `cell` lies outside the grid.
    #[must_use]
    pub fn collides_with_wall(&self, cell: Position, bounds: GridSize) -> bool {
        !bounds.in_bounds(cell)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current heading.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns whether the next `advance` keeps the tail regardless of input.
    #[must_use]
    pub fn grow_pending(&self) -> bool {
        self.grow_pending
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
