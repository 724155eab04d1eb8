use serde::{Deserialize, Serialize};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Logical grid dimensions in cells.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns true when `position` lies in `[0, width) x [0, height)`.
    #[must_use]
    pub fn in_bounds(self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < i32::from(self.width)
            && position.y < i32::from(self.height)
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the center cell, rounding towards the origin.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }

    /// Iterates every cell row by row.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::{GridSize, Position};

    #[test]
    fn bounds_are_half_open() {
        let grid = GridSize {
            width: 5,
            height: 4,
        };

        assert!(grid.in_bounds(Position::new(0, 0)));
        assert!(grid.in_bounds(Position::new(4, 3)));
        assert!(!grid.in_bounds(Position::new(5, 3)));
        assert!(!grid.in_bounds(Position::new(4, 4)));
        assert!(!grid.in_bounds(Position::new(-1, 0)));
        assert!(!grid.in_bounds(Position::new(0, -1)));
    }

    #[test]
    fn center_of_odd_and_even_grids() {
        let odd = GridSize {
            width: 5,
            height: 5,
        };
        let even = GridSize {
            width: 32,
            height: 32,
        };

        assert_eq!(odd.center(), Position::new(2, 2));
        assert_eq!(even.center(), Position::new(16, 16));
    }

    #[test]
    fn cells_visits_every_position_once() {
        let grid = GridSize {
            width: 3,
            height: 2,
        };
        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(cells.len(), grid.total_cells());
        assert_eq!(cells.first(), Some(&Position::new(0, 0)));
        assert_eq!(cells.last(), Some(&Position::new(2, 1)));
        assert!(cells.iter().all(|cell| grid.in_bounds(*cell)));
    }
}
