use rand::Rng;

use crate::board::{GridSize, Position};
use crate::snake::Snake;

/// Random draws attempted before falling back to scanning for free cells.
pub const MAX_SPAWN_ATTEMPTS: usize = 64;

/// Picks a uniformly random cell that no snake segment occupies.
///
/// Draws random cells first. After [`MAX_SPAWN_ATTEMPTS`] misses it chooses
/// uniformly among the remaining free cells instead. Returns `None` only
/// when the snake covers the whole grid.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    if bounds.total_cells() == 0 || snake.len() >= bounds.total_cells() {
        return None;
    }

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(bounds.width)),
            y: rng.gen_range(0..i32::from(bounds.height)),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let candidates: Vec<Position> = bounds
        .cells()
        .filter(|cell| !snake.occupies(*cell))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::board::{GridSize, Position};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::spawn_position;

    /// Serpentine body covering every cell of `bounds` except `free`.
    fn snake_filling_all_but(bounds: GridSize, free: Position) -> Snake {
        let mut segments = Vec::new();
        for y in 0..i32::from(bounds.height) {
            let row: Vec<i32> = if y % 2 == 0 {
                (0..i32::from(bounds.width)).collect()
            } else {
                (0..i32::from(bounds.width)).rev().collect()
            };
            for x in row {
                let cell = Position { x, y };
                if cell != free {
                    segments.push(cell);
                }
            }
        }
        Snake::from_segments(segments, Direction::Right).expect("board has occupied cells")
    }

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Right,
        )
        .expect("test snake has segments");
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let food_position =
                spawn_position(&mut rng, bounds, &snake).expect("board has free cells");
            assert!(!snake.occupies(food_position));
            assert!(bounds.in_bounds(food_position));
        }
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let bounds = GridSize {
            width: 5,
            height: 5,
        };
        let free = Position { x: 3, y: 4 };
        let snake = snake_filling_all_but(bounds, free);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(spawn_position(&mut rng, bounds, &snake), Some(free));
        }
    }

    #[test]
    fn full_board_yields_no_position() {
        let bounds = GridSize {
            width: 2,
            height: 2,
        };
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
                Position { x: 0, y: 1 },
            ],
            Direction::Down,
        )
        .expect("test snake has segments");
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(spawn_position(&mut rng, bounds, &snake), None);
    }
}
