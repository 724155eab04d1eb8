use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::board::{GridSize, Position};
use crate::config::GameConfig;
use crate::food::spawn_position;
use crate::input::{Direction, GameInput};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFull,
}

/// What a single [`Session::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The session is over; nothing changed.
    Idle,
    Moved,
    Ate,
    /// The move was refused and the session ended; the body is unchanged.
    Collided(EndReason),
    /// Food was eaten and no free cell is left for the next one.
    BoardFilled,
}

/// Read-only view of a session for presentation layers.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a Snake,
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    pub bounds: GridSize,
    pub tick_count: u64,
}

impl Snapshot<'_> {
    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.snake.segments()
    }
}

/// Complete game state for one play session.
///
/// Owns the snake, the food cell and the random source used to place food.
/// All mutation goes through [`Session::tick`], [`Session::apply_input`]
/// and [`Session::reset`].
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    config: GameConfig,
    snake: Snake,
    food: Position,
    score: u32,
    tick_count: u64,
    status: GameStatus,
    end_reason: Option<EndReason>,
    requested_direction: Option<Direction>,
    rng: R,
}

impl Session<StdRng> {
    /// Creates a session seeded from OS entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Creates a fresh session that draws food positions from `rng`.
    ///
    /// `config` is expected to have passed [`GameConfig::validate`].
    #[must_use]
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let start = config.start_position();
        let mut session = Self {
            config,
            snake: Snake::new(start, config.start_direction),
            food: start,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            end_reason: None,
            requested_direction: None,
            rng,
        };
        session.reset();
        session
    }

    /// Creates a running session from an explicit snake and food cell.
    ///
    /// Used to set up scenarios and replays mid-game. The caller must pass
    /// an in-bounds body without repeated cells and a free in-bounds food
    /// cell; debug builds assert this.
    #[must_use]
    pub fn from_parts(config: GameConfig, snake: Snake, food: Position, rng: R) -> Self {
        debug_assert!(
            snake.segments().all(|cell| config.grid.in_bounds(*cell)),
            "snake segments must lie inside the grid"
        );
        debug_assert!(
            snake.segments().collect::<HashSet<_>>().len() == snake.len(),
            "snake segments must not repeat"
        );
        debug_assert!(
            config.grid.in_bounds(food) && !snake.occupies(food),
            "food must be a free cell inside the grid"
        );

        Self {
            config,
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Running,
            end_reason: None,
            requested_direction: None,
            rng,
        }
    }

    /// Restores the starting state: one segment at the start cell, the
    /// start direction, zero score and freshly placed food.
    pub fn reset(&mut self) {
        let start = self.config.start_position();
        self.snake = Snake::new(start, self.config.start_direction);
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.end_reason = None;
        self.requested_direction = None;

        match spawn_position(&mut self.rng, self.config.grid, &self.snake) {
            Some(food) => self.food = food,
            None => {
                self.food = start;
                self.end(EndReason::BoardFull);
            }
        }

        info!(
            width = self.config.grid.width,
            height = self.config.grid.height,
            x = start.x,
            y = start.y,
            "session reset"
        );
    }

    /// Buffers a direction for the next tick; the latest request wins.
    ///
    /// Ignored once the session is over. Reversals are not filtered here,
    /// the snake drops them when the tick applies the request.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Running {
            self.requested_direction = Some(direction);
        }
    }

    /// Restarts an ended session. Does nothing while running.
    pub fn restart(&mut self) {
        if self.status == GameStatus::Over {
            self.reset();
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.request_direction(direction),
            GameInput::Restart => self.restart(),
            GameInput::Quit | GameInput::Unbound => {}
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;

        if let Some(direction) = self.requested_direction.take() {
            self.snake.set_direction(direction);
        }

        let next_head = self.snake.next_head();

        if self.snake.collides_with_wall(next_head, self.config.grid) {
            return self.collide(EndReason::WallCollision);
        }

        if self.snake.collides_with_self(next_head) {
            return self.collide(EndReason::SelfCollision);
        }

        let ate_food = next_head == self.food;
        self.snake.advance(ate_food);

        if !ate_food {
            return TickOutcome::Moved;
        }

        self.score = self.score.saturating_add(self.config.points_per_food);
        debug!(
            score = self.score,
            length = self.snake.len(),
            tick = self.tick_count,
            "food eaten"
        );

        match spawn_position(&mut self.rng, self.config.grid, &self.snake) {
            Some(food) => {
                self.food = food;
                TickOutcome::Ate
            }
            None => {
                self.end(EndReason::BoardFull);
                TickOutcome::BoardFilled
            }
        }
    }

    fn collide(&mut self, reason: EndReason) -> TickOutcome {
        self.end(reason);
        TickOutcome::Collided(reason)
    }

    fn end(&mut self, reason: EndReason) {
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
        self.requested_direction = None;
        info!(
            ?reason,
            score = self.score,
            length = self.snake.len(),
            tick = self.tick_count,
            "game over"
        );
    }

    /// Returns a read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            direction: self.snake.direction(),
            food: self.food,
            score: self.score,
            status: self.status,
            end_reason: self.end_reason,
            bounds: self.config.grid,
            tick_count: self.tick_count,
        }
    }

    /// Returns the snake.
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Returns the current food cell.
    #[must_use]
    pub fn food(&self) -> Position {
        self.food
    }

    /// Returns the score so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns whether the session is running or over.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns why the session ended, if it has.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Returns the number of ticks since the last reset.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the grid size.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    /// Returns the configuration the session was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
