use std::time::Duration;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{Config, ConfigError};
use crate::grid::{CellKind, Grid};
use crate::snake::{Direction, SnakeBody};
use crate::Coords;

/// The simulation: owns the board and the snake, gates grid-steps behind a
/// fixed interval, and handles apples, scoring and restarts. Everything else
/// (input, drawing, the frame clock) lives outside and talks to it through
/// `change_direction`, `restart`, `update` and `snapshot`.
pub struct Arena {
    grid: Grid,
    snake: SnakeBody,
    score: u32,
    step_interval: Duration,
    elapsed: Duration,
    last_step: Duration,
    rng: Pcg32,
}

/// Read-only view of the simulation for rendering.
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub snake: &'a SnakeBody,
    pub score: u32,
}

impl Arena {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Self::build(config, Pcg32::from_entropy())
    }

    /// Same as `new` but with a fixed RNG seed, so spawns and apple placement
    /// replay identically. Used by the tests.
    pub fn with_seed(config: &Config, seed: u64) -> Result<Self, ConfigError> {
        Self::build(config, Pcg32::seed_from_u64(seed))
    }

    fn build(config: &Config, mut rng: Pcg32) -> Result<Self, ConfigError> {
        let (rows, cols) = config.dimensions()?;
        let mut grid = Grid::new(rows, cols)?;

        let snake = SnakeBody::new(random_interior(&mut rng, &grid));
        let apple = random_interior(&mut rng, &grid);
        grid.place_apple(apple);

        info!(
            "arena {}x{}, snake at {:?}, apple at {:?}, step every {:?}",
            cols,
            rows,
            snake.head().pos,
            apple,
            config.step_interval
        );

        Ok(Arena {
            grid,
            snake,
            score: 0,
            step_interval: config.step_interval,
            elapsed: Duration::ZERO,
            last_step: Duration::ZERO,
            rng,
        })
    }

    /// Resets the score and respawns the snake somewhere new. The board is
    /// left alone: whatever apple is out there stays.
    pub fn restart(&mut self) {
        self.score = 0;
        self.snake = SnakeBody::new(random_interior(&mut self.rng, &self.grid));
        info!("restart, snake respawned at {:?}", self.snake.head().pos);
    }

    pub fn change_direction(&mut self, dir: Direction) {
        self.snake.change_direction(dir);
    }

    /// Accumulates frame time and performs at most one grid-step once the
    /// step interval has elapsed. Most calls at typical frame rates return
    /// without doing anything; overshooting the interval still yields a
    /// single step, never a burst of catch-up steps.
    pub fn update(&mut self, dt: Duration) {
        self.elapsed += dt;
        if self.elapsed - self.last_step < self.step_interval {
            return;
        }
        self.last_step = self.elapsed;

        // Apple detection uses the head's position before it moves.
        let head = self.snake.head().pos;
        let ate_apple = self.grid.kind_at(head) == CellKind::Apple;

        if ate_apple {
            self.score += 1;
            self.grid.clear(head);
            let apple = random_interior(&mut self.rng, &self.grid);
            self.grid.place_apple(apple);
            debug!("apple eaten at {:?}, score {}, next at {:?}", head, self.score, apple);
        }

        self.snake.step(ate_apple, &self.grid);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            snake: &self.snake,
            score: self.score,
        }
    }
}

// Uniform over the whole interior rectangle. Deliberately does not exclude
// cells occupied by the snake, nor the existing apple cell.
fn random_interior(rng: &mut Pcg32, grid: &Grid) -> Coords {
    let b = grid.interior_bounds();
    (
        rng.gen_range(b.min_col..=b.max_col),
        rng.gen_range(b.min_row..=b.max_row),
    )
}
