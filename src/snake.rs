use crate::grid::{Grid, InteriorBounds};
use crate::{Coords, GridInt};

use Direction::*;

/// Grid directions; Y grows upward, the renderer flips it for the screen.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, 1),
            Down => (0, -1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Segment {
    pub pos: Coords,
    pub dir: Direction,
}

/// The snake: one head segment plus an ordered chain of body segments,
/// oldest first. There is no self-collision anywhere in the game; the body
/// may freely overlap itself after a reversal.
pub struct SnakeBody {
    head: Segment,
    body: Vec<Segment>,
}

impl SnakeBody {
    /// A freshly spawned snake: head only, facing up.
    pub fn new(pos: Coords) -> Self {
        SnakeBody {
            head: Segment { pos, dir: Up },
            body: vec![],
        }
    }

    pub fn head(&self) -> &Segment {
        &self.head
    }

    pub fn body(&self) -> &[Segment] {
        &self.body
    }

    /// Takes effect on the very next step. Reversing 180 degrees is allowed
    /// and simply runs the head back through its own trail.
    pub fn change_direction(&mut self, dir: Direction) {
        self.head.dir = dir;
    }

    /// Advances the snake by one grid cell.
    ///
    /// On a growth tick a new segment is appended at the cell the head is
    /// about to vacate and the body otherwise stays put. On a normal tick
    /// each body segment moves one cell in its own direction and then adopts
    /// the direction of its successor (the next segment, or the head for the
    /// last one), so the chain follows the head's turns with a one-tick lag
    /// per segment. The head always moves in its own direction last.
    pub fn step(&mut self, ate_apple: bool, grid: &Grid) {
        let bounds = grid.interior_bounds();

        if ate_apple {
            self.body.push(self.head);
        } else if !self.body.is_empty() {
            let last = self.body.len() - 1;
            for i in 0..self.body.len() {
                let next_dir = if i == last {
                    self.head.dir
                } else {
                    self.body[i + 1].dir
                };
                advance(&mut self.body[i], next_dir, &bounds);
            }
        }

        let head_dir = self.head.dir;
        advance(&mut self.head, head_dir, &bounds);
    }
}

/// Moves a segment one cell in its current direction, wraps the result back
/// into the interior, then assigns the direction it will move in next tick.
fn advance(seg: &mut Segment, next_dir: Direction, bounds: &InteriorBounds) {
    let (dx, dy) = seg.dir.delta();
    let col = wrap(seg.pos.0 as i32 + dx, bounds.min_col, bounds.max_col);
    let row = wrap(seg.pos.1 as i32 + dy, bounds.min_row, bounds.max_row);

    seg.pos = (col, row);
    seg.dir = next_dir;
}

// Toroidal clamp: overshooting one edge of the interior reappears at the
// opposite edge. The border ring is never a reachable coordinate.
fn wrap(value: i32, lo: GridInt, hi: GridInt) -> GridInt {
    if value > hi as i32 {
        lo
    } else if value < lo as i32 {
        hi
    } else {
        value as GridInt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_10x10() -> Grid {
        Grid::new(10, 10).unwrap()
    }

    #[test]
    fn plain_step_moves_the_head_one_cell_up() {
        let grid = grid_10x10();
        let mut snake = SnakeBody::new((4, 4));

        snake.step(false, &grid);

        assert_eq!(snake.head().pos, (4, 5));
        assert_eq!(snake.head().dir, Up);
        assert!(snake.body().is_empty());
    }

    #[test]
    fn growth_appends_at_the_vacated_head_cell() {
        let grid = grid_10x10();
        let mut snake = SnakeBody::new((4, 4));

        snake.step(true, &grid);

        assert_eq!(snake.head().pos, (4, 5));
        assert_eq!(snake.body(), &[Segment { pos: (4, 4), dir: Up }]);
    }

    #[test]
    fn body_stays_put_on_a_growth_tick() {
        let grid = grid_10x10();
        let mut snake = SnakeBody::new((4, 4));

        snake.step(true, &grid);
        snake.step(true, &grid);

        // First appended segment did not move while the second was added.
        assert_eq!(snake.body()[0].pos, (4, 4));
        assert_eq!(snake.body()[1].pos, (4, 5));
        assert_eq!(snake.head().pos, (4, 6));
    }

    #[test]
    fn chain_follows_the_head_through_a_turn() {
        let grid = grid_10x10();
        let mut snake = SnakeBody::new((4, 4));

        snake.step(true, &grid); // body [(4,4) Up], head (4,5)
        snake.step(true, &grid); // body [(4,4) Up, (4,5) Up], head (4,6)
        snake.change_direction(Right);
        snake.step(false, &grid);

        // Each segment moved in its own old direction and now faces the way
        // its successor was facing.
        assert_eq!(snake.body()[0], Segment { pos: (4, 5), dir: Up });
        assert_eq!(snake.body()[1], Segment { pos: (4, 6), dir: Right });
        assert_eq!(*snake.head(), Segment { pos: (5, 6), dir: Right });

        // The turn reaches the oldest segment one tick later.
        snake.step(false, &grid);
        assert_eq!(snake.body()[0], Segment { pos: (4, 6), dir: Right });
        assert_eq!(snake.body()[1], Segment { pos: (5, 6), dir: Right });
        assert_eq!(snake.head().pos, (6, 6));
    }

    #[test]
    fn every_segment_lands_where_its_successor_was() {
        let grid = grid_10x10();
        let mut snake = SnakeBody::new((5, 5));

        for dir in [Right, Right, Up, Left] {
            snake.change_direction(dir);
            snake.step(true, &grid);
        }

        let old_body: Vec<Segment> = snake.body().to_vec();
        let old_head = *snake.head();
        snake.step(false, &grid);

        for (i, seg) in snake.body().iter().enumerate() {
            let successor = old_body.get(i + 1).unwrap_or(&old_head);
            assert_eq!(seg.pos, successor.pos, "segment {}", i);
        }
    }

    #[test]
    fn wraps_around_every_edge() {
        let grid = grid_10x10(); // interior 1..=8 on both axes
        let mut snake = SnakeBody::new((8, 8));

        snake.step(false, &grid); // up past the top
        assert_eq!(snake.head().pos, (8, 1));

        snake.change_direction(Right);
        snake.step(false, &grid); // right past the edge
        assert_eq!(snake.head().pos, (1, 1));

        snake.change_direction(Down);
        snake.step(false, &grid);
        assert_eq!(snake.head().pos, (1, 8));

        snake.change_direction(Left);
        snake.step(false, &grid);
        assert_eq!(snake.head().pos, (8, 8));
    }

    #[test]
    fn reversal_is_permitted() {
        let grid = grid_10x10();
        let mut snake = SnakeBody::new((4, 4));

        snake.step(true, &grid);
        snake.step(false, &grid); // head (4,6), body [(4,5)]

        snake.change_direction(Down);
        snake.step(false, &grid);

        // The head walks back over its own trail; no collision exists.
        assert_eq!(snake.head().pos, (4, 5));
        assert_eq!(snake.body()[0].pos, (4, 6));
    }

    #[test]
    fn segments_never_leave_the_interior() {
        let grid = grid_10x10();
        let mut snake = SnakeBody::new((1, 1));
        let b = grid.interior_bounds();

        let script = [Up, Up, Left, Left, Down, Right, Down, Down, Right, Up];
        for (tick, dir) in script.iter().cycle().take(200).enumerate() {
            snake.change_direction(*dir);
            snake.step(tick % 3 == 0, &grid);

            for seg in std::iter::once(snake.head()).chain(snake.body()) {
                let (col, row) = seg.pos;
                assert!(col >= b.min_col && col <= b.max_col, "col {} at tick {}", col, tick);
                assert!(row >= b.min_row && row <= b.max_row, "row {} at tick {}", row, tick);
            }
        }
    }
}
