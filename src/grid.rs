use crate::config::ConfigError;
use crate::{Coords, GridInt};

pub const BORDER_SIZE: GridInt = 1;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellKind {
    Border,
    Empty,
    Apple,
}

/// Inclusive coordinate ranges of the cells inside the border ring.
#[derive(Copy, Clone, Debug)]
pub struct InteriorBounds {
    pub min_col: GridInt,
    pub max_col: GridInt,
    pub min_row: GridInt,
    pub max_row: GridInt,
}

/// The game board. Dimensions are fixed after construction; the outermost
/// ring of cells is always `Border`, everything else starts `Empty` and only
/// ever toggles between `Empty` and `Apple`.
pub struct Grid {
    rows: GridInt,
    cols: GridInt,
    cells: Vec<CellKind>,
}

impl Grid {
    pub fn new(rows: GridInt, cols: GridInt) -> Result<Self, ConfigError> {
        if rows < 3 || cols < 3 {
            return Err(ConfigError::BoardTooSmall { rows, cols });
        }

        let mut cells = Vec::with_capacity(rows as usize * cols as usize);
        for row in 0..rows {
            for col in 0..cols {
                let kind = if row == 0 || col == 0 || row == rows - 1 || col == cols - 1 {
                    CellKind::Border
                } else {
                    CellKind::Empty
                };
                cells.push(kind);
            }
        }

        Ok(Grid { rows, cols, cells })
    }

    pub fn rows(&self) -> GridInt {
        self.rows
    }

    pub fn cols(&self) -> GridInt {
        self.cols
    }

    pub fn kind_at(&self, pos: Coords) -> CellKind {
        self.cells[self.index(pos)]
    }

    /// Marks an interior cell as holding the apple. The caller picks the
    /// cell; an `Empty` precondition violation is a caller bug.
    pub fn place_apple(&mut self, pos: Coords) {
        let idx = self.index(pos);
        self.cells[idx] = CellKind::Apple;
    }

    pub fn clear(&mut self, pos: Coords) {
        let idx = self.index(pos);
        self.cells[idx] = CellKind::Empty;
    }

    pub fn interior_bounds(&self) -> InteriorBounds {
        InteriorBounds {
            min_col: BORDER_SIZE,
            max_col: self.cols - 1 - BORDER_SIZE,
            min_row: BORDER_SIZE,
            max_row: self.rows - 1 - BORDER_SIZE,
        }
    }

    fn index(&self, (col, row): Coords) -> usize {
        self.cols as usize * row as usize + col as usize
    }
}
