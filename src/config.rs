use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::GridInt;

/// Construction parameters for a game. Board dimensions are given in pixels
/// together with a cell size; the grid dimensions are derived by floor
/// division, so a 1000x800 board with 40px cells yields a 25x20 grid.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    pub board_width: GridInt,
    pub board_height: GridInt,
    pub cell_size: GridInt,
    pub step_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            board_width: 1000,
            board_height: 800,
            cell_size: 40,
            step_interval: Duration::from_millis(50),
        }
    }
}

impl Config {
    /// Grid dimensions as (rows, cols). Both must come out at 3 or more,
    /// otherwise there is no interior left inside the one-cell border ring.
    pub fn dimensions(&self) -> Result<(GridInt, GridInt), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let rows = self.board_height / self.cell_size;
        let cols = self.board_width / self.cell_size;

        if rows < 3 || cols < 3 {
            Err(ConfigError::BoardTooSmall { rows, cols })
        } else {
            Ok((rows, cols))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroCellSize,
    BoardTooSmall { rows: GridInt, cols: GridInt },
    TerminalTooSmall { need: (GridInt, GridInt), have: (GridInt, GridInt) },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCellSize => write!(f, "cell size must be non-zero"),
            ConfigError::BoardTooSmall { rows, cols } => write!(
                f,
                "board of {}x{} cells is too small, need at least 3x3",
                cols, rows
            ),
            ConfigError::TerminalTooSmall { need, have } => write!(
                f,
                "terminal is {}x{} but the board needs {}x{}",
                have.0, have.1, need.0, need.1
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_dimensions() {
        let (rows, cols) = Config::default().dimensions().unwrap();
        assert_eq!(rows, 20);
        assert_eq!(cols, 25);
    }

    #[test]
    fn dimensions_floor_divide() {
        let config = Config {
            board_width: 130,
            board_height: 170,
            cell_size: 40,
            ..Config::default()
        };
        assert_eq!(config.dimensions().unwrap(), (4, 3));
    }

    #[test]
    fn board_too_small_is_rejected() {
        let config = Config {
            board_width: 80,
            board_height: 800,
            cell_size: 40,
            ..Config::default()
        };
        assert_eq!(
            config.dimensions(),
            Err(ConfigError::BoardTooSmall { rows: 20, cols: 2 })
        );
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let config = Config {
            cell_size: 0,
            ..Config::default()
        };
        assert_eq!(config.dimensions(), Err(ConfigError::ZeroCellSize));
    }
}
