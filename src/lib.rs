pub mod arena;
pub mod config;
pub mod game;
pub mod grid;
pub mod snake;
pub mod term;

pub type GridInt = u16;
pub type Coords = (GridInt, GridInt);
