pub mod game;
pub mod tile;

pub use game::{
    // Coordinates
    Direction, Position, BOARD_SIZE,
    // Board cells
    Multiplier, Square,
};
pub use tile::{Tile, BLANK};
