use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Direction, Multiplier, Position, Square, Tile, BOARD_SIZE};

/// Classic premium square layout, one string per row.
/// `T` triple word, `D` double word, `t` triple letter, `d` double letter.
const LAYOUT: [&str; BOARD_SIZE] = [
    "T..d...T...d..T",
    ".D...t...t...D.",
    "..D...d.d...D..",
    "d..D...d...D..d",
    "....D.....D....",
    ".t...t...t...t.",
    "..d...d.d...d..",
    "T..d...D...d..T",
    "..d...d.d...d..",
    ".t...t...t...t.",
    "....D.....D....",
    "d..D...d...D..d",
    "..D...d.d...D..",
    ".D...t...t...D.",
    "T..d...T...d..T",
];

fn layout_multiplier(code: u8) -> Option<Multiplier> {
    match code {
        b'T' => Some(Multiplier::TripleWord),
        b'D' => Some(Multiplier::DoubleWord),
        b't' => Some(Multiplier::TripleLetter),
        b'd' => Some(Multiplier::DoubleLetter),
        _ => None,
    }
}

/// The 15x15 playing surface, stored row-major and indexed by (x, y)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with the classic layout
    pub fn new() -> Self {
        let mut squares = [[Square::default(); BOARD_SIZE]; BOARD_SIZE];

        for (y, row) in LAYOUT.iter().enumerate() {
            for (x, code) in row.bytes().enumerate() {
                squares[y][x] = Square::new(layout_multiplier(code));
            }
        }

        Self { squares }
    }

    /// The square at `pos`, or `None` off the board
    pub fn square(&self, pos: Position) -> Option<&Square> {
        self.squares.get(pos.y).and_then(|row| row.get(pos.x))
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.square(pos).and_then(Square::tile)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.tile(pos).is_some()
    }

    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|square| square.is_occupied())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Put a tile on an empty square. Returns false if the square is off the board or taken.
    pub(crate) fn place(&mut self, pos: Position, tile: Tile) -> bool {
        match self.squares.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
            Some(square) => square.occupy(tile),
            None => false,
        }
    }

    /// Occupied squares walking away from `pos` one step at a time, nearest first.
    /// Stops at the first empty square or the edge.
    fn walk(&self, pos: Position, dx: isize, dy: isize) -> Vec<&Tile> {
        let mut tiles = Vec::new();
        let (mut x, mut y) = (pos.x, pos.y);

        loop {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                break;
            };
            match self.tile(Position::new(nx, ny)) {
                Some(tile) => tiles.push(tile),
                None => break,
            }
            (x, y) = (nx, ny);
        }

        tiles
    }

    fn letters(tiles: &[&Tile]) -> String {
        tiles.iter().map(|tile| tile.letter()).collect()
    }

    /// Tiles directly left of `pos`, in reading order
    pub fn left_tiles(&self, pos: Position) -> Vec<&Tile> {
        let mut tiles = self.walk(pos, -1, 0);
        tiles.reverse();
        tiles
    }

    /// Tiles directly right of `pos`, in reading order
    pub fn right_tiles(&self, pos: Position) -> Vec<&Tile> {
        self.walk(pos, 1, 0)
    }

    /// Tiles directly above `pos`, in reading order
    pub fn up_tiles(&self, pos: Position) -> Vec<&Tile> {
        let mut tiles = self.walk(pos, 0, -1);
        tiles.reverse();
        tiles
    }

    /// Tiles directly below `pos`, in reading order
    pub fn down_tiles(&self, pos: Position) -> Vec<&Tile> {
        self.walk(pos, 0, 1)
    }

    pub fn left_word(&self, pos: Position) -> String {
        Self::letters(&self.left_tiles(pos))
    }

    pub fn right_word(&self, pos: Position) -> String {
        Self::letters(&self.right_tiles(pos))
    }

    pub fn up_word(&self, pos: Position) -> String {
        Self::letters(&self.up_tiles(pos))
    }

    pub fn down_word(&self, pos: Position) -> String {
        Self::letters(&self.down_tiles(pos))
    }

    /// Tiles leading up to `pos` along `direction` (left or up)
    pub fn tiles_before(&self, pos: Position, direction: Direction) -> Vec<&Tile> {
        match direction {
            Direction::Horizontal => self.left_tiles(pos),
            Direction::Vertical => self.up_tiles(pos),
        }
    }

    /// Tiles following `pos` along `direction` (right or down)
    pub fn tiles_after(&self, pos: Position, direction: Direction) -> Vec<&Tile> {
        match direction {
            Direction::Horizontal => self.right_tiles(pos),
            Direction::Vertical => self.down_tiles(pos),
        }
    }

    pub fn word_before(&self, pos: Position, direction: Direction) -> String {
        Self::letters(&self.tiles_before(pos, direction))
    }

    pub fn word_after(&self, pos: Position, direction: Direction) -> String {
        Self::letters(&self.tiles_after(pos, direction))
    }

    /// Serializable view of every square for renderers
    pub fn snapshot(&self) -> BoardSnapshot {
        let rows = self
            .squares
            .iter()
            .map(|row| {
                row.iter()
                    .map(|square| CellView {
                        letter: square.tile().map(Tile::letter),
                        value: square.tile().map(Tile::value),
                        wildcard: square.tile().is_some_and(Tile::is_wildcard),
                        multiplier: square.multiplier(),
                    })
                    .collect()
            })
            .collect();

        BoardSnapshot { rows }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub letter: Option<char>,
    pub value: Option<u32>,
    pub multiplier: Option<Multiplier>,
    pub wildcard: bool,
}

/// Board contents indexed `rows[y][x]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: Vec<Vec<CellView>>,
}

impl fmt::Display for Board {
    /// Plain-text grid with coordinates. Empty squares show their premium code,
    /// committed wildcards are lower case.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..BOARD_SIZE {
            write!(f, "{:>3}", x)?;
        }
        writeln!(f)?;

        for (y, row) in self.squares.iter().enumerate() {
            write!(f, "{:>3}", y)?;
            for square in row {
                let cell = match (square.tile(), square.multiplier()) {
                    (Some(tile), _) if tile.is_wildcard() => {
                        tile.letter().to_ascii_lowercase().to_string()
                    }
                    (Some(tile), _) => tile.letter().to_string(),
                    (None, Some(multiplier)) => multiplier.code().to_string(),
                    (None, None) => ".".to_string(),
                };
                write!(f, "{:>3}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
