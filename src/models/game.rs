use serde::{Deserialize, Serialize};
use std::fmt;

use super::Tile;

/// Board width and height
pub const BOARD_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    /// Column, 0 at the left edge
    pub x: usize,
    /// Row, 0 at the top edge
    pub y: usize,
}

impl Position {
    /// The centre square every first move must cover
    pub const CENTER: Position = Position { x: 7, y: 7 };

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Move `steps` squares forward along `direction`. Saturates, so a position that
    /// would run past `usize::MAX` stays off the board.
    pub fn offset(&self, direction: Direction, steps: usize) -> Position {
        match direction {
            Direction::Horizontal => Position::new(self.x.saturating_add(steps), self.y),
            Direction::Vertical => Position::new(self.x, self.y.saturating_add(steps)),
        }
    }

    /// The square one step back along `direction`, if it is on the board
    pub fn before(&self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Horizontal => self.x.checked_sub(1).map(|x| Position::new(x, self.y)),
            Direction::Vertical => self.y.checked_sub(1).map(|y| Position::new(self.x, y)),
        }
    }

    /// The square one step forward along `direction`, if it is on the board
    pub fn after(&self, direction: Direction) -> Option<Position> {
        let next = self.offset(direction, 1);
        next.in_bounds().then_some(next)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
}

impl Direction {
    pub fn perpendicular(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum Multiplier {
    #[serde(rename = "DL")]
    DoubleLetter,
    #[serde(rename = "TL")]
    TripleLetter,
    #[serde(rename = "DW")]
    DoubleWord,
    #[serde(rename = "TW")]
    TripleWord,
}

impl Multiplier {
    pub fn factor(self) -> u32 {
        match self {
            Multiplier::DoubleLetter | Multiplier::DoubleWord => 2,
            Multiplier::TripleLetter | Multiplier::TripleWord => 3,
        }
    }

    /// Word multipliers scale the whole word, letter multipliers a single tile
    pub fn is_word(self) -> bool {
        matches!(self, Multiplier::DoubleWord | Multiplier::TripleWord)
    }

    pub fn code(self) -> &'static str {
        match self {
            Multiplier::DoubleLetter => "DL",
            Multiplier::TripleLetter => "TL",
            Multiplier::DoubleWord => "DW",
            Multiplier::TripleWord => "TW",
        }
    }
}

/// One board cell. The multiplier is fixed; the occupant is set once and never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Square {
    multiplier: Option<Multiplier>,
    tile: Option<Tile>,
}

impl Square {
    pub fn new(multiplier: Option<Multiplier>) -> Self {
        Self {
            multiplier,
            tile: None,
        }
    }

    pub fn multiplier(&self) -> Option<Multiplier> {
        self.multiplier
    }

    pub fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.tile.is_some()
    }

    /// Factor applied to a tile newly placed here (1 on plain and word squares)
    pub fn letter_factor(&self) -> u32 {
        match self.multiplier {
            Some(m) if !m.is_word() => m.factor(),
            _ => 1,
        }
    }

    /// Factor applied to every word running through a tile newly placed here
    pub fn word_factor(&self) -> u32 {
        match self.multiplier {
            Some(m) if m.is_word() => m.factor(),
            _ => 1,
        }
    }

    /// Only the board may fill a square, and only an empty one.
    pub(crate) fn occupy(&mut self, tile: Tile) -> bool {
        if self.tile.is_some() {
            return false;
        }
        self.tile = Some(tile);
        true
    }
}
