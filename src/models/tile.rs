use serde::{Deserialize, Serialize};
use std::fmt;

use crate::language::Language;

/// Letter printed on a wildcard tile until it is committed to the board
pub const BLANK: char = ' ';

/// A single letter tile.
///
/// Tiles are values: the rack and the bag hold copies, and a committed wildcard is a new
/// tile produced by [`Tile::designate`], never a mutation of the one in the rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    letter: char,
    value: u32,
    wildcard: bool,
}

impl Tile {
    /// Create a lettered tile worth `value` points
    pub fn new(letter: char, value: u32) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            value,
            wildcard: letter == BLANK,
        }
    }

    /// Create a tile for `letter`, valued by the language table
    pub fn from_language(letter: char, language: &Language) -> Self {
        Self::new(letter, language.value(letter))
    }

    /// An undesignated wildcard
    pub fn blank() -> Self {
        Self {
            letter: BLANK,
            value: 0,
            wildcard: true,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// True for wildcard tiles, designated or not
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// True for a wildcard still carrying the blank marker
    pub fn is_blank(&self) -> bool {
        self.wildcard && self.letter == BLANK
    }

    /// Stamp a wildcard with the letter it stands for. Lettered tiles are returned as-is.
    pub fn designate(self, letter: char) -> Self {
        if !self.is_blank() {
            return self;
        }
        Self {
            letter: letter.to_ascii_uppercase(),
            ..self
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.letter)
    }
}
