use crate::models::{Square, Tile};

use super::rack::RACK_SIZE;

/// Flat bonus for emptying a full rack in one move
pub const BINGO_BONUS: u32 = 50;

/// Running totals for one move while it is being validated.
///
/// Scoring rules:
/// - A tile already on the board counts its face value; its square was used up when it
///   was first played
/// - A new tile on DL/TL counts its value x2/x3
/// - A new tile on DW/TW counts its face value and doubles/triples the whole main word
/// - Every cross word formed by a new tile is scored on its own, using only that tile's
///   square, and added after the main word multiplier
/// - Placing all seven tiles adds a flat +50, not multiplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    main_sum: u32,
    word_multiplier: u32,
    cross_total: u32,
    tiles_placed: usize,
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self {
            main_sum: 0,
            word_multiplier: 1,
            cross_total: 0,
            tiles_placed: 0,
        }
    }
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A letter of the main word that was already on the board
    pub fn add_existing(&mut self, tile: &Tile) {
        self.main_sum += tile.value();
    }

    /// A tile newly placed on `square` as part of the main word
    pub fn add_new(&mut self, value: u32, square: &Square) {
        self.main_sum += value * square.letter_factor();
        self.word_multiplier *= square.word_factor();
        self.tiles_placed += 1;
    }

    /// A cross word through a new tile on `square`; `neighbours` is the sum of the
    /// tiles already on the board on either side of it
    pub fn add_cross_word(&mut self, neighbours: u32, value: u32, square: &Square) {
        self.cross_total += Self::cross_word_score(neighbours, value, square);
    }

    pub fn cross_word_score(neighbours: u32, value: u32, square: &Square) -> u32 {
        (neighbours + value * square.letter_factor()) * square.word_factor()
    }

    pub fn tiles_placed(&self) -> usize {
        self.tiles_placed
    }

    /// Main word with its multiplier, plus cross words, plus the bingo bonus
    pub fn total(&self) -> u32 {
        self.main_sum * self.word_multiplier + self.cross_total + self.bingo_bonus()
    }

    fn bingo_bonus(&self) -> u32 {
        if self.tiles_placed == RACK_SIZE {
            BINGO_BONUS
        } else {
            0
        }
    }
}
