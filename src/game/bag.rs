use rand::Rng;

use crate::{language::Language, models::Tile};

/// Pool of tiles not yet drawn. Running dry is a normal end-of-game condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    tiles: Vec<Tile>,
}

impl Bag {
    /// A full tile set for `language`, wildcards included
    pub fn new(language: &Language) -> Self {
        let tiles = language
            .letters()
            .into_iter()
            .flat_map(|letter| {
                let tile = Tile::from_language(letter, language);
                std::iter::repeat(tile).take(language.distribution(letter) as usize)
            })
            .collect();

        Self { tiles }
    }

    /// A bag holding exactly `tiles`
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Take one tile chosen uniformly at random, or `None` once the bag is empty
    pub fn draw(&mut self) -> Option<Tile> {
        self.draw_with_rng(&mut rand::rng())
    }

    /// Draw using a specific RNG (for testing/seeding)
    pub fn draw_with_rng<R: Rng>(&mut self, rng: &mut R) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.tiles.len());
        Some(self.tiles.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
