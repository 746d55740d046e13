use rand::Rng;
use std::fmt;

use super::Bag;
use crate::models::Tile;

/// Tiles a player may hold at once
pub const RACK_SIZE: usize = 7;

/// A player's hand. Tiles are addressed by slot index while a move is being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    /// A rack holding `tiles`, or `None` if there are more than [`RACK_SIZE`]
    pub fn from_tiles(tiles: Vec<Tile>) -> Option<Self> {
        (tiles.len() <= RACK_SIZE).then_some(Self { tiles })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn get(&self, slot: usize) -> Option<&Tile> {
        self.tiles.get(slot)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Top the rack up to [`RACK_SIZE`] from the bag. Returns how many tiles were drawn.
    pub fn refill(&mut self, bag: &mut Bag) -> usize {
        self.refill_with_rng(bag, &mut rand::rng())
    }

    /// Refill using a specific RNG (for testing/seeding)
    pub fn refill_with_rng<R: Rng>(&mut self, bag: &mut Bag, rng: &mut R) -> usize {
        self.draw_with_rng(bag, RACK_SIZE, rng)
    }

    /// Move up to `count` tiles from the bag, stopping when the rack is full or the bag
    /// runs out
    pub fn draw(&mut self, bag: &mut Bag, count: usize) -> usize {
        self.draw_with_rng(bag, count, &mut rand::rng())
    }

    pub fn draw_with_rng<R: Rng>(&mut self, bag: &mut Bag, count: usize, rng: &mut R) -> usize {
        let wanted = count.min(RACK_SIZE.saturating_sub(self.tiles.len()));
        let mut drawn = 0;
        while drawn < wanted {
            let Some(tile) = bag.draw_with_rng(rng) else {
                break;
            };
            self.tiles.push(tile);
            drawn += 1;
        }
        drawn
    }

    /// Slot of a tile that can play `letter`, skipping slots in `taken`.
    /// A tile bearing the letter wins over a wildcard.
    pub fn find_slot(&self, letter: char, taken: &[usize]) -> Option<usize> {
        let free = |slot: &usize| !taken.contains(slot);

        (0..self.tiles.len())
            .filter(free)
            .find(|&slot| !self.tiles[slot].is_blank() && self.tiles[slot].letter() == letter)
            .or_else(|| {
                (0..self.tiles.len())
                    .filter(free)
                    .find(|&slot| self.tiles[slot].is_blank())
            })
    }

    /// Drop the tiles in `slots`. Every slot must exist.
    pub(crate) fn remove_slots(&mut self, slots: &[usize]) {
        let mut slots = slots.to_vec();
        slots.sort_unstable_by(|a, b| b.cmp(a));
        slots.dedup();
        for slot in slots {
            debug_assert!(slot < self.tiles.len(), "rack has no slot {}", slot);
            if slot < self.tiles.len() {
                self.tiles.remove(slot);
            }
        }
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rack(letters: &str) -> Rack {
        let tiles = letters
            .chars()
            .map(|c| if c == '_' { Tile::blank() } else { Tile::new(c, 1) })
            .collect();
        Rack::from_tiles(tiles).unwrap()
    }

    #[test]
    fn test_rack_limit() {
        assert!(Rack::from_tiles(vec![Tile::new('A', 1); RACK_SIZE]).is_some());
        assert!(Rack::from_tiles(vec![Tile::new('A', 1); RACK_SIZE + 1]).is_none());
    }

    #[test]
    fn test_draw_stops_at_count_and_capacity() {
        let mut bag = Bag::from_tiles(vec![Tile::new('E', 1); 20]);
        let mut rack = rack("AB");
        let mut rng = StdRng::seed_from_u64(4);

        assert_eq!(rack.draw_with_rng(&mut bag, 2, &mut rng), 2);
        assert_eq!(rack.len(), 4);
        assert_eq!(rack.draw_with_rng(&mut bag, 10, &mut rng), 3);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(rack.draw(&mut bag, 1), 0);
        assert_eq!(bag.len(), 15);
    }

    #[test]
    fn test_refill_tops_up_to_seven() {
        let mut bag = Bag::from_tiles(vec![Tile::new('E', 1); 20]);
        let mut rack = rack("AB");
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(rack.refill_with_rng(&mut bag, &mut rng), 5);
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(bag.len(), 15);

        // Already full: nothing drawn
        assert_eq!(rack.refill_with_rng(&mut bag, &mut rng), 0);
        assert_eq!(bag.len(), 15);
    }

    #[test]
    fn test_refill_stops_when_bag_runs_dry() {
        let mut bag = Bag::from_tiles(vec![Tile::new('E', 1); 2]);
        let mut rack = Rack::new();

        assert_eq!(rack.refill(&mut bag), 2);
        assert_eq!(rack.len(), 2);
        assert!(bag.is_empty());
        assert_eq!(rack.refill(&mut bag), 0);
    }

    #[test]
    fn test_find_slot_prefers_letter_over_wildcard() {
        let rack = rack("_SA");
        assert_eq!(rack.find_slot('S', &[]), Some(1));
        assert_eq!(rack.find_slot('S', &[1]), Some(0));
        assert_eq!(rack.find_slot('S', &[0, 1]), None);
        assert_eq!(rack.find_slot('Q', &[]), Some(0));
    }

    #[test]
    fn test_find_slot_respects_multiplicity() {
        let rack = rack("LLO");
        assert_eq!(rack.find_slot('L', &[]), Some(0));
        assert_eq!(rack.find_slot('L', &[0]), Some(1));
        assert_eq!(rack.find_slot('L', &[0, 1]), None);
    }

    #[test]
    fn test_remove_slots() {
        let mut rack = rack("CATS");
        rack.remove_slots(&[3, 0, 3]);
        assert_eq!(rack.to_string(), "[A][T]");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rack has no slot 9")]
    fn test_remove_unknown_slot() {
        let mut rack = rack("CATS");
        rack.remove_slots(&[9]);
    }
}
