use rand::Rng;

use super::{validator, Bag, Board, Rack, ValidatedMove};
use crate::{
    dictionary::Dictionary,
    error::RejectReason,
    models::{Direction, Position},
};

/// A seat at the table: a rack and a running score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    rack: Rack,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rack: Rack::new(),
            score: 0,
        }
    }

    /// A player already holding `rack` (for setting up positions)
    pub fn with_rack(name: impl Into<String>, rack: Rack) -> Self {
        Self {
            rack,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Fill the rack back up from the bag
    pub fn draw_tiles(&mut self, bag: &mut Bag) -> usize {
        self.rack.refill(bag)
    }

    pub fn draw_tiles_with_rng<R: Rng>(&mut self, bag: &mut Bag, rng: &mut R) -> usize {
        self.rack.refill_with_rng(bag, rng)
    }

    /// Validate a move from this player's rack and, if it is legal, play it.
    /// On rejection the board and the rack are exactly as they were.
    pub fn place_word(
        &mut self,
        word: &str,
        start: Position,
        direction: Direction,
        board: &mut Board,
        dictionary: &Dictionary,
    ) -> Result<ValidatedMove, RejectReason> {
        let validated =
            validator::validate_and_score(word, start, direction, board, &self.rack, dictionary)?;

        validator::apply(&validated, board, &mut self.rack);
        self.score += validated.score;

        Ok(validated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tile;

    fn cat_rack() -> Rack {
        Rack::from_tiles(vec![
            Tile::new('C', 3),
            Tile::new('A', 1),
            Tile::new('T', 1),
            Tile::new('S', 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_place_word_scores_and_consumes_tiles() {
        let dictionary = Dictionary::from_words(["CAT", "CATS"]);
        let mut board = Board::new();
        let mut player = Player::with_rack("ada", cat_rack());

        player
            .place_word("CAT", Position::new(6, 7), Direction::Horizontal, &mut board, &dictionary)
            .unwrap();
        assert_eq!(player.score(), 10);
        assert_eq!(player.rack().to_string(), "[S]");

        player
            .place_word("CATS", Position::new(6, 7), Direction::Horizontal, &mut board, &dictionary)
            .unwrap();
        assert_eq!(player.score(), 16);
        assert!(player.rack().is_empty());
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_rejected_word_changes_nothing() {
        let dictionary = Dictionary::from_words(["CAT"]);
        let mut board = Board::new();
        let mut player = Player::with_rack("ada", cat_rack());
        let before = player.clone();

        let result = player.place_word(
            "CAT",
            Position::new(0, 0),
            Direction::Vertical,
            &mut board,
            &dictionary,
        );

        assert!(matches!(result, Err(RejectReason::Disconnected { .. })));
        assert_eq!(player, before);
        assert!(board.is_empty());
    }

    #[test]
    fn test_draw_tiles() {
        let mut bag = Bag::from_tiles(vec![Tile::new('E', 1); 10]);
        let mut player = Player::new("bo");

        assert_eq!(player.draw_tiles(&mut bag), 7);
        assert_eq!(player.rack().len(), 7);
        assert_eq!(bag.len(), 3);
    }
}
