//! Property-based tests for move validation.
//!
//! These check the guarantees every move must keep regardless of input: rejected
//! moves change nothing, tiles are never created or lost, the opening move must
//! cover the centre, and validation has no side effects.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use scrabble::{
    game::{validate_and_score, Board, Game, Player, Rack},
    models::{Direction, Position, Tile},
    Dictionary, Language, RejectReason,
};

const WORDS: &[&str] = &[
    "CAT", "CATS", "AT", "TA", "ACT", "SAT", "TEA", "EAT", "ATE", "SEAT", "EATS", "EAST",
    "TEAS", "SET", "TEN", "NET", "NEST", "SENT", "TENS", "ANT", "TAN", "ANTS", "STEAN",
];

fn dictionary() -> Dictionary {
    Dictionary::from_words(WORDS)
}

fn direction(vertical: bool) -> Direction {
    if vertical {
        Direction::Vertical
    } else {
        Direction::Horizontal
    }
}

fn rack_from(letters: &[char]) -> Rack {
    let english = Language::english();
    let tiles = letters
        .iter()
        .map(|&c| {
            if c == '_' {
                Tile::blank()
            } else {
                Tile::from_language(c, &english)
            }
        })
        .collect();
    Rack::from_tiles(tiles).unwrap()
}

/// Board with CAT across the centre
fn opened_board() -> Board {
    let mut board = Board::new();
    let mut player = Player::with_rack("setup", rack_from(&['C', 'A', 'T']));
    player
        .place_word(
            "CAT",
            Position::new(6, 7),
            Direction::Horizontal,
            &mut board,
            &dictionary(),
        )
        .unwrap();
    board
}

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(WORDS).prop_map(str::to_string)
}

fn rack_letters() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(
        prop::sample::select(vec!['A', 'C', 'E', 'N', 'S', 'T', '_']),
        0..=7,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// A rejected move leaves the board, the rack, the score and every wildcard as they were.
    #[test]
    fn prop_rejection_is_atomic(
        word in word(),
        x in 0usize..16,
        y in 0usize..16,
        vertical in any::<bool>(),
        letters in rack_letters()
    ) {
        let mut board = opened_board();
        let mut player = Player::with_rack("p", rack_from(&letters));
        let board_before = board.clone();
        let player_before = player.clone();

        let result = player.place_word(
            &word,
            Position::new(x, y),
            direction(vertical),
            &mut board,
            &dictionary(),
        );

        if result.is_err() {
            prop_assert_eq!(&board, &board_before);
            prop_assert_eq!(&player, &player_before);
            prop_assert_eq!(
                player.rack().tiles().iter().filter(|t| t.is_blank()).count(),
                letters.iter().filter(|&&c| c == '_').count()
            );
        } else {
            let placed = board.occupied_count() - board_before.occupied_count();
            prop_assert_eq!(placed + player.rack().len(), letters.len());
            prop_assert!(player.score() > 0);
        }
    }

    /// Board + bag + racks always holds the full tile set.
    #[test]
    fn prop_tiles_are_conserved(
        seed in any::<u64>(),
        moves in prop::collection::vec((word(), 0usize..15, 0usize..15, any::<bool>()), 1..30)
    ) {
        let english = Language::english();
        let mut game = Game::new(
            &english,
            dictionary(),
            vec!["a".to_string(), "b".to_string()],
            StdRng::seed_from_u64(seed),
        )
        .unwrap();
        let total = english.tile_count() as usize;
        prop_assert_eq!(game.tile_count(), total);

        for (word, x, y, vertical) in moves {
            if game.play(&word, Position::new(x, y), direction(vertical)).is_err() && !game.is_over() {
                game.pass().unwrap();
            }
            prop_assert_eq!(game.tile_count(), total);
        }
    }

    /// On an empty board, a legal word that misses the centre is always disconnected.
    #[test]
    fn prop_first_move_must_cover_centre(
        word in word(),
        x in 0usize..15,
        y in 0usize..15,
        vertical in any::<bool>()
    ) {
        let board = Board::new();
        let rack = rack_from(&word.chars().collect::<Vec<_>>());
        let start = Position::new(x, y);
        let direction = direction(vertical);

        let len = word.chars().count();
        let end = start.offset(direction, len - 1);
        let covers_centre = (0..len).any(|i| start.offset(direction, i) == Position::CENTER);

        let result = validate_and_score(&word, start, direction, &board, &rack, &dictionary());

        if !end.in_bounds() {
            prop_assert!(
                matches!(result, Err(RejectReason::OutOfBounds { .. })),
                "expected OutOfBounds, got {:?}",
                result
            );
        } else if covers_centre {
            prop_assert!(result.is_ok(), "expected a legal opening, got {:?}", result);
        } else {
            prop_assert!(
                matches!(result, Err(RejectReason::Disconnected { .. })),
                "expected Disconnected, got {:?}",
                result
            );
        }
    }

    /// Validating twice without committing gives the same answer.
    #[test]
    fn prop_validation_is_idempotent(
        word in word(),
        x in 0usize..15,
        y in 0usize..15,
        vertical in any::<bool>(),
        letters in rack_letters()
    ) {
        let board = opened_board();
        let rack = rack_from(&letters);
        let dict = dictionary();
        let start = Position::new(x, y);

        let first = validate_and_score(&word, start, direction(vertical), &board, &rack, &dict);
        let second = validate_and_score(&word, start, direction(vertical), &board, &rack, &dict);

        prop_assert_eq!(first, second);
    }
}
