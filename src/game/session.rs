use rand::{rngs::StdRng, Rng};
use serde::Serialize;

use super::{Bag, Board, Player};
use crate::{
    dictionary::Dictionary,
    error::{SetupError, TurnError},
    language::Language,
    models::{Direction, Position},
};

/// Most players a single bag supports
pub const MAX_PLAYERS: usize = 4;

/// Outcome of a successful turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub player: String,
    pub word: String,
    pub score: u32,
    /// Player's running total after this turn
    pub total: u32,
    pub cross_words: Vec<String>,
    /// Tiles drawn to refill the rack
    pub drawn: usize,
    pub game_over: bool,
}

/// One game in progress: the board, the bag, the word list and the players in turn order
#[derive(Debug)]
pub struct Game {
    board: Board,
    bag: Bag,
    dictionary: Dictionary,
    players: Vec<Player>,
    turn: usize,
    rng: StdRng,
}

impl Game {
    /// Deal seven tiles to each player and pick who starts at random
    pub fn new(
        language: &Language,
        dictionary: Dictionary,
        names: Vec<String>,
        mut rng: StdRng,
    ) -> Result<Self, SetupError> {
        if names.is_empty() || names.len() > MAX_PLAYERS {
            return Err(SetupError::PlayerCount {
                count: names.len(),
                max: MAX_PLAYERS,
            });
        }

        let mut bag = Bag::new(language);
        let players: Vec<Player> = names
            .into_iter()
            .map(|name| {
                let mut player = Player::new(name);
                player.draw_tiles_with_rng(&mut bag, &mut rng);
                player
            })
            .collect();
        let turn = rng.random_range(0..players.len());

        tracing::info!(
            "New {} game for {} players, {} starts",
            language.name(),
            players.len(),
            players[turn].name()
        );

        Ok(Self {
            board: Board::new(),
            bag,
            dictionary,
            players,
            turn,
            rng,
        })
    }

    /// Resume from an existing position; the first player in `players` is to move
    pub fn from_parts(
        board: Board,
        bag: Bag,
        dictionary: Dictionary,
        players: Vec<Player>,
        rng: StdRng,
    ) -> Result<Self, SetupError> {
        if players.is_empty() || players.len() > MAX_PLAYERS {
            return Err(SetupError::PlayerCount {
                count: players.len(),
                max: MAX_PLAYERS,
            });
        }

        Ok(Self {
            board,
            bag,
            dictionary,
            players,
            turn: 0,
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player whose turn it is
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Play `word` for the current player. A rejected word keeps the turn with them.
    pub fn play(
        &mut self,
        word: &str,
        start: Position,
        direction: Direction,
    ) -> Result<TurnReport, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }

        let player = &mut self.players[self.turn];
        let validated =
            player.place_word(word, start, direction, &mut self.board, &self.dictionary)?;
        let drawn = player.draw_tiles_with_rng(&mut self.bag, &mut self.rng);

        let report = TurnReport {
            player: player.name().to_string(),
            word: validated.word,
            score: validated.score,
            total: player.score(),
            cross_words: validated.cross_words,
            drawn,
            game_over: false,
        };

        let game_over = self.is_over();
        if game_over {
            tracing::info!("{} went out, game over", report.player);
        } else {
            self.advance();
        }

        Ok(TurnReport { game_over, ..report })
    }

    /// Give up the turn without playing
    pub fn pass(&mut self) -> Result<usize, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }
        tracing::info!("{} passes", self.current_player().name());
        self.advance();
        Ok(self.turn)
    }

    fn advance(&mut self) {
        self.turn = (self.turn + 1) % self.players.len();
        tracing::debug!("{}'s turn", self.current_player().name());
    }

    /// The game ends when someone has emptied their rack with the bag already dry
    pub fn is_over(&self) -> bool {
        self.players.iter().any(|player| player.rack().is_empty())
    }

    /// Players sharing the top score
    pub fn leaders(&self) -> Vec<&Player> {
        let best = self.players.iter().map(Player::score).max().unwrap_or(0);
        self.players
            .iter()
            .filter(|player| player.score() == best)
            .collect()
    }

    /// Tiles on the board, in the bag and in every rack
    pub fn tile_count(&self) -> usize {
        self.board.occupied_count()
            + self.bag.len()
            + self.players.iter().map(|p| p.rack().len()).sum::<usize>()
    }
}
