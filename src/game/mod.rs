// Game engine modules

pub mod bag;
pub mod board;
pub mod player;
pub mod rack;
pub mod scorer;
pub mod session;
pub mod validator;

pub use bag::Bag;
pub use board::{Board, BoardSnapshot, CellView};
pub use player::Player;
pub use rack::{Rack, RACK_SIZE};
pub use scorer::{ScoreCard, BINGO_BONUS};
pub use session::{Game, TurnReport, MAX_PLAYERS};
pub use validator::{commit, validate_and_score, Placement, ValidatedMove};
