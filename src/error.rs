use thiserror::Error;

use crate::models::Position;

/// Why a proposed move was refused. Every variant is recoverable: the board and rack are
/// untouched and the player can simply try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("{word} does not fit on the board starting at {start}")]
    OutOfBounds { word: String, start: Position },

    #[error("{word} is not in the dictionary")]
    WordNotInDictionary { word: String },

    #[error("{word} touches letters at {neighbour}; enter the entire word, including letters already on the board")]
    IncompleteWordSpan { word: String, neighbour: Position },

    #[error("{expected} at {position} collides with the {found} already on the board")]
    LetterConflict {
        position: Position,
        expected: char,
        found: char,
    },

    #[error("no tile for {letter} at {position}")]
    MissingLetter { position: Position, letter: char },

    #[error("cross word {cross_word} formed at {position} is not in the dictionary")]
    InvalidCrossWord { position: Position, cross_word: String },

    #[error("{word} is not connected to any tiles on the board")]
    Disconnected { word: String },

    #[error("{word} is already on the board; place at least one tile")]
    NoTilesPlaced { word: String },
}

/// Raised when a validated move no longer matches the board or rack it was checked against
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error("move is stale: {0}")]
    StaleMove(String),
}

/// Problems setting up a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a game needs between 1 and {max} players, got {count}")]
    PlayerCount { count: usize, max: usize },
}

/// Why a turn could not be taken
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error(transparent)]
    Rejected(#[from] RejectReason),

    #[error("the game is over")]
    GameOver,
}
