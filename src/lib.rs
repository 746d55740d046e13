//! Word-placement board game engine.
//!
//! The heart of the crate is [`game::validate_and_score`], which decides whether a word
//! can be laid on the [`game::Board`] from a player's [`game::Rack`] and what it scores,
//! and [`game::commit`], which applies an accepted move. Everything else is the
//! surrounding game: tiles, the bag, players taking turns, and the loaders for letter
//! tables and word lists.

pub mod config;
pub mod console;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod language;
pub mod models;
pub mod utils;

pub use dictionary::Dictionary;
pub use error::{CommitError, RejectReason, SetupError, TurnError};
pub use language::Language;
