use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use crate::game::MAX_PLAYERS;

#[derive(Debug, Clone)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Language name, also the word list's file stem
    pub language: String,
    pub languages_file: PathBuf,
    pub dictionary_dir: PathBuf,
    pub players: usize,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            language: env::var("SCRABBLE_LANGUAGE")
                .unwrap_or_else(|_| "english".to_string()),
            languages_file: env::var("SCRABBLE_LANGUAGES_FILE")
                .unwrap_or_else(|_| "./languages.txt".to_string())
                .into(),
            dictionary_dir: env::var("SCRABBLE_DICTIONARY_DIR")
                .unwrap_or_else(|_| ".".to_string())
                .into(),
            players: env::var("SCRABBLE_PLAYERS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .context("SCRABBLE_PLAYERS must be a number")?,
            seed: env::var("SCRABBLE_SEED")
                .ok()
                .map(|seed| seed.parse::<u64>())
                .transpose()
                .context("SCRABBLE_SEED must be a number")?,
        };

        if game.players == 0 || game.players > MAX_PLAYERS {
            bail!("SCRABBLE_PLAYERS must be between 1 and {}", MAX_PLAYERS);
        }

        Ok(Config { game })
    }

    /// Word list for the configured language: `<dictionary_dir>/<language>.txt`
    pub fn dictionary_path(&self) -> PathBuf {
        self.game
            .dictionary_dir
            .join(format!("{}.txt", self.game.language))
    }
}
