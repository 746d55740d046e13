use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use scrabble::{config::Config, console, game::Game, Dictionary, Language};
use tokio::io::{self, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrabble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Scrabble...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load letter values and tile counts
    let language = match Language::load(&config.game.languages_file, &config.game.language).await
    {
        Ok(language) => language,
        Err(e) if config.game.language == "english" => {
            tracing::warn!("Using built-in English tiles: {:#}", e);
            Language::english()
        }
        Err(e) => return Err(e),
    };

    // Load dictionary
    let dictionary = Dictionary::load(config.dictionary_path())
        .await
        .context("A word list is required to play")?;

    let rng = match config.game.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let names = (1..=config.game.players)
        .map(|n| format!("Player {}", n))
        .collect();
    let mut game = Game::new(&language, dictionary, names, rng)?;

    console::run(&mut game, BufReader::new(io::stdin()), io::stdout()).await?;

    tracing::info!("Goodbye");
    Ok(())
}
