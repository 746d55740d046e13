//! Line-oriented front end: reads moves from a text stream and drives a [`Game`].

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    error::TurnError,
    game::Game,
    models::{Direction, Position},
};

const HELP: &str = "\
Commands:
  WORD X Y DIR   place WORD starting at column X, row Y; DIR is h (across) or v (down)
  pass           skip your turn
  board          show the board
  json           dump the board as JSON
  help           show this message
  quit           leave the game
";

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play {
        word: String,
        start: Position,
        direction: Direction,
    },
    Pass,
    Board,
    Json,
    Help,
    Quit,
}

/// Parse a line of input. The error is a message meant for the player.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        [] => Err("Type a move, or 'help'".to_string()),
        [single] => match single.to_lowercase().as_str() {
            "pass" => Ok(Command::Pass),
            "board" => Ok(Command::Board),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(format!("Unknown command '{}'", single)),
        },
        [word, x, y, direction] => {
            let x = x
                .parse()
                .map_err(|_| format!("X must be a number, got '{}'", x))?;
            let y = y
                .parse()
                .map_err(|_| format!("Y must be a number, got '{}'", y))?;

            Ok(Command::Play {
                word: word.to_string(),
                start: Position::new(x, y),
                direction: parse_direction(direction)?,
            })
        }
        _ => Err("Expected WORD X Y DIR".to_string()),
    }
}

fn parse_direction(text: &str) -> Result<Direction, String> {
    match text.to_lowercase().as_str() {
        "h" | "across" | "horizontal" | "false" => Ok(Direction::Horizontal),
        "v" | "down" | "vertical" | "true" => Ok(Direction::Vertical),
        _ => Err(format!("Direction must be h or v, got '{}'", text)),
    }
}

fn status(game: &Game) -> String {
    let player = game.current_player();
    format!(
        "{} ({} points) rack: {}  bag: {}\n> ",
        player.name(),
        player.score(),
        player.rack(),
        game.bag().len()
    )
}

fn final_scores(game: &Game) -> String {
    let mut out = String::from("Game over!\n");
    for player in game.players() {
        out.push_str(&format!("  {}: {}\n", player.name(), player.score()));
    }
    let winners: Vec<&str> = game.leaders().iter().map(|p| p.name()).collect();
    out.push_str(&format!("Winner: {}\n", winners.join(", ")));
    out
}

/// Run turns until the game ends, the input ends, or a player quits
pub async fn run<R, W>(game: &mut Game, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    writer.write_all(game.board().to_string().as_bytes()).await?;
    writer.write_all(status(game).as_bytes()).await?;
    writer.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let reply = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => HELP.to_string(),
            Ok(Command::Board) => game.board().to_string(),
            Ok(Command::Json) => format!("{}\n", serde_json::to_string(&game.board().snapshot())?),
            Ok(Command::Pass) => match game.pass() {
                Ok(_) => format!("{}'s turn\n", game.current_player().name()),
                Err(e) => format!("{}\n", e),
            },
            Ok(Command::Play {
                word,
                start,
                direction,
            }) => match game.play(&word, start, direction) {
                Ok(report) => format!(
                    "{}{} scores {} for {} (total {})\n",
                    game.board(),
                    report.player,
                    report.score,
                    report.word,
                    report.total
                ),
                Err(TurnError::Rejected(reason)) => {
                    format!("Invalid word placement: {}. Please try again.\n", reason)
                }
                Err(e) => format!("{}\n", e),
            },
            Err(message) => format!("{}\n", message),
        };
        writer.write_all(reply.as_bytes()).await?;

        if game.is_over() {
            writer.write_all(final_scores(game).as_bytes()).await?;
            break;
        }

        writer.write_all(status(game).as_bytes()).await?;
        writer.flush().await?;
    }

    writer.flush().await?;
    Ok(())
}
