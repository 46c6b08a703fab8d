use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use othello::persist::{self, DEFAULT_SAVE_FILE};
use othello::{
    parse_square, pass_message, BoardDisplay, GameError, GameState, HeuristicConfig, Player,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Controller {
    Human,
    Ai,
}

/// Play Othello in the terminal.
#[derive(Parser)]
#[command(name = "othello", about = "Play Othello against a friend or the heuristic engine")]
struct Cli {
    /// Who plays Black
    #[arg(long, value_enum, default_value = "human")]
    black: Controller,

    /// Who plays White
    #[arg(long, value_enum, default_value = "ai")]
    white: Controller,

    /// Path to a TOML file with heuristic weights
    #[arg(long, default_value = "heuristic.toml")]
    config: PathBuf,

    /// Resume a saved game
    #[arg(long)]
    load: Option<PathBuf>,

    /// Where the `save` command writes
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_path: PathBuf,
}

impl Cli {
    fn controller(&self, player: Player) -> Controller {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

enum Turn {
    Played(String),
    Undone,
    Quit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = HeuristicConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading heuristic config from {}", cli.config.display()))?;

    let (mut game, passed) = match &cli.load {
        Some(path) => persist::load_with_pass(path)
            .with_context(|| format!("loading saved game from {}", path.display()))?,
        None => (GameState::new(), None),
    };

    println!("Welcome to Othello");
    if cli.load.is_some() {
        println!("Resuming after {} moves.\n", game.history().len());
    } else {
        println!("Black moves first!\n");
    }
    if let Some(player) = passed {
        println!("{}\n", pass_message(player));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_finished() {
        println!("{}\n", BoardDisplay(game.board()));

        let turn = match cli.controller(game.current_player()) {
            Controller::Ai => Turn::Played(game.play_ai(&config)?.message()),
            Controller::Human => human_turn(&cli, &mut game, &mut lines)?,
        };

        match turn {
            Turn::Played(message) => println!("{message}\n"),
            Turn::Undone => println!(),
            Turn::Quit => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }

    println!("{}\n", BoardDisplay(game.board()));
    if let Some(summary) = game.summary() {
        println!("{summary}");
    }
    Ok(())
}

/// Prompt until the human enters a legal move or a command.
fn human_turn(
    cli: &Cli,
    game: &mut GameState,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Turn> {
    let player = game.current_player();

    loop {
        print!("{player}'s turn. Enter a move like 'A 6' or 'd7' ('undo', 'save', 'q' to quit): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(Turn::Quit);
        };
        let raw = line.context("reading move from stdin")?;

        match raw.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => return Ok(Turn::Quit),
            "save" => {
                persist::save(game, &cli.save_path)
                    .with_context(|| format!("saving game to {}", cli.save_path.display()))?;
                println!("Game saved to {}.", cli.save_path.display());
                continue;
            }
            "undo" => {
                if undo_to_human(cli, game) {
                    return Ok(Turn::Undone);
                }
                println!("Nothing to undo.");
                continue;
            }
            _ => {}
        }

        let square = match parse_square(&raw) {
            Ok(square) => square,
            Err(err) => {
                println!("Invalid input ({err}). Examples: 'A 6', 'd7', 'H8'");
                continue;
            }
        };

        match game.play(square.col, square.row) {
            Ok(report) => return Ok(Turn::Played(report.message())),
            Err(err @ GameError::IllegalMove { .. }) => {
                println!("{err}, please try again.");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Take back moves until a human is to play again. Returns false if nothing
/// could be undone.
fn undo_to_human(cli: &Cli, game: &mut GameState) -> bool {
    let mut undone = Vec::new();
    while let Ok(record) = game.undo() {
        undone.push(record.notation);
        if cli.controller(game.current_player()) == Controller::Human {
            break;
        }
    }

    if undone.is_empty() {
        return false;
    }
    println!("Took back {}.", undone.join(", "));
    true
}
