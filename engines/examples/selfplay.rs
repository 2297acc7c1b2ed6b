/// Play a configured self-play match and print the final position of one game
use std::path::PathBuf;

use clap::Parser;
use reversi::{CellState, Outcome};
use reversi_engines::{play_game, run_match, MatchConfig};

#[derive(Parser)]
#[command(name = "selfplay", about = "Play reversi engines against each other")]
struct Cli {
    /// Path to a TOML match configuration
    #[arg(long, default_value = "match.toml")]
    config: PathBuf,

    /// Override the number of games
    #[arg(long)]
    games: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = MatchConfig::load_or_default(&cli.config)?;
    if let Some(games) = cli.games {
        config.games = games;
    }

    let mut black = config.black.build(config.seed);
    let mut white = config.white.build(config.seed.wrapping_add(1));
    let record = play_game(&mut *black, &mut *white)?;

    println!("  0 1 2 3 4 5 6 7");
    for (cell, state) in record.board.cells() {
        if cell.column() == 0 {
            print!("{} ", cell.row());
        }
        let symbol = match state {
            CellState::Empty => ".",
            CellState::Black => "●",
            CellState::White => "○",
        };
        print!("{} ", symbol);
        if cell.column() == 7 {
            println!();
        }
    }
    match record.outcome {
        Outcome::Winner(player) => println!("First game: {:?} wins after {} moves", player, record.moves()),
        Outcome::Tie => println!("First game: tie after {} moves", record.moves()),
    }

    let summary = run_match(&config)?;
    println!(
        "{:?} (black) vs {:?} (white) over {} games: {} / {} / {} ties",
        config.black,
        config.white,
        summary.games(),
        summary.black_wins,
        summary.white_wins,
        summary.ties
    );

    Ok(())
}
