//! # render-regions
//!
//! Command line tool for drawing a dots position as SVG: every cell of the board, and each
//! captured region as a rounded outline with a halo around it.
//!
//! The position comes from a JSON snapshot, or is an empty board of the given size. Turns given
//! with `--turn` are played on it first, players taking turns starting with the first one.

mod read;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use dots_prelude::{draw::svg::render_board, team::teams, Game};
use eyre::Result;
use log::{error, info, Level};

use crate::read::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON snapshot of the position to draw
    #[arg(short, long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Rows of the empty board used when no snapshot is given
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    height: usize,

    /// Columns of the empty board used when no snapshot is given
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    width: usize,

    /// JSON render config; missing fields keep their defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Cell index to play before drawing, may be repeated
    #[arg(short, long = "turn", value_name = "INDEX")]
    turns: Vec<usize>,

    /// Where to write the SVG, stdout if not given
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also write the position after the turns as a JSON snapshot
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// More logging, may be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_logger::init_with_level(log_level(cli.verbose))?;

    let config = get_config(cli.config.as_deref())?;
    let board = get_board(cli.snapshot.as_deref(), cli.height, cli.width)?;
    let mut game = Game::new(board, config);

    for &index in &cli.turns {
        let player = game.current_player();
        if let Err(e) = game.play(index) {
            error!("Player {player} couldn't play cell {index}: {e}");
        }
    }

    let board = game.engine();
    info!("{} turn(s) on the board", board.turns());
    for (player, team) in (0..teams().len() as u8).zip(teams()) {
        info!("{}: {} point(s)", team.name(), game.score(player));
    }
    if let Some(path) = &cli.save {
        fs::write(path, board.to_snapshot().to_json()?)?;
        info!("Saved the position to {}", path.display());
    }

    let document = render_board(board, game.regions(), game.config())?;
    match &cli.output {
        Some(path) => {
            svg::save(path, &document)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            svg::write(&mut stdout, &document)?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn turns_repeat_and_verbosity_counts() {
        let cli = Cli::parse_from(["render-regions", "-t", "3", "--turn", "7", "-vv"]);
        assert_eq!(cli.turns, vec![3, 7]);
        assert_eq!(log_level(cli.verbose), Level::Debug);
        assert_eq!((cli.height, cli.width), (DEFAULT_SIDE, DEFAULT_SIDE));
        assert!(cli.output.is_none());
    }
}
