use clap::{Parser, ValueEnum};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::process;

use pgn2fen::replay::{target_ply, Replay};
use pgn2fen::{fen, Color};

/// PGN to FEN - print the position reached after a given move of a game
///
/// ## Usage Examples:
/// ```bash
/// # Position after White's second move
/// ./pgn2fen game.pgn 2
///
/// # Position after Black's second move, written to a file
/// ./pgn2fen game.pgn 2 b -o position.fen
/// ```
#[derive(Parser)]
#[command(name = "pgn2fen")]
#[command(about = "Extract the FEN of a specific move of a PGN game")]
#[command(version = "0.1.0")]
struct Args {
    /// A chess game in PGN format
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Move number, starting at 1
    #[arg(value_name = "MOVE", value_parser = clap::value_parser!(u32).range(1..))]
    move_number: u32,

    /// Position reached after (w)hite's or (b)lack's move
    #[arg(value_name = "SIDE", value_enum, ignore_case = true, default_value = "w")]
    side: Side,

    /// Output FEN file (if not specified, the FEN is written to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also print the moves read up to the requested one (to stderr)
    #[arg(long)]
    list_moves: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    #[value(name = "w", alias = "white")]
    White,
    #[value(name = "b", alias = "black")]
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let movetext = match fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!(
                "Error: The input file '{}' could not be opened: {}",
                args.input.display(),
                e
            );
            process::exit(1);
        }
    };

    let ply = match target_ply(args.move_number, args.side.into()) {
        Ok(ply) => ply,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!("Replaying '{}' up to ply {}", args.input.display(), ply);

    let mut replay = Replay::new(&movetext);
    let result = replay.play_to(ply);

    if args.list_moves {
        let moves: Vec<&str> = replay.moves().iter().map(|token| token.raw()).collect();
        eprintln!("{}", moves.join(" "));
    }

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let fen = fen::encode(replay.state());
    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, format!("{}\n", fen)) {
                eprintln!(
                    "Error: The output file '{}' could not be written: {}",
                    path.display(),
                    e
                );
                process::exit(1);
            }
            info!("Wrote FEN to '{}'", path.display());
        }
        None => println!("{}", fen),
    }
}
