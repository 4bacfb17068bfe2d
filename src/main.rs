//! Terminal memory trainer.
//!
//! Shows a random puzzle position for a few seconds, scrolls it away,
//! then accepts place/erase commands until the player asks for a score.
//!
//! Usage:
//! `cargo run --release -- puzzles.csv --memorize-secs 8`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use board_recall::board::piece::Piece;
use board_recall::board::square::Square;
use board_recall::puzzle::dataset::PuzzleSet;
use board_recall::trainer::session::TrainingSession;
use board_recall::utils::render_board::render_position;

#[derive(Parser, Debug)]
#[command(name = "board_recall", about = "Chess position memory trainer")]
struct Args {
    /// CSV dataset with FEN strings in the second column.
    dataset: PathBuf,

    /// Maximum number of dataset rows to load.
    #[arg(long, default_value_t = PuzzleSet::DEFAULT_LIMIT)]
    limit: usize,

    /// Seconds the target position stays on screen.
    #[arg(long, default_value_t = 10)]
    memorize_secs: u64,

    /// Seed for reproducible puzzle selection.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let puzzles = match PuzzleSet::load_csv(&args.dataset, args.limit) {
        Ok(puzzles) => puzzles,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    println!("Loaded {} puzzle positions.", puzzles.len());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let puzzle = puzzles.choose(&mut rng);
        let mut session = TrainingSession::new(puzzle.position.clone());

        println!("\nMemorize this position ({}s):\n", args.memorize_secs);
        println!("{}\n", render_position(session.target()));
        io::stdout().flush().ok();

        thread::sleep(Duration::from_secs(args.memorize_secs));

        // Scroll the target off screen before opening the attempt board.
        print!("{}", "\n".repeat(50));

        if session.begin_reconstruction().is_err() {
            break;
        }

        println!("Rebuild the position from memory.");
        println!(
            "Commands: place <square> <piece>, erase <square>, show, check, peek, clear, done, quit"
        );

        let mut quit = false;

        loop {
            print!("> ");
            io::stdout().flush().ok();

            let Some(Ok(line)) = lines.next() else {
                quit = true;
                break;
            };

            match run_command(&mut session, line.trim()) {
                CommandOutcome::Continue => {}
                CommandOutcome::Done => break,
                CommandOutcome::Quit => {
                    quit = true;
                    break;
                }
            }
        }

        if quit {
            break;
        }

        let score = match session.finish() {
            Ok(score) => score,
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        };

        println!("\n[{}] {}", Local::now().format("%H:%M:%S"), score.report());
        println!("\nTarget:\n{}", render_position(session.target()));
        println!("\nYour board:\n{}", render_position(session.attempt()));

        print!("\nPress enter for the next puzzle, or type quit: ");
        io::stdout().flush().ok();
        match lines.next() {
            Some(Ok(line)) if line.trim() != "quit" => {}
            _ => break,
        }
    }

    println!("Goodbye.");
}

enum CommandOutcome {
    Continue,
    Done,
    Quit,
}

fn run_command(session: &mut TrainingSession, line: &str) -> CommandOutcome {
    let mut tokens = line.split_ascii_whitespace();

    match tokens.next() {
        Some("place") => {
            let (Some(coordinate), Some(letter)) = (tokens.next(), tokens.next()) else {
                println!("usage: place <square> <piece>, e.g. place e4 N");
                return CommandOutcome::Continue;
            };
            match parse_placement_args(coordinate, letter) {
                Ok((square, piece)) => {
                    if let Err(err) = session.place(square, piece) {
                        println!("error: {err}");
                    }
                }
                Err(message) => println!("{message}"),
            }
        }
        Some("erase") => {
            let Some(coordinate) = tokens.next() else {
                println!("usage: erase <square>, e.g. erase e4");
                return CommandOutcome::Continue;
            };
            match Square::from_algebraic(coordinate) {
                Ok(square) => {
                    if let Err(err) = session.erase(square) {
                        println!("error: {err}");
                    }
                }
                Err(err) => println!("error: {err}"),
            }
        }
        Some("show") => {
            println!("{}", render_position(session.attempt()));
            println!("{} pieces placed", session.attempt().piece_count());
        }
        Some("check") => {
            // Partial credit without ending the attempt.
            println!("{}/64 squares correct so far", session.score().matching);
        }
        Some("peek") => {
            println!("{}", render_position(session.target()));
        }
        Some("clear") => {
            if let Err(err) = session.clear_attempt() {
                println!("error: {err}");
            }
        }
        Some("done") => return CommandOutcome::Done,
        Some("quit") => return CommandOutcome::Quit,
        Some(other) => println!("unknown command: {other}"),
        None => {}
    }

    CommandOutcome::Continue
}

fn parse_placement_args(coordinate: &str, letter: &str) -> Result<(Square, Piece), String> {
    let square = Square::from_algebraic(coordinate).map_err(|err| format!("error: {err}"))?;

    let mut chars = letter.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(format!("error: piece must be a single letter, got {letter:?}"));
    };

    let piece = Piece::try_from_fen_char(ch).map_err(|err| format!("error: {err}"))?;

    Ok((square, piece))
}
