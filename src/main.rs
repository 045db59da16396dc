//! Checkers-Rust: a checkers engine with a Monte Carlo opponent.
//!
//! ## Usage
//!
//! - `checkers-rust` - Play against the computer in the terminal
//! - `checkers-rust ctp` - Start the CTP server for front-end integration
//! - `checkers-rust demo` - Watch the engine play itself

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use checkers_rust::board::Color;
use checkers_rust::constants::{MAX_GAME_LEN, N_SIMS};
use checkers_rust::coord::{parse_tile, str_tile};
use checkers_rust::ctp::CtpEngine;
use checkers_rust::montecarlo::{dump_scores, search, select};
use checkers_rust::position::Position;
use checkers_rust::rules::Move;

/// Checkers-Rust: a checkers engine with a Monte Carlo opponent
#[derive(Parser)]
#[command(name = "checkers-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Random playouts per candidate move
    #[arg(long, global = true, default_value_t = N_SIMS)]
    sims: usize,

    /// Seed for the playout random generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print per-move search scores to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the CTP (Checkers Text Protocol) server on stdin/stdout
    Ctp,
    /// Play an interactive game against the computer
    Play,
    /// Let the engine play both sides
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    match cli.command {
        Some(Commands::Ctp) => {
            let mut engine = CtpEngine::with_simulations(cli.sims).verbose(cli.verbose);
            if let Some(seed) = cli.seed {
                engine = engine.with_seed(seed);
            }
            engine.run()
        }
        Some(Commands::Demo) => {
            run_demo(cli.sims, cli.verbose, &mut rng);
            Ok(())
        }
        Some(Commands::Play) | None => run_interactive(cli.sims, cli.verbose, &mut rng),
    }
}

fn color_name(c: Color) -> &'static str {
    match c {
        Color::Light => "White",
        Color::Dark => "Black",
    }
}

fn str_move(mv: Move) -> String {
    format!("{} to {}", str_tile(mv.from), str_tile(mv.to))
}

/// Run Monte Carlo search for the side to move, optionally dumping scores.
fn think(pos: &Position, sims: usize, verbose: bool, rng: &mut fastrand::Rng) -> Option<Move> {
    let stats = search(pos, sims, rng);
    if verbose {
        dump_scores(&stats);
    }
    select(&stats)
}

/// Report the winner, if any. Returns true when the game is over.
fn report_winner(pos: &Position) -> bool {
    match pos.get_winner() {
        Some(c) => {
            println!("Game Over! {} wins!", color_name(c));
            true
        }
        None => false,
    }
}

fn run_interactive(sims: usize, verbose: bool, rng: &mut fastrand::Rng) -> Result<()> {
    let mut pos = Position::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to Checkers-Rust!");

    loop {
        println!();
        print!("{pos}");
        println!("\nChoose an option:");
        println!("1. Start a new game");
        println!("2. Make a move (e.g., 21 17)");
        println!("3. Let the computer make a move");
        println!("4. Undo the latest move");
        println!("5. Quit");
        print!("Enter your choice (1-5): ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(choice) = lines.next() else {
            break;
        };
        let choice = choice.context("failed to read choice")?;

        match choice.trim() {
            "1" => {
                pos.start();
                println!("New game started!");
            }
            "2" => {
                print!("Enter your move (start_tile end_tile) for {}: ", color_name(pos.to_move()));
                io::stdout().flush().context("failed to flush stdout")?;
                let Some(input) = lines.next() else {
                    break;
                };
                let input = input.context("failed to read move")?;
                let tiles: Vec<&str> = input.split_whitespace().collect();
                if tiles.len() != 2 {
                    println!("Invalid input format. Please enter two numbers separated by a space.");
                    continue;
                }
                let (Some(from), Some(to)) = (parse_tile(tiles[0]), parse_tile(tiles[1])) else {
                    println!("Invalid tile numbers. Please use numbers between 1 and 32.");
                    continue;
                };
                let mv = Move::new(from, to);
                if pos.try_move(mv).is_ok() {
                    println!("Move from {} executed.", str_move(mv));
                    if report_winner(&pos) {
                        break;
                    }
                } else {
                    println!("Invalid move. Please try again.");
                }
            }
            "3" => {
                println!("Computer ({}) is thinking...", color_name(pos.to_move()));
                match think(&pos, sims, verbose, rng) {
                    Some(mv) => {
                        println!("Computer moves from {}.", str_move(mv));
                        pos.try_move(mv)?;
                        if report_winner(&pos) {
                            break;
                        }
                    }
                    None => println!("Computer has no valid moves. Game might be over or stuck."),
                }
            }
            "4" => match pos.undo() {
                Ok(()) => println!("Move undone."),
                Err(_) => println!("No moves to undo."),
            },
            "5" => {
                println!("Thanks for playing! Goodbye.");
                break;
            }
            _ => println!("Invalid choice. Please enter a number between 1 and 5."),
        }
    }
    Ok(())
}

fn run_demo(sims: usize, verbose: bool, rng: &mut fastrand::Rng) {
    println!("Checkers-Rust: Monte Carlo self-play ({sims} playouts per move)\n");

    let mut pos = Position::new();
    for ply in 1..=MAX_GAME_LEN {
        let side = pos.to_move();
        let Some(mv) = think(&pos, sims, verbose, rng) else {
            println!("{} has no valid moves.", color_name(side));
            break;
        };
        pos.execute_move(mv.from.0, mv.from.1, mv.to.0, mv.to.1);
        println!("{ply:>3}. {} {}", color_name(side), str_move(mv));
        if pos.get_winner().is_some() {
            break;
        }
    }

    println!();
    print!("{pos}");
    if !report_winner(&pos) {
        println!("No winner.");
    }
}
