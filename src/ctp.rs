//! Checkers Text Protocol (CTP) implementation.
//!
//! A line-oriented protocol modelled on GTP. Each request is an optional
//! numeric id followed by a command and its arguments; each response is
//! `=[id] text` on success or `?[id] message` on failure, followed by a
//! blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `quit` - Exit the command loop
//! - `start` - Reset to a new game
//! - `showboard` - Print the board and side to move
//! - `turn` - Side to move (`light` or `dark`)
//! - `valid <x1> <y1> <x2> <y2>` - `true` if the move is legal
//! - `play <x1> <y1> <x2> <y2>` - Validate and play a move
//! - `moves` - Legal moves for the side to move, one per line
//! - `winner` - `light`, `dark` or `none`
//! - `genmove` - Choose a move with Monte Carlo search and play it
//! - `undo` - Take back the last move
//! - `tile <n>` - Coordinate of tile `n`
//! - `totile <x> <y>` - Tile number of a coordinate
//!
//! ## Example
//!
//! ```ignore
//! use checkers_rust::ctp::CtpEngine;
//! let mut engine = CtpEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::constants::N_SIMS;
use crate::coord::{coord_to_tile, tile_to_coord};
use crate::montecarlo::{dump_scores, search, select};
use crate::position::{GameError, Position};
use crate::rules::Move;

/// The list of known CTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "genmove",
    "known_command",
    "list_commands",
    "moves",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "start",
    "tile",
    "totile",
    "turn",
    "undo",
    "valid",
    "version",
    "winner",
];

/// CTP engine state.
pub struct CtpEngine {
    /// Current game position
    pos: Position,
    /// Number of playouts per candidate for `genmove`
    n_sims: usize,
    /// Random source for playouts
    rng: fastrand::Rng,
    /// Print search statistics to stderr
    verbose: bool,
}

impl Default for CtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CtpEngine {
    /// Create a new CTP engine with default settings.
    pub fn new() -> Self {
        Self::with_simulations(N_SIMS)
    }

    /// Create a new CTP engine with a specified number of playouts per candidate.
    pub fn with_simulations(n_sims: usize) -> Self {
        Self {
            pos: Position::new(),
            n_sims,
            rng: fastrand::Rng::new(),
            verbose: false,
        }
    }

    /// Use a fixed random seed for reproducible play.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Run the CTP command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary streams.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (prefix, message) = match self.execute(&command, args) {
                Ok(msg) => ('=', msg),
                Err(e) => ('?', e.to_string()),
            };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n").context("failed to write response")?;
            output.flush().context("failed to flush response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }

        (None, trimmed)
    }

    /// Parse exactly `n` unsigned integer arguments.
    fn parse_args(args: &[&str], n: usize) -> Result<Vec<usize>> {
        if args.len() < n {
            bail!("missing arguments");
        }
        args[..n]
            .iter()
            .map(|a| a.parse::<usize>().with_context(|| format!("invalid number: {a}")))
            .collect()
    }

    fn parse_move(args: &[&str]) -> Result<Move> {
        let v = Self::parse_args(args, 4)?;
        Ok(Move::new((v[0], v[1]), (v[2], v[3])))
    }

    /// Execute a CTP command and return the response text.
    fn execute(&mut self, command: &str, args: &[&str]) -> Result<String> {
        match command {
            "name" => Ok("checkers-rust".to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("1".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    bail!("missing argument");
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                Ok(known.to_string())
            }

            "quit" => Ok(String::new()),

            "start" => {
                self.pos.start();
                Ok(String::new())
            }

            "showboard" => Ok(format!("\n{}", self.pos)),

            "turn" => Ok(self.pos.to_move().to_string()),

            "valid" => {
                let mv = Self::parse_move(args)?;
                let (x1, y1) = mv.from;
                let (x2, y2) = mv.to;
                Ok(self.pos.is_valid_move(x1, y1, x2, y2).to_string())
            }

            "play" => {
                let mv = Self::parse_move(args)?;
                self.pos.try_move(mv)?;
                Ok(self.winner_text())
            }

            "moves" => Ok(self
                .pos
                .valid_moves()
                .iter()
                .map(Move::to_string)
                .collect::<Vec<_>>()
                .join("\n")),

            "winner" => Ok(self.winner_text()),

            "genmove" => {
                let stats = search(&self.pos, self.n_sims, &mut self.rng);
                if self.verbose {
                    dump_scores(&stats);
                }
                match select(&stats) {
                    Some(mv) => {
                        self.pos.try_move(mv)?;
                        Ok(mv.to_string())
                    }
                    None => Ok("none".to_string()),
                }
            }

            "undo" => {
                self.pos.undo()?;
                Ok(String::new())
            }

            "tile" => {
                let v = Self::parse_args(args, 1)?;
                let tile = u8::try_from(v[0]).map_err(|_| GameError::InvalidCoordinate)?;
                let (x, y) = tile_to_coord(tile).ok_or(GameError::InvalidCoordinate)?;
                Ok(format!("{x} {y}"))
            }

            "totile" => {
                let v = Self::parse_args(args, 2)?;
                let tile = coord_to_tile(v[0], v[1]).ok_or(GameError::InvalidCoordinate)?;
                Ok(tile.to_string())
            }

            _ => bail!("unknown command: {command}"),
        }
    }

    fn winner_text(&self) -> String {
        match self.pos.get_winner() {
            Some(c) => c.to_string(),
            None => "none".to_string(),
        }
    }
}
