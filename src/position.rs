//! Game position: the live board, the side to move and the undo history.
//!
//! Moves are applied through [`play_move`], which records a full copy of the
//! board and side to move before mutating anything. [`undo_move`] restores
//! the latest copy. History entries are never touched after being pushed.
//!
//! The coordinate-based methods on [`Position`] (`is_valid_move`,
//! `execute_move`, ...) form the operation set used by front ends such as the
//! text protocol in [`crate::ctp`].

use std::fmt;

use crate::board::{Board, Color, Piece, Rank};
use crate::montecarlo;
use crate::rules::{is_legal, legal_moves, winner, Move};

/// Errors surfaced by the position's boundary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A tile or coordinate outside the playable range
    InvalidCoordinate,
    /// The move fails the legality rules for the side to move
    IllegalMove,
    /// Undo requested with no recorded moves
    EmptyHistory,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCoordinate => write!(f, "invalid coordinate"),
            GameError::IllegalMove => write!(f, "illegal move"),
            GameError::EmptyHistory => write!(f, "no moves to undo"),
        }
    }
}

impl std::error::Error for GameError {}

/// A checkers position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Live board
    board: Board,
    /// Side to move
    to_move: Color,
    /// Snapshots of (board, side to move) taken before each move, oldest first
    history: Vec<(Board, Color)>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// A position in the standard starting layout with light to move.
    pub fn new() -> Self {
        let mut pos = Position {
            board: Board::new(),
            to_move: Color::Light,
            history: Vec::new(),
        };
        pos.start();
        pos
    }

    /// A position with an arbitrary board and side to move and no history.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
        }
    }

    /// Copy of the board and side to move without the history.
    ///
    /// Playouts work on these so the live game is never touched.
    pub fn snapshot(&self) -> Self {
        Self::from_board(self.board, self.to_move)
    }

    /// Reset to the starting layout, light to move, history cleared.
    pub fn start(&mut self) {
        self.board.start();
        self.to_move = Color::Light;
        self.history.clear();
    }

    /// The live board. Mutation goes through [`play_move`] only.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Number of moves that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Check a move given as coordinates against the side to move.
    pub fn is_valid_move(&self, x1: usize, y1: usize, x2: usize, y2: usize) -> bool {
        is_legal(&self.board, Move::new((x1, y1), (x2, y2)), self.to_move)
    }

    /// Apply a move given as coordinates.
    ///
    /// The move must already have been validated with
    /// [`Position::is_valid_move`].
    pub fn execute_move(&mut self, x1: usize, y1: usize, x2: usize, y2: usize) {
        play_move(self, Move::new((x1, y1), (x2, y2)));
    }

    /// Validate and apply a move in one call.
    pub fn try_move(&mut self, mv: Move) -> Result<(), GameError> {
        if !is_legal(&self.board, mv, self.to_move) {
            return Err(GameError::IllegalMove);
        }
        play_move(self, mv);
        Ok(())
    }

    pub fn get_winner(&self) -> Option<Color> {
        winner(&self.board)
    }

    /// Legal moves for `side` on an arbitrary board.
    pub fn get_all_valid_moves(&self, board: &Board, side: Color) -> Vec<Move> {
        legal_moves(board, side)
    }

    /// Legal moves for the side to move on the live board.
    pub fn valid_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.to_move)
    }

    /// Pick a move for the side to move with the Monte Carlo policy.
    ///
    /// Returns `None` when the side to move has no legal moves. The position
    /// itself is left unchanged.
    pub fn monte_carlo_move(&self, sims: usize, rng: &mut fastrand::Rng) -> Option<Move> {
        montecarlo::best_move(self, sims, rng)
    }

    pub fn undo(&mut self) -> Result<(), GameError> {
        undo_move(self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "Current turn: {}", self.to_move)
    }
}

/// Apply a move to the position.
///
/// The move is assumed legal for the side to move. A snapshot is pushed to
/// the history, the piece is relocated, a jumped piece is removed, a man
/// reaching its last row is crowned, and the turn passes to the opponent.
pub fn play_move(pos: &mut Position, mv: Move) {
    pos.history.push((pos.board, pos.to_move));

    let (x1, y1) = mv.from;
    let (x2, y2) = mv.to;
    let piece = pos.board.get(x1, y1);
    pos.board.set(x2, y2, piece);
    pos.board.set(x1, y1, None);

    if let Some((mx, my)) = mv.captured() {
        pos.board.set(mx, my, None);
    }

    if let Some(p) = piece {
        if p.rank == Rank::Man && y2 == p.color.promotion_row() {
            pos.board.set(x2, y2, Some(Piece::king(p.color)));
        }
    }

    pos.to_move = pos.to_move.opponent();
}

/// Restore the position to the state before the most recent move.
///
/// # Errors
/// - `GameError::EmptyHistory` if no move has been played since `start`
pub fn undo_move(pos: &mut Position) -> Result<(), GameError> {
    let (board, to_move) = pos.history.pop().ok_or(GameError::EmptyHistory)?;
    pos.board = board;
    pos.to_move = to_move;
    Ok(())
}
