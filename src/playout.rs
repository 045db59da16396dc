//! Monte Carlo playouts (random game simulation).
//!
//! A playout plays uniformly random legal moves until one side is eliminated,
//! the side to move is stuck, or the ply limit is reached.

use crate::board::Color;
use crate::position::{play_move, Position};
use crate::rules::{legal_moves, winner, Move};

/// How a playout ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayoutEnd {
    /// One side has no pieces left
    Won(Color),
    /// The side to move has pieces but no legal moves
    Stuck(Color),
    /// The ply limit was reached first
    Limit,
}

impl PlayoutEnd {
    /// The eliminating side, if any. Stuck and limited playouts have no winner.
    pub fn winner(self) -> Option<Color> {
        match self {
            PlayoutEnd::Won(c) => Some(c),
            PlayoutEnd::Stuck(_) | PlayoutEnd::Limit => None,
        }
    }
}

/// Perform a random playout from the given position, mutating it in place.
///
/// Plays at most `max_len` plies. The caller owns `pos` and is expected to
/// pass a private copy.
pub fn mcplayout(pos: &mut Position, rng: &mut fastrand::Rng, max_len: usize) -> PlayoutEnd {
    for _ in 0..max_len {
        if let Some(c) = winner(pos.board()) {
            return PlayoutEnd::Won(c);
        }
        match choose_random_move(pos, rng) {
            Some(mv) => play_move(pos, mv),
            None => return PlayoutEnd::Stuck(pos.to_move()),
        }
    }
    match winner(pos.board()) {
        Some(c) => PlayoutEnd::Won(c),
        None => PlayoutEnd::Limit,
    }
}

/// Choose a legal move for the side to move uniformly at random.
fn choose_random_move(pos: &Position, rng: &mut fastrand::Rng) -> Option<Move> {
    let moves = legal_moves(pos.board(), pos.to_move());
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}
