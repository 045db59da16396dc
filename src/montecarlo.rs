//! Flat Monte Carlo move selection.
//!
//! Every legal move of the side to move is scored by running a fixed number
//! of random playouts after it:
//! - +1 when the side that chose the move eliminates the opponent
//! - -1 when the opponent wins
//! - 0 when the playout gets stuck or hits the ply limit
//!
//! Each playout runs on its own copy of the position; the live game is only
//! read.

use crate::constants::MAX_PLAYOUT_LEN;
use crate::playout::mcplayout;
use crate::position::{play_move, Position};
use crate::rules::{legal_moves, Move};

/// Accumulated playout result for one candidate move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveStats {
    pub mv: Move,
    /// Net wins minus losses
    pub score: i64,
    /// Number of playouts run
    pub sims: usize,
}

/// Score every candidate move with `sims` playouts each.
///
/// Candidates are returned in enumeration order.
pub fn search(pos: &Position, sims: usize, rng: &mut fastrand::Rng) -> Vec<MoveStats> {
    search_with_limit(pos, sims, MAX_PLAYOUT_LEN, rng)
}

/// Like [`search`], with an explicit per-playout ply limit.
pub fn search_with_limit(
    pos: &Position,
    sims: usize,
    max_len: usize,
    rng: &mut fastrand::Rng,
) -> Vec<MoveStats> {
    let me = pos.to_move();
    let opp = me.opponent();

    legal_moves(pos.board(), me)
        .into_iter()
        .map(|mv| {
            let mut score = 0i64;
            for _ in 0..sims {
                let mut sim = pos.snapshot();
                play_move(&mut sim, mv);
                match mcplayout(&mut sim, rng, max_len).winner() {
                    Some(c) if c == me => score += 1,
                    Some(c) if c == opp => score -= 1,
                    _ => {}
                }
            }
            MoveStats { mv, score, sims }
        })
        .collect()
}

/// Pick the candidate with the strictly highest score.
///
/// Ties go to the earliest candidate. Returns `None` for an empty slice.
pub fn select(stats: &[MoveStats]) -> Option<Move> {
    let mut best: Option<&MoveStats> = None;
    for s in stats {
        if best.is_none_or(|b| s.score > b.score) {
            best = Some(s);
        }
    }
    best.map(|s| s.mv)
}

/// Find the best move for the side to move.
///
/// Returns `None` if the side to move has no legal moves. With `sims == 0`
/// no playouts run and the first enumerated move is returned.
pub fn best_move(pos: &Position, sims: usize, rng: &mut fastrand::Rng) -> Option<Move> {
    select(&search(pos, sims, rng))
}

/// Print per-candidate scores to stderr.
pub fn dump_scores(stats: &[MoveStats]) {
    for s in stats {
        eprintln!("move {} score={} sims={}", s.mv, s.score, s.sims);
    }
}
