//! Move legality, move enumeration and winner detection.
//!
//! Every function here works on a `&Board` passed in by the caller, so the
//! same rules serve the live game, hypothetical boards and playouts alike.
//! Nothing in this module fails: illegal input simply yields `false`, an
//! empty list or `None`.

use crate::board::{is_dark_square, Board, Color, Point};
use crate::constants::N;

/// Classification of a move by its displacement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// One square diagonally.
    Step,
    /// Two squares diagonally over the captured piece.
    Jump,
    /// Any other displacement; never legal.
    Other,
}

/// A move from one coordinate to another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Point,
    pub to: Point,
}

impl Move {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Signed displacement `(dx, dy)`.
    #[inline]
    pub fn delta(&self) -> (isize, isize) {
        (
            self.to.0 as isize - self.from.0 as isize,
            self.to.1 as isize - self.from.1 as isize,
        )
    }

    pub fn kind(&self) -> MoveKind {
        match self.delta() {
            (dx, dy) if dx.abs() == 1 && dy.abs() == 1 => MoveKind::Step,
            (dx, dy) if dx.abs() == 2 && dy.abs() == 2 => MoveKind::Jump,
            _ => MoveKind::Other,
        }
    }

    #[inline]
    pub fn is_jump(&self) -> bool {
        self.kind() == MoveKind::Jump
    }

    /// The square jumped over, if this is a jump.
    pub fn captured(&self) -> Option<Point> {
        self.is_jump().then(|| {
            (
                (self.from.0 + self.to.0) / 2,
                (self.from.1 + self.to.1) / 2,
            )
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// Check whether `mv` is legal for `to_move` on `board`.
///
/// Men step or jump only toward their opponent's side; kings in any diagonal
/// direction. A jump must pass over an opposing piece. Captures are not
/// mandatory here; that is left to [`legal_moves`].
pub fn is_legal(board: &Board, mv: Move, to_move: Color) -> bool {
    let ((x1, y1), (x2, y2)) = (mv.from, mv.to);
    if x1 >= N || y1 >= N || x2 >= N || y2 >= N {
        return false;
    }
    let Some(piece) = board.get(x1, y1) else {
        return false;
    };
    if board.get(x2, y2).is_some() || piece.color != to_move {
        return false;
    }

    let (_, dy) = mv.delta();
    let direction_ok = piece.is_king() || dy.signum() == piece.color.forward();

    match mv.kind() {
        MoveKind::Step => direction_ok,
        MoveKind::Jump => {
            let Some((mx, my)) = mv.captured() else {
                return false;
            };
            let over_opponent = board
                .get(mx, my)
                .is_some_and(|p| p.color == piece.color.opponent());
            direction_ok && over_opponent
        }
        MoveKind::Other => false,
    }
}

/// Generate all legal moves for `to_move` on `board`.
///
/// Origins and destinations are both scanned row-major, so the order is
/// deterministic. If any jump exists only jumps are returned. Each jump is a
/// single hop; chained captures are not followed.
pub fn legal_moves(board: &Board, to_move: Color) -> Vec<Move> {
    let mut steps = Vec::new();
    let mut jumps = Vec::new();

    for (from, piece) in board.pieces() {
        if piece.color != to_move {
            continue;
        }
        for y2 in 0..N {
            for x2 in 0..N {
                if !is_dark_square(x2, y2) {
                    continue;
                }
                let mv = Move::new(from, (x2, y2));
                if is_legal(board, mv, to_move) {
                    if mv.is_jump() {
                        jumps.push(mv);
                    } else {
                        steps.push(mv);
                    }
                }
            }
        }
    }

    if jumps.is_empty() { steps } else { jumps }
}

/// Return the winner if one side has no pieces left.
///
/// A side that still has pieces but no legal moves is not treated as lost.
pub fn winner(board: &Board) -> Option<Color> {
    if board.count(Color::Light) == 0 {
        return Some(Color::Dark);
    }
    if board.count(Color::Dark) == 0 {
        return Some(Color::Light);
    }
    None
}
