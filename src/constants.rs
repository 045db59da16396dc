//! Constants for board dimensions and engine parameters.
//!
//! The board is a fixed 8x8 grid addressed by `(x, y)` with `x` the column and
//! `y` the row, both in `0..N`. Only the 32 dark squares, where `x + y` is
//! odd, ever hold a piece.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Total number of cells in the row-major board array.
pub const BOARDSIZE: usize = N * N;

/// Number of playable (dark) squares, numbered 1..=TILES in human notation.
pub const TILES: u8 = 32;

/// Rows filled with pieces for each side at the start of a game.
pub const START_ROWS: usize = 3;

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Default number of playouts per candidate move.
pub const N_SIMS: usize = 100;

/// Maximum plies in a single playout before it is scored as undecided.
pub const MAX_PLAYOUT_LEN: usize = 400;

/// Maximum plies in a self-play demo game.
pub const MAX_GAME_LEN: usize = 300;
