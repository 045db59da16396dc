//! Board state: an 8x8 grid of cells, each empty or holding a piece.
//!
//! The board is a plain owned value. Copying it yields a fully independent
//! board, which is what the undo history and the playouts rely on.

use std::fmt;

use crate::constants::{BOARDSIZE, N, START_ROWS};

/// Side of a piece. Light moves first and travels toward row 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row direction a man of this color moves in.
    pub fn forward(self) -> isize {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row on which a man of this color is promoted.
    pub fn promotion_row(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => N - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    pub const fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    fn symbol(self) -> char {
        match (self.color, self.rank) {
            (Color::Light, Rank::Man) => 'w',
            (Color::Light, Rank::King) => 'W',
            (Color::Dark, Rank::Man) => 'b',
            (Color::Dark, Rank::King) => 'B',
        }
    }
}

/// A board coordinate `(x, y)`: column, then row.
pub type Point = (usize, usize);

/// A cell is either empty or holds exactly one piece.
pub type Cell = Option<Piece>;

/// True if `(x, y)` is a dark (playable) square.
#[inline]
pub fn is_dark_square(x: usize, y: usize) -> bool {
    (x + y) % 2 == 1
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARDSIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARDSIZE],
        }
    }

    /// A board in the standard starting layout.
    pub fn start_position() -> Self {
        let mut board = Self::new();
        board.start();
        board
    }

    #[inline]
    fn idx(x: usize, y: usize) -> usize {
        y * N + x
    }

    /// Read a cell. Out-of-bounds coordinates read as empty.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= N || y >= N {
            return None;
        }
        self.cells[Self::idx(x, y)]
    }

    /// Write a cell. Panics on out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[Self::idx(x, y)] = cell;
    }

    /// Reset to the initial layout: dark men on the dark squares of the first
    /// three rows, light men on those of the last three.
    pub fn start(&mut self) {
        self.cells = [None; BOARDSIZE];
        for y in 0..N {
            let color = if y < START_ROWS {
                Color::Dark
            } else if y >= N - START_ROWS {
                Color::Light
            } else {
                continue;
            };
            for x in 0..N {
                if is_dark_square(x, y) {
                    self.set(x, y, Some(Piece::man(color)));
                }
            }
        }
    }

    /// Iterate over occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Point, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|p| ((i % N, i / N), p)))
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..N {
            write!(f, " {x}")?;
        }
        writeln!(f)?;
        writeln!(f, " +{}+", "-".repeat(2 * N + 1))?;
        for y in 0..N {
            write!(f, "{y}|")?;
            for x in 0..N {
                let ch = match self.get(x, y) {
                    Some(p) => p.symbol(),
                    None if is_dark_square(x, y) => '.',
                    None => ' ',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, " +{}+", "-".repeat(2 * N + 1))
    }
}
