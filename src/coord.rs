//! Conversion between tile numbers and board coordinates.
//!
//! Human-facing notation numbers the 32 dark squares 1..=32 in row-major
//! order: row 0 holds tiles 1-4 on columns 1, 3, 5, 7; row 1 holds tiles 5-8
//! on columns 0, 2, 4, 6; and so on down to tiles 29-32 on row 7.

use crate::board::{is_dark_square, Point};
use crate::constants::{N, TILES};

/// Map a tile number to its `(x, y)` coordinate.
///
/// Returns `None` for tiles outside `1..=32`.
pub fn tile_to_coord(tile: u8) -> Option<Point> {
    if !(1..=TILES).contains(&tile) {
        return None;
    }
    let t = (tile - 1) as usize;
    let y = t / 4;
    let x = (t % 4) * 2 + if y % 2 == 0 { 1 } else { 0 };
    Some((x, y))
}

/// Map an `(x, y)` coordinate back to its tile number.
///
/// Returns `None` if the coordinate is off the board or on a light square.
pub fn coord_to_tile(x: usize, y: usize) -> Option<u8> {
    if x >= N || y >= N || !is_dark_square(x, y) {
        return None;
    }
    let mut tile = 0u8;
    for r in 0..N {
        for c in 0..N {
            if is_dark_square(c, r) {
                tile += 1;
            }
            if (c, r) == (x, y) {
                return Some(tile);
            }
        }
    }
    None
}

/// Parse a tile number string (e.g. "21") into a coordinate.
pub fn parse_tile(s: &str) -> Option<Point> {
    s.trim().parse::<u8>().ok().and_then(tile_to_coord)
}

/// Convert a coordinate to its tile number string, or "-" if it has none.
pub fn str_tile(pt: Point) -> String {
    match coord_to_tile(pt.0, pt.1) {
        Some(t) => t.to_string(),
        None => "-".into(),
    }
}
