//! Integration tests for checkers-rust
//!
//! These exercise the public operation set end to end: the starting layout,
//! tile notation, the move rules, execution with undo, winner detection and
//! the Monte Carlo policy.

use checkers_rust::board::{is_dark_square, Board, Color, Piece, Rank};
use checkers_rust::constants::{N, TILES};
use checkers_rust::coord::{coord_to_tile, tile_to_coord};
use checkers_rust::montecarlo::{best_move, search};
use checkers_rust::position::{play_move, undo_move, GameError, Position};
use checkers_rust::rules::{is_legal, legal_moves, Move};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

/// Build a position from explicit pieces, with no history.
fn setpos(pieces: &[((usize, usize), Piece)], to_move: Color) -> Position {
    let mut board = Board::new();
    for &((x, y), p) in pieces {
        board.set(x, y, Some(p));
    }
    Position::from_board(board, to_move)
}

/// Play a sequence of moves given as tile pairs, checking each one first.
fn play_tiles(pos: &mut Position, moves: &[(u8, u8)]) {
    for &(a, b) in moves {
        let mv = Move::new(tile_to_coord(a).unwrap(), tile_to_coord(b).unwrap());
        assert!(
            is_legal(pos.board(), mv, pos.to_move()),
            "move {a}-{b} should be legal"
        );
        play_move(pos, mv);
    }
}

// =============================================================================
// Initial layout
// =============================================================================

#[test]
fn test_initial_layout() {
    let pos = Position::new();
    let mut light = 0;
    let mut dark = 0;

    for y in 0..N {
        for x in 0..N {
            let Some(p) = pos.board().get(x, y) else {
                continue;
            };
            assert!(is_dark_square(x, y), "piece at ({x},{y}) on a light square");
            assert_eq!(p.rank, Rank::Man, "no kings at the start");
            match p.color {
                Color::Dark => {
                    dark += 1;
                    assert!(y <= 2, "dark piece on row {y}");
                }
                Color::Light => {
                    light += 1;
                    assert!(y >= 5, "light piece on row {y}");
                }
            }
        }
    }

    assert_eq!(dark, 12);
    assert_eq!(light, 12);
    assert_eq!(pos.to_move(), Color::Light);
    assert_eq!(pos.history_len(), 0);
}

// =============================================================================
// Coordinate conversion
// =============================================================================

#[test]
fn test_tile_roundtrip() {
    for t in 1..=TILES {
        let (x, y) = tile_to_coord(t).unwrap();
        assert_eq!(coord_to_tile(x, y), Some(t));
    }
    for y in 0..N {
        for x in 0..N {
            match coord_to_tile(x, y) {
                Some(t) => assert_eq!(tile_to_coord(t), Some((x, y))),
                None => assert!(!is_dark_square(x, y)),
            }
        }
    }
}

#[test]
fn test_tiles_cover_start_rows() {
    let pos = Position::new();
    for t in 1..=12 {
        let (x, y) = tile_to_coord(t).unwrap();
        assert_eq!(pos.board().get(x, y), Some(Piece::man(Color::Dark)));
    }
    for t in 21..=32 {
        let (x, y) = tile_to_coord(t).unwrap();
        assert_eq!(pos.board().get(x, y), Some(Piece::man(Color::Light)));
    }
}

// =============================================================================
// Move rules
// =============================================================================

#[test]
fn test_legality_on_fresh_board() {
    let pos = Position::new();
    // Step up-left and up-right
    assert!(pos.is_valid_move(2, 5, 1, 4));
    assert!(pos.is_valid_move(2, 5, 3, 4));
    // Backward for a man
    assert!(!pos.is_valid_move(2, 5, 1, 6));
    // (1,5) and (0,4) are light squares: nothing sits there to move
    assert!(!pos.is_valid_move(1, 5, 0, 4));
    // Dark may not move on light's turn
    assert!(!pos.is_valid_move(1, 2, 0, 3));
}

#[test]
fn test_king_moves_both_ways() {
    let pos = setpos(
        &[
            ((3, 4), Piece::king(Color::Dark)),
            ((0, 7), Piece::man(Color::Light)),
        ],
        Color::Dark,
    );
    let moves = legal_moves(pos.board(), Color::Dark);
    assert_eq!(
        moves,
        vec![
            Move::new((3, 4), (2, 3)),
            Move::new((3, 4), (4, 3)),
            Move::new((3, 4), (2, 5)),
            Move::new((3, 4), (4, 5)),
        ]
    );
}

#[test]
fn test_jump_priority() {
    let mut pos = Position::new();
    // 22-18 puts light on (3,4); 11-15 brings dark to (4,3) and vacates (5,2)
    play_tiles(&mut pos, &[(22, 18), (11, 15)]);
    let moves = legal_moves(pos.board(), pos.to_move());
    assert!(!moves.is_empty());
    assert!(moves.iter().all(Move::is_jump), "only jumps expected: {moves:?}");
}

#[test]
fn test_get_all_valid_moves_on_hypothetical_board() {
    let pos = Position::new();
    let other = setpos(&[((2, 5), Piece::man(Color::Light))], Color::Light);
    let moves = pos.get_all_valid_moves(other.board(), Color::Light);
    assert_eq!(moves.len(), 2);
    // Live board untouched
    assert_eq!(pos, Position::new());
}

// =============================================================================
// Execution and history
// =============================================================================

#[test]
fn test_capture_removal() {
    let mut pos = Position::new();
    play_tiles(&mut pos, &[(22, 18), (11, 15)]);
    let dark_before = pos.board().count(Color::Dark);

    let jump = legal_moves(pos.board(), pos.to_move())[0];
    let (mx, my) = jump.captured().unwrap();
    assert!(pos.board().get(mx, my).is_some());
    play_move(&mut pos, jump);

    assert_eq!(pos.board().get(mx, my), None);
    assert_eq!(pos.board().count(Color::Dark), dark_before - 1);
    assert_eq!(pos.board().count(Color::Light), 12);
}

#[test]
fn test_promotion_allows_backward_moves() {
    let mut pos = setpos(
        &[
            ((5, 2), Piece::man(Color::Dark)),
            ((4, 1), Piece::man(Color::Light)),
        ],
        Color::Light,
    );
    pos.try_move(Move::new((4, 1), (3, 0))).unwrap();
    assert_eq!(pos.board().get(3, 0), Some(Piece::king(Color::Light)));

    pos.try_move(Move::new((5, 2), (6, 3))).unwrap();
    assert!(pos.is_valid_move(3, 0, 2, 1));
    assert!(pos.is_valid_move(3, 0, 4, 1));
}

#[test]
fn test_undo_is_inverse() {
    let mut pos = Position::new();
    let before = pos.clone();
    let mut rng = fastrand::Rng::with_seed(2024);

    let mut played = 0;
    for _ in 0..20 {
        let moves = pos.valid_moves();
        if moves.is_empty() || pos.get_winner().is_some() {
            break;
        }
        let mv = moves[rng.usize(..moves.len())];
        pos.try_move(mv).unwrap();
        played += 1;
    }
    assert_eq!(pos.history_len(), played);

    for _ in 0..played {
        undo_move(&mut pos).unwrap();
    }
    assert_eq!(pos, before);
    assert_eq!(pos.history_len(), 0);
    assert_eq!(undo_move(&mut pos), Err(GameError::EmptyHistory));
}

// =============================================================================
// Winner detection
// =============================================================================

#[test]
fn test_winner_detection() {
    let light_only = setpos(&[((1, 0), Piece::man(Color::Light))], Color::Dark);
    assert_eq!(light_only.get_winner(), Some(Color::Light));

    let dark_only = setpos(&[((0, 1), Piece::king(Color::Dark))], Color::Light);
    assert_eq!(dark_only.get_winner(), Some(Color::Dark));

    assert_eq!(Position::new().get_winner(), None);
}

#[test]
fn test_last_capture_wins() {
    let mut pos = setpos(
        &[
            ((3, 4), Piece::man(Color::Light)),
            ((2, 3), Piece::man(Color::Dark)),
        ],
        Color::Light,
    );
    assert_eq!(pos.get_winner(), None);
    pos.try_move(Move::new((3, 4), (1, 2))).unwrap();
    assert_eq!(pos.get_winner(), Some(Color::Light));
}

// =============================================================================
// Monte Carlo policy
// =============================================================================

#[test]
fn test_monte_carlo_zero_sims() {
    let pos = Position::new();
    let mut rng = fastrand::Rng::with_seed(0);
    assert_eq!(
        pos.monte_carlo_move(0, &mut rng),
        Some(legal_moves(pos.board(), Color::Light)[0])
    );
}

#[test]
fn test_monte_carlo_no_moves() {
    let pos = setpos(
        &[
            ((1, 0), Piece::man(Color::Light)),
            ((0, 7), Piece::man(Color::Dark)),
        ],
        Color::Dark,
    );
    let mut rng = fastrand::Rng::with_seed(0);
    assert_eq!(best_move(&pos, 10, &mut rng), None);
}

#[test]
fn test_monte_carlo_reproducible() {
    let mut pos = Position::new();
    pos.execute_move(0, 5, 1, 4);
    let before = pos.clone();

    let a = pos.monte_carlo_move(5, &mut fastrand::Rng::with_seed(99));
    let b = pos.monte_carlo_move(5, &mut fastrand::Rng::with_seed(99));
    assert_eq!(a, b);
    assert_eq!(pos, before);

    let mv = a.unwrap();
    assert!(is_legal(pos.board(), mv, Color::Dark));
}

#[test]
fn test_monte_carlo_scores_bounded() {
    let pos = Position::new();
    let stats = search(&pos, 3, &mut fastrand::Rng::with_seed(8));
    assert_eq!(stats.len(), 7);
    for s in &stats {
        assert!(s.score.abs() <= 3);
    }
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn test_end_to_end() {
    let mut pos = Position::new();
    pos.start();

    assert!(pos.is_valid_move(0, 5, 1, 4));
    pos.execute_move(0, 5, 1, 4);

    assert_eq!(pos.to_move(), Color::Dark);
    assert_eq!(pos.board().get(1, 4), Some(Piece::man(Color::Light)));
    assert_eq!(pos.board().get(0, 5), None);
    assert_eq!(pos.get_winner(), None);

    // Computer answers and the move goes through the same executor
    let mut rng = fastrand::Rng::with_seed(31);
    let reply = pos.monte_carlo_move(4, &mut rng).unwrap();
    pos.try_move(reply).unwrap();
    assert_eq!(pos.to_move(), Color::Light);
    assert_eq!(pos.history_len(), 2);

    pos.undo().unwrap();
    pos.undo().unwrap();
    assert_eq!(pos, Position::new());
}

#[test]
fn test_accessors_follow_executed_moves() {
    let mut pos = Position::new();
    let start = *pos.board();
    pos.execute_move(2, 5, 3, 4);

    assert_eq!(pos.to_move(), Color::Dark);
    assert_ne!(*pos.board(), start);
    assert_eq!(pos.history_len(), 1);

    // The borrowed board is a view; changing a copy leaves the game alone
    let mut copy = *pos.board();
    copy.set(3, 4, None);
    assert_eq!(pos.board().get(3, 4), Some(Piece::man(Color::Light)));

    pos.undo().unwrap();
    assert_eq!(*pos.board(), start);
    assert_eq!(pos.to_move(), Color::Light);
}
