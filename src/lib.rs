//! Checkers-Rust: a checkers rule engine with a Monte Carlo opponent.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and engine parameters
//! - [`board`] - Board state, pieces and the starting layout
//! - [`coord`] - Tile number (1-32) to coordinate conversion
//! - [`rules`] - Move legality, move generation and winner detection
//! - [`position`] - Live game with move execution and undo history
//! - [`playout`] - Random game simulation
//! - [`montecarlo`] - Move selection by random playouts
//! - [`ctp`] - Text protocol front end
//!
//! ## Example
//!
//! ```
//! use checkers_rust::position::Position;
//!
//! // Create a new game, light to move
//! let mut pos = Position::new();
//!
//! // Play a move
//! assert!(pos.is_valid_move(0, 5, 1, 4));
//! pos.execute_move(0, 5, 1, 4);
//!
//! // Let the computer answer for dark
//! let mut rng = fastrand::Rng::with_seed(7);
//! let reply = pos.monte_carlo_move(20, &mut rng).unwrap();
//! println!("Best move: {reply}");
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod ctp;
pub mod montecarlo;
pub mod playout;
pub mod position;
pub mod rules;
