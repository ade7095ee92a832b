//! A fixed-depth minimax agent for 'Connect 4' on boards of configurable size
//!
//! The agent scores positions with a window-based heuristic and searches
//! a fixed number of plies, mutating a single board in place and undoing
//! every simulated placement before returning.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Player}, game::select_computer_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new(7, 6)?;
//! for column in 0..3 {
//!     board.place(column, Player::Two)?;
//! }
//!
//! assert_eq!(select_computer_move(&mut board, Player::Two, Player::One)?, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod line;

pub mod evaluator;

pub mod solver;

pub mod game;

pub mod config;

pub mod move_log;


pub use board::{Board, Cell, Player};
pub use error::GameError;
pub use game::{Game, GameState};
pub use solver::Solver;

/// The smallest allowed board width in tiles
pub const MIN_WIDTH: usize = 4;

/// The largest allowed board width in tiles
pub const MAX_WIDTH: usize = 40;

/// The smallest allowed board height in tiles
pub const MIN_HEIGHT: usize = 4;

/// The largest allowed board height in tiles
pub const MAX_HEIGHT: usize = 20;

/// The number of plies searched after the computer's candidate move
pub const FIXED_DEPTH: usize = 5;

// every board must be able to hold a four-in-a-row in each direction
const_assert!(MIN_WIDTH >= 4 && MIN_HEIGHT >= 4);
const_assert!(MIN_WIDTH <= MAX_WIDTH && MIN_HEIGHT <= MAX_HEIGHT);
