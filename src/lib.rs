//! A minimax agent for playing the board game 'Connect 4'
//!
//! The agent searches a fixed number of plies ahead with alpha-beta pruning
//! and scores the positions it reaches with a hand-written heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{ArrayBoard, Board, Player, SearchEngine};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has three in a row along the bottom
//! let board = ArrayBoard::from_moves(7, 6, "172737")?;
//! let mut engine = SearchEngine::new(Player::One, SmallRng::seed_from_u64(0));
//!
//! assert_eq!(engine.choose_move(&board), Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod arrayboard;

pub mod game_state;

pub mod evaluator;

pub mod search;

pub mod selfplay;


pub use arrayboard::ArrayBoard;
pub use board::{Board, Cell, Player};
pub use evaluator::Evaluator;
pub use game_state::GameState;
pub use search::{SearchEngine, SearchStatistics};

/// The default width of the game board in tiles
pub const WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The largest number of tiles an `ArrayBoard` can hold
pub const MAX_CELLS: usize = 64;

/// The default number of plies searched by a `SearchEngine`
pub const DEFAULT_DEPTH: usize = 3;

// ensure the default board fits in the flat cell array
const_assert!(WIDTH * HEIGHT <= MAX_CELLS);
