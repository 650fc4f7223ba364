#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! A [Connect Four](https://en.wikipedia.org/wiki/Connect_Four) engine for two players,
//! one of which can be automated.
//!
//! The crate is split along the same lines as the game itself:
//! * [Board](crate::board::Board) owns the 7x6 grid and the move history,
//!     and implements gravity placement, exact undo and legal-move generation.
//! * [Difficulty](crate::difficulty::Difficulty) maps the three playing strengths
//!     to a search depth in plies.
//! * The [ai](crate::ai) module contains the move-selection algorithms:
//!     * [RandomBot](crate::ai::simple::RandomBot), which picks a uniform-random open column.
//!     * [NegamaxBot](crate::ai::negamax::NegamaxBot), a fixed-depth negamax search with
//!         randomized move ordering and no pruning.
//! * [Engine](crate::engine::Engine) bundles a board, a difficulty and a random source
//!     into the single-instance surface a UI layer talks to.
//!
//! There are also some utilities that help with testing and with comparing playing
//! strength, see [util](crate::util).
//!
//! # Examples
//!
//! ## Play a game between a human column choice and the engine
//!
//! ```
//! use connect4_engine::difficulty::Difficulty;
//! use connect4_engine::engine::Engine;
//!
//! let mut engine = Engine::new(Difficulty::Hard);
//!
//! // the human drops a piece in the middle column
//! let placed = engine.make_move(3).unwrap();
//! assert!(!placed.winning_move);
//!
//! // the engine answers
//! if !engine.is_game_over() {
//!     let col = engine.get_best_move().unwrap();
//!     engine.make_move(col).unwrap();
//! }
//! ```
//!
//! ## Drive the board directly
//!
//! ```
//! use connect4_engine::board::{Board, Player};
//!
//! let mut board = Board::new();
//! board.make_move(0).unwrap();
//! assert_eq!(board.tile(0, 0), Some(Player::A));
//! assert_eq!(board.next_player(), Player::B);
//! ```

pub mod board;
mod wins;

pub mod difficulty;

pub mod ai;

pub mod engine;

pub mod util;
