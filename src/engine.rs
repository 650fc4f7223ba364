//! The engine facade consumed by an interface layer.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ai::{negamax, NoLegalMoves};
use crate::board::{Board, EmptyHistory, Placement, PlayError};
use crate::difficulty::Difficulty;

/// One game of Connect Four plus the automated player's difficulty and random source.
///
/// This is the single instance an interface layer holds on to: human turns go
/// through [make_move](Self::make_move), engine turns ask
/// [get_best_move](Self::get_best_move) for a column and then play it with
/// `make_move` as well. Callers are expected to check
/// [is_game_over](Self::is_game_over) before issuing further moves.
///
/// The engine is single-writer and not reentrant: `get_best_move` searches by
/// mutating the board in place, so no other engine call may run concurrently
/// with it. A caller that needs access from multiple threads has to add its own
/// mutual exclusion around the whole instance.
#[derive(Debug)]
pub struct Engine<R: Rng = SmallRng> {
    board: Board,
    difficulty: Difficulty,
    rng: R,
}

impl Engine<SmallRng> {
    /// Create an engine with an entropy-seeded random source.
    pub fn new(difficulty: Difficulty) -> Self {
        Engine::with_rng(difficulty, SmallRng::from_entropy())
    }
}

impl Default for Engine<SmallRng> {
    fn default() -> Self {
        Engine::new(Difficulty::default())
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine with an explicit random source, so tests can fix the
    /// seed and assert deterministic move choices.
    pub fn with_rng(difficulty: Difficulty, rng: R) -> Self {
        Engine {
            board: Board::new(),
            difficulty,
            rng,
        }
    }

    /// The board being played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change the depth used by future [get_best_move](Self::get_best_move) calls.
    /// The game in progress is not touched.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Start over: empty board, player A to move. Callable mid-game.
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// Drop a piece of the side to move into `column`. See [Board::make_move].
    pub fn make_move(&mut self, column: u8) -> Result<Placement, PlayError> {
        self.board.make_move(column)
    }

    /// Take back the most recent move. See [Board::undo_move].
    pub fn undo_move(&mut self) -> Result<(), EmptyHistory> {
        self.board.undo_move()
    }

    /// Pick a column for the side to move, searching as deep as the current
    /// difficulty allows. The board is unchanged afterwards; playing the returned
    /// column is up to the caller.
    pub fn get_best_move(&mut self) -> Result<u8, NoLegalMoves> {
        negamax::best_move(&mut self.board, self.difficulty.search_depth(), &mut self.rng)
    }

    /// Whether the game has ended, by four-in-a-row or by a full board.
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }
}
