//! The simplest possible bot: `RandomBot`.
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::{Bot, NoLegalMoves};
use crate::board::Board;

/// Bot that chooses uniformly among the open columns.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &mut Board) -> Result<u8, NoLegalMoves> {
        board.generate_moves().choose(&mut self.rng).copied().ok_or(NoLegalMoves)
    }
}
