//! Fixed-depth negamax search with randomized move ordering.
//!
//! The search explores the game tree by mutating one shared board in place:
//! make a move, evaluate the child recursively, undo the move. There is no
//! pruning and no positional evaluation, a leaf is worth something only when
//! somebody has already won.

use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::{Bot, NoLegalMoves};
use crate::board::Board;

/// Score of a position in which the side to move has already lost.
const LOSS_SCORE: i32 = -1_000_000;

/// Score of a quiet leaf. Every non-terminal leaf looks the same to this engine.
const LEAF_SCORE: i32 = 0;

/// Pick a column for the side to move on `board`, searching `depth` plies deep.
///
/// The open columns are shuffled first (Fisher-Yates, as implemented by `rand`).
/// At `depth` 0 the first shuffled column is returned as-is, which makes the
/// depth-0 search a uniform-random choice; at higher depths the shuffle
/// randomizes the tie-breaking among equally scored moves, since only a strictly
/// better score displaces the current best.
///
/// The board is mutated while searching but is always returned in exactly the
/// state it was given.
pub fn best_move(board: &mut Board, depth: u32, rng: &mut impl Rng) -> Result<u8, NoLegalMoves> {
    let mut moves = board.generate_moves();
    if moves.is_empty() {
        return Err(NoLegalMoves);
    }
    moves.shuffle(rng);

    if depth == 0 {
        return Ok(moves[0]);
    }

    let mut best_move = moves[0];
    let mut best_score = None;

    for &col in &moves {
        board.make_move(col).unwrap();
        let score = -search(board, depth - 1);
        board.undo_move().unwrap();

        if best_score.map_or(true, |best| score > best) {
            best_score = Some(score);
            best_move = col;
        }
    }

    Ok(best_move)
}

/// Value of `board` for the side to move, looking `depth` plies ahead.
///
/// Every call leaves the board and its history exactly as found, the
/// make/evaluate/undo discipline is the correctness contract of the whole
/// search: one unbalanced mutation here corrupts every later call.
fn search(board: &mut Board, depth: u32) -> i32 {
    let moves = board.generate_moves();
    if moves.is_empty() {
        // the previous ply completed a four-in-a-row or filled the board,
        // either way the side to move cannot win anymore
        return LOSS_SCORE;
    }
    if depth == 0 {
        return LEAF_SCORE;
    }

    let mut best = i32::MIN;
    for &col in &moves {
        board.make_move(col).unwrap();
        best = best.max(-search(board, depth - 1));
        board.undo_move().unwrap();
    }
    best
}

/// Bot wrapper around [best_move] with a fixed depth and its own random source.
pub struct NegamaxBot<R: Rng> {
    depth: u32,
    rng: R,
}

impl<R: Rng> NegamaxBot<R> {
    /// `depth` 0 is allowed and equivalent to
    /// [RandomBot](crate::ai::simple::RandomBot).
    pub fn new(depth: u32, rng: R) -> Self {
        NegamaxBot { depth, rng }
    }
}

impl<R: Rng> Debug for NegamaxBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "NegamaxBot {{ depth: {} }}", self.depth)
    }
}

impl<R: Rng> Bot for NegamaxBot<R> {
    fn select_move(&mut self, board: &mut Board) -> Result<u8, NoLegalMoves> {
        best_move(board, self.depth, &mut self.rng)
    }
}
