//! Utilities to build a `Board` in a known or random state.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;

/// Play the given columns, starting from `start`.
/// Panics on a move that cannot be played, this is meant for scripted test positions.
pub fn board_with_moves(start: Board, moves: &[u8]) -> Board {
    let mut curr = start;
    for &col in moves {
        assert!(!curr.is_game_over(), "Board already done, playing {} on\n{}", col, curr);
        if let Err(e) = curr.make_move(col) {
            panic!("Move {} not available ({}) on\n{}", col, e, curr);
        }
    }
    curr
}

/// Generate a `Board` by playing `n` random moves on `start`, starting over
/// whenever the game ends before `n` moves have been played.
pub fn random_board_with_moves(start: &Board, n: u32, rng: &mut impl Rng) -> Board {
    'new_try: loop {
        let mut board = start.clone();
        for _ in 0..n {
            match board.generate_moves().choose(rng) {
                Some(&col) => {
                    board.make_move(col).unwrap();
                }
                None => continue 'new_try,
            }
        }
        return board;
    }
}
