//! Four-in-a-row detection against the most recently placed piece.

use crate::board::{Board, Player};

/// The four axes a connect four can lie on, as (row, column) steps:
/// horizontal, vertical, diagonal `/` and diagonal `\`.
const AXES: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Whether the piece at `index` is part of a four-in-a-row of its own color.
///
/// Only lines through `index` are considered, which is sufficient when the cell
/// holds the most recent placement. Panics on an empty cell.
pub(crate) fn wins_at(cells: &[Option<Player>], index: usize) -> bool {
    let color = cells[index].expect("win check on an empty cell");
    let row = (index / Board::WIDTH as usize) as i8;
    let col = (index % Board::WIDTH as usize) as i8;

    AXES.iter().any(|&(dr, dc)| {
        let run = 1 + count_matching(cells, color, row, col, dr, dc)
            + count_matching(cells, color, row, col, -dr, -dc);
        run >= 4
    })
}

/// Count same-colored pieces walking away from (`row`, `col`) in steps of
/// (`dr`, `dc`), up to the 3 that can still contribute to a four. The scan stops
/// at the board edge or at a mismatch. Walking in (row, column) space keeps
/// column 6 and column 0 of adjacent rows non-adjacent: a run can never wrap
/// around the side of the board the way a raw cell-index scan could.
fn count_matching(cells: &[Option<Player>], color: Player, row: i8, col: i8, dr: i8, dc: i8) -> u32 {
    let mut run = 0;
    for step in 1..=3 {
        let r = row + step * dr;
        let c = col + step * dc;
        if r < 0 || r >= Board::HEIGHT as i8 || c < 0 || c >= Board::WIDTH as i8 {
            break;
        }
        if cells[(r * Board::WIDTH as i8 + c) as usize] != Some(color) {
            break;
        }
        run += 1;
    }
    run
}
