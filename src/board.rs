use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::wins;

/// One of the two players. `A` always moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// Error returned when a move cannot be played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayError {
    /// The column index is outside the board.
    InvalidColumn,
    /// The column has no empty cell left.
    ColumnFull,
}

/// Error returned when there is no move left to undo.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct EmptyHistory;

/// The result of a successful placement, everything a caller needs to render the move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    /// The row the piece settled in, 0 is the bottom row.
    pub row: u8,
    /// The color of the placed piece.
    pub player: Player,
    /// Whether this placement completed a four-in-a-row.
    pub winning_move: bool,
}

/// The Connect4 board on a 7x6 grid, together with the history of played moves.
///
/// Cells are stored in a flat row-major array, index = `row * 7 + column` with
/// row 0 at the bottom, so a piece dropped into a column settles at the lowest
/// index of that column. The history records the cell index of every placement
/// in play order and is the single source of truth for undo and for whose turn
/// it is: player A moves on even history lengths.
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    cells: [Option<Player>; Board::TILES as usize],
    history: Vec<u8>,
}

impl Board {
    pub const WIDTH: u8 = 7;
    pub const HEIGHT: u8 = 6;
    pub const TILES: u8 = Self::WIDTH * Self::HEIGHT;

    /// An empty board, player A to move.
    pub fn new() -> Self {
        Board {
            cells: [None; Self::TILES as usize],
            history: Vec::with_capacity(Self::TILES as usize),
        }
    }

    /// Forget the current game. Equivalent to `*self = Board::new()` and idempotent.
    pub fn reset(&mut self) {
        self.cells = [None; Self::TILES as usize];
        self.history.clear();
    }

    /// Return the next player to make a move.
    /// If the game is over this is the player that did not play the last move.
    pub fn next_player(&self) -> Player {
        if self.history.len() % 2 == 0 {
            Player::A
        } else {
            Player::B
        }
    }

    /// The number of moves already played.
    pub fn game_length(&self) -> u32 {
        self.history.len() as u32
    }

    /// The piece at (`row`, `col`), with row 0 at the bottom. Panics outside the board.
    pub fn tile(&self, row: u8, col: u8) -> Option<Player> {
        assert!(row < Self::HEIGHT && col < Self::WIDTH);
        self.cells[cell_index(row, col)]
    }

    /// Drop a piece of the side to move into `column`.
    ///
    /// The piece settles into the lowest empty cell, the turn flips and the move is
    /// recorded in the history. On failure the board is left completely untouched.
    pub fn make_move(&mut self, column: u8) -> Result<Placement, PlayError> {
        if column >= Self::WIDTH {
            return Err(PlayError::InvalidColumn);
        }

        let player = self.next_player();
        for row in 0..Self::HEIGHT {
            let index = cell_index(row, column);
            if self.cells[index].is_none() {
                self.cells[index] = Some(player);
                self.history.push(index as u8);
                return Ok(Placement {
                    row,
                    player,
                    winning_move: self.connect_four(),
                });
            }
        }

        Err(PlayError::ColumnFull)
    }

    /// Take back the most recent move, the exact inverse of the [make_move](Self::make_move)
    /// it reverses: cells, turn and history are restored bit for bit.
    pub fn undo_move(&mut self) -> Result<(), EmptyHistory> {
        let index = self.history.pop().ok_or(EmptyHistory)?;
        self.cells[index as usize] = None;
        Ok(())
    }

    /// The columns that can still be played, in ascending order.
    ///
    /// Empty once a four-in-a-row is on the board, regardless of open columns.
    pub fn generate_moves(&self) -> Vec<u8> {
        if self.connect_four() {
            return vec![];
        }

        (0..Self::WIDTH)
            .filter(|&col| self.cells[cell_index(Self::HEIGHT - 1, col)].is_none())
            .collect()
    }

    /// Whether the most recently placed piece completed a four-in-a-row.
    ///
    /// Checking the last move is enough: in an incremental game any new
    /// four-in-a-row must include the newest piece.
    pub fn connect_four(&self) -> bool {
        // the shortest possible win is 4 own pieces against 3 opponent pieces
        if self.history.len() < 7 {
            return false;
        }
        match self.history.last() {
            Some(&last) => wins::wins_at(&self.cells, last as usize),
            None => false,
        }
    }

    /// The outcome of the game, `None` while moves can still be played.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.connect_four() {
            let &last = self.history.last().unwrap();
            let winner = self.cells[last as usize].unwrap();
            Some(Outcome::WonBy(winner))
        } else if self.history.len() == Self::TILES as usize {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Whether the game has ended, by four-in-a-row or by a full board.
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::A => 'a',
            Player::B => 'b',
        }
    }

    /// `1` if `self == pov`, `-1` otherwise.
    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Player) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }
}

pub(crate) fn cell_index(row: u8, col: u8) -> usize {
    (row * Board::WIDTH + col) as usize
}

fn tile_to_char(tile: Option<Player>) -> char {
    match tile {
        Some(player) => player.to_char(),
        None => '.',
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board {{ history: {:?}, next_player: {:?}, outcome: {:?} }}",
            self.history,
            self.next_player(),
            self.outcome(),
        )
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in (0..Self::HEIGHT).rev() {
            for col in 0..Self::WIDTH {
                write!(f, "{}", tile_to_char(self.tile(row, col)))?;
            }
            if row == Self::HEIGHT / 2 {
                write!(f, "    {}", self.next_player().to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for PlayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for PlayError {}

impl Display for EmptyHistory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for EmptyHistory {}
