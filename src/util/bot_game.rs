//! Utilities to run bots against each other and report the results.
use std::fmt::{Debug, Formatter};

use crate::ai::Bot;
use crate::board::{Board, Outcome, Player};

/// Run `bot_l` against `bot_r` for `games_per_side` games, all starting from an
/// empty board. If `both_sides` is true a match consists of two games per
/// pairing where the bots switch sides, `2 * games_per_side` games in total.
///
/// The bot constructors are called once per game so each game gets fresh
/// random state.
#[must_use]
pub fn run<L: Bot, R: Bot>(
    mut bot_l: impl FnMut() -> L,
    mut bot_r: impl FnMut() -> R,
    games_per_side: u32,
    both_sides: bool,
) -> BotGameResult {
    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };

    let mut wins_l = 0;
    let mut draws = 0;
    let mut wins_r = 0;
    let mut score_l = 0;
    let mut total_moves = 0;

    for game_i in 0..game_count {
        let flip = both_sides && game_i % 2 == 1;
        let player_l = if flip { Player::B } else { Player::A };

        let (length, outcome) = play_single_game(player_l, &mut bot_l(), &mut bot_r());
        total_moves += length;

        match outcome {
            Outcome::Draw => draws += 1,
            Outcome::WonBy(winner) => {
                score_l += winner.sign::<i32>(player_l);
                if winner == player_l {
                    wins_l += 1;
                } else {
                    wins_r += 1;
                }
            }
        }
    }

    BotGameResult {
        game_count,
        wins_l,
        draws,
        wins_r,
        score_l,
        average_game_length: total_moves as f32 / game_count as f32,
    }
}

fn play_single_game(player_l: Player, bot_l: &mut impl Bot, bot_r: &mut impl Bot) -> (u32, Outcome) {
    let mut board = Board::new();

    loop {
        match board.outcome() {
            None => {
                let col = if board.next_player() == player_l {
                    bot_l.select_move(&mut board)
                } else {
                    bot_r.select_move(&mut board)
                }
                .unwrap();
                board.make_move(col).unwrap();
            }
            Some(outcome) => return (board.game_length(), outcome),
        }
    }
}

/// Structure returned by the function [run].
pub struct BotGameResult {
    pub game_count: u32,

    /// Games won by the left/right bot and games drawn.
    pub wins_l: u32,
    pub draws: u32,
    pub wins_r: u32,

    /// Net score of the left bot, +1 per win and -1 per loss.
    pub score_l: i32,

    pub average_game_length: f32,
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(
            f,
            "  left {} / draw {} / right {}, left score {:+}",
            self.wins_l, self.draws, self.wins_r, self.score_l
        )?;
        writeln!(f, "}}")?;
        Ok(())
    }
}
