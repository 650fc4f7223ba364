use std::collections::HashMap;

use itertools::Itertools;

use connect4_engine::ai::negamax::{best_move, NegamaxBot};
use connect4_engine::ai::simple::RandomBot;
use connect4_engine::ai::{Bot, NoLegalMoves};
use connect4_engine::board::Board;
use connect4_engine::util::board_gen::{board_with_moves, random_board_with_moves};
use connect4_engine::util::bot_game;
use connect4_engine::util::tiny::{consistent_rng, consistent_rng_seeded};

/// Sample `sampler` often enough to check it returns every expected value
/// roughly uniformly.
fn test_sampler_uniform(expected: &[u8], mut sampler: impl FnMut() -> u8) {
    assert!(expected.iter().all_unique());
    assert!(!expected.is_empty());

    let samples_per_value = 1000;
    let total_samples = samples_per_value * expected.len();

    let mut all_counts: HashMap<u8, u64> = expected.iter().map(|&value| (value, 0)).collect();
    for _ in 0..total_samples {
        let sample = sampler();
        match all_counts.get_mut(&sample) {
            None => panic!("Non-expected value {:?} was sampled", sample),
            Some(count) => *count += 1,
        }
    }

    for (&value, &count) in &all_counts {
        let relative = count as f32 / samples_per_value as f32;
        assert!(
            (0.8..1.2).contains(&relative),
            "Value {:?} was over/under sampled {} ~ {}",
            value,
            count,
            relative,
        );
    }
}

#[test]
fn depth_0_is_uniform_random() {
    let mut board = Board::new();
    let mut rng = consistent_rng();

    let expected = board.generate_moves();
    test_sampler_uniform(&expected, || best_move(&mut board, 0, &mut rng).unwrap());
}

#[test]
fn depth_0_respects_full_columns() {
    // fill columns 0 and 6 completely
    let mut board = board_with_moves(Board::new(), &[0, 0, 0, 0, 0, 0, 6, 6, 6, 6, 6, 6]);
    let mut rng = consistent_rng();

    let expected = board.generate_moves();
    assert_eq!(expected, vec![1, 2, 3, 4, 5]);
    test_sampler_uniform(&expected, || best_move(&mut board, 0, &mut rng).unwrap());
}

#[test]
fn search_leaves_board_unchanged() {
    let mut rng = consistent_rng();

    let positions = vec![
        Board::new(),
        board_with_moves(Board::new(), &[3, 4, 3, 4, 3, 4]),
        board_with_moves(Board::new(), &[6, 0, 6, 1, 5, 2]),
        random_board_with_moves(&Board::new(), 12, &mut rng),
        random_board_with_moves(&Board::new(), 25, &mut rng),
    ];

    for mut board in positions {
        if board.is_game_over() {
            continue;
        }
        for depth in 0..=3 {
            let before = board.clone();
            best_move(&mut board, depth, &mut rng).unwrap();
            assert_eq!(board, before, "depth {} search mutated the board", depth);
        }
    }
}

#[test]
fn takes_immediate_win() {
    // vertical: three a pieces stacked in column 3
    let mut board = board_with_moves(Board::new(), &[3, 4, 3, 4, 3, 4]);
    for seed in 0..20 {
        let mut rng = consistent_rng_seeded(seed);
        assert_eq!(best_move(&mut board, 1, &mut rng), Ok(3));
        assert_eq!(best_move(&mut board, 2, &mut rng), Ok(3));
    }

    // horizontal: a holds the bottom of columns 0, 1, 2
    let mut board = board_with_moves(Board::new(), &[0, 0, 1, 1, 2, 2]);
    for seed in 0..20 {
        let mut rng = consistent_rng_seeded(seed);
        assert_eq!(best_move(&mut board, 1, &mut rng), Ok(3));
    }
}

#[test]
fn blocks_immediate_threat() {
    // b holds the bottom of columns 0, 1, 2 and threatens column 3
    let mut board = board_with_moves(Board::new(), &[6, 0, 6, 1, 5, 2]);

    for seed in 0..20 {
        let mut rng = consistent_rng_seeded(seed);
        assert_eq!(best_move(&mut board, 2, &mut rng), Ok(3));
    }
}

#[test]
fn prefers_win_over_block() {
    // a threatens along the bottom row, b along the row above, both at column 3
    let mut board = board_with_moves(Board::new(), &[0, 0, 1, 1, 2, 2]);

    for seed in 0..20 {
        let mut rng = consistent_rng_seeded(seed);
        assert_eq!(best_move(&mut board, 2, &mut rng), Ok(3));
    }
}

#[test]
fn no_legal_moves_on_terminal() {
    let mut rng = consistent_rng();

    // won position
    let mut board = board_with_moves(Board::new(), &[3, 4, 3, 4, 3, 4, 3]);
    for depth in 0..=3 {
        assert_eq!(best_move(&mut board, depth, &mut rng), Err(NoLegalMoves));
    }

    // drawn position, every column full
    let draw = vec![
        1, 0, 3, 0, 5, 4, 4, 4, 0, 6, 2, 0, 3, 0, 2, 6, 4, 1, 0, 3, 6, 5, 3, 1, 1, 6, 3, 5, 6, 3, 1, 4, 5, 4, 5, 1, 2,
        2, 5, 2, 2, 6,
    ];
    let mut board = board_with_moves(Board::new(), &draw);
    assert_eq!(best_move(&mut board, 2, &mut rng), Err(NoLegalMoves));
}

#[test]
fn fixed_seed_is_deterministic() {
    let mut board = board_with_moves(Board::new(), &[3, 3, 4]);

    for depth in 0..=2 {
        let mut rng_a = consistent_rng_seeded(42);
        let mut rng_b = consistent_rng_seeded(42);
        assert_eq!(
            best_move(&mut board, depth, &mut rng_a),
            best_move(&mut board, depth, &mut rng_b),
        );
    }
}

#[test]
fn bots_leave_board_unchanged() {
    let mut board = board_with_moves(Board::new(), &[3, 4, 3]);
    let before = board.clone();

    let mut random = RandomBot::new(consistent_rng_seeded(1));
    let mut negamax = NegamaxBot::new(2, consistent_rng_seeded(2));

    random.select_move(&mut board).unwrap();
    assert_eq!(board, before);
    negamax.select_move(&mut board).unwrap();
    assert_eq!(board, before);
}

#[test]
fn negamax_beats_random() {
    let mut seed = 0;
    let result = bot_game::run(
        || NegamaxBot::new(2, consistent_rng_seeded(100)),
        move || {
            seed += 1;
            RandomBot::new(consistent_rng_seeded(seed))
        },
        20,
        true,
    );
    println!("{:?}", result);

    assert_eq!(result.game_count, 40);
    assert_eq!(result.wins_l + result.draws + result.wins_r, result.game_count);
    assert!(
        result.score_l > 0,
        "searching bot should come out ahead of the random bot, got {:?}",
        result
    );
}
