use connect4_engine::ai::negamax::NegamaxBot;
use connect4_engine::ai::simple::RandomBot;
use connect4_engine::difficulty::Difficulty;
use connect4_engine::engine::Engine;
use connect4_engine::util::bot_game;

fn main() {
    demo();
    compare();
}

/// Play one quick game of the engine against itself, printing every position.
fn demo() {
    let mut engine = Engine::new(Difficulty::Hard);
    println!("{}", engine.board());

    while !engine.is_game_over() {
        let col = engine.get_best_move().unwrap();
        engine.make_move(col).unwrap();
        println!("{}", engine.board());
    }

    println!("outcome: {:?}", engine.board().outcome());
}

/// Run a Hard-vs-random match and print the tally.
fn compare() {
    let result = bot_game::run(
        || NegamaxBot::new(Difficulty::Hard.search_depth(), rand::thread_rng()),
        || RandomBot::new(rand::thread_rng()),
        20,
        true,
    );
    println!("{:?}", result);
}
