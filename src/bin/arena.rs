use rand::SeedableRng;
use rand_xoshiro::Xoroshiro64StarStar;
use tracing_subscriber::EnvFilter;

use yesno_othello::ai::simple::{GreedyStrategy, RandomStrategy};
use yesno_othello::oracle::RandomOracle;
use yesno_othello::util::bot_game;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (games, seed) = parse_args(&args);

    println!("random (yes) vs greedy (no), {} games, seed {}", games, seed);

    let result = bot_game::run(
        move |i| RandomOracle::new(Xoroshiro64StarStar::seed_from_u64(seed.wrapping_add(i as u64))),
        move || RandomStrategy::new(Xoroshiro64StarStar::seed_from_u64(seed)),
        || GreedyStrategy,
        games,
        |stats, _| {
            if stats.games % 50 == 0 {
                println!("{} games played", stats.games);
            }
        },
    );

    println!("{:?}", result);
}

fn parse_args(args: &[String]) -> (u32, u64) {
    let mut games = 100;
    let mut seed = 0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--games" => {
                if i + 1 < args.len() {
                    games = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    seed = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            _ => usage(),
        }
        i += 1;
    }

    (games, seed)
}

fn usage() -> ! {
    eprintln!("Usage: arena [--games N] [--seed N]");
    eprintln!("  runs a random strategy (yes side) against the greedy one (no side)");
    eprintln!("  with a seeded offline oracle, and prints the aggregate result");
    std::process::exit(1);
}
