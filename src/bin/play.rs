use std::io;
use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use yesno_othello::ai::simple::{GreedyStrategy, RandomStrategy};
use yesno_othello::ai::Strategy;
use yesno_othello::game::Game;
use yesno_othello::interface::console::client;
use yesno_othello::interface::console::client::Settings;
use yesno_othello::oracle::{OracleClient, DEFAULT_URL};

struct Config {
    mode: Option<u32>,
    gifs: Option<bool>,
    seed: Option<u64>,
    url: String,
}

fn main() -> io::Result<()> {
    // logs go to stderr so they cannot mix into the board rendering on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = parse_args(&args);

    let mode = match config.mode {
        Some(mode) => mode,
        None => prompt_mode()?,
    };
    let gifs = match config.gifs {
        Some(gifs) => gifs,
        None => prompt_gifs()?,
    };

    let make_rng = |offset: u64| match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(offset)),
        None => SmallRng::from_entropy(),
    };

    let no_strategy: Option<Box<dyn Strategy>> = match mode {
        1 => Some(Box::new(RandomStrategy::new(make_rng(1)))),
        2 => Some(Box::new(GreedyStrategy)),
        _ => None,
    };

    let oracle = OracleClient::new(&config.url, gifs, make_rng(0));
    let mut game = Game::new(oracle);

    let settings = Settings {
        no_strategy,
        pace_ai: true,
    };
    client::run(&mut game, settings, io::stdin(), io::stdout())?;

    Ok(())
}

fn prompt_mode() -> io::Result<u32> {
    print!("Select mode (0: Human, 1: Random AI, 2: Greedy AI) → ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    // anything unreadable means a human game
    Ok(line.trim().parse().unwrap_or(0))
}

fn prompt_gifs() -> io::Result<bool> {
    print!("Enable GIF popup mode? (True/False) → ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let choice = line.trim().to_ascii_lowercase();
    Ok(matches!(choice.as_str(), "true" | "t" | "1" | "yes" | "y"))
}

fn parse_args(args: &[String]) -> Config {
    let mut config = Config {
        mode: None,
        gifs: None,
        seed: None,
        url: DEFAULT_URL.to_owned(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-m" | "--mode" => {
                if i + 1 < args.len() {
                    config.mode = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-g" | "--gifs" => {
                if i + 1 < args.len() {
                    config.gifs = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-u" | "--url" => {
                if i + 1 < args.len() {
                    config.url = args[i + 1].clone();
                    i += 1;
                }
            }
            _ => usage(),
        }
        i += 1;
    }

    config
}

fn usage() -> ! {
    eprintln!("Usage: play [--mode 0|1|2] [--gifs true|false] [--seed N] [--url URL]");
    eprintln!("  --mode  0 human vs human, 1 random AI, 2 greedy AI (prompted when absent)");
    eprintln!("  --gifs  download and save the oracle gifs (prompted when absent)");
    eprintln!("  --seed  seed for the fallback and AI rngs, entropy when absent");
    eprintln!("  --url   oracle endpoint, {} when absent", DEFAULT_URL);
    std::process::exit(1);
}
