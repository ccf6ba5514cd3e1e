//! Utilities to run strategies against each other and report the results.

use std::fmt::Write;
use std::fmt::{Debug, Formatter};

use crate::ai::Strategy;
use crate::board::{Outcome, Score, Stone};
use crate::game::{Game, GameDone, Step};
use crate::oracle::Oracle;
use crate::turn::Placement;

/// Run `strategy_yes` against `strategy_no` for `game_count` games.
///
/// Every game gets a fresh oracle from `oracle`, keyed by the game index so seeded
/// oracles stay reproducible. `callback` sees the running stats after every game.
#[must_use]
pub fn run<O: Oracle, Y: Strategy, N: Strategy>(
    oracle: impl Fn(u32) -> O,
    strategy_yes: impl Fn() -> Y,
    strategy_no: impl Fn() -> N,
    game_count: u32,
    callback: impl Fn(&MatchStats, &Replay),
) -> MatchResult {
    // instantiate both once up front so construction errors surface before the first game
    let debug_yes = debug_to_string(&strategy_yes());
    let debug_no = debug_to_string(&strategy_no());

    let mut stats = MatchStats::default();
    let mut replays = Vec::with_capacity(game_count as usize);

    for game_i in 0..game_count {
        let game = Game::new(oracle(game_i));
        let replay = play_single_game(game, &mut strategy_yes(), &mut strategy_no());

        stats.add(&replay);
        callback(&stats, &replay);
        replays.push(replay);
    }

    MatchResult {
        stats,
        replays,
        debug_yes,
        debug_no,
    }
}

fn play_single_game<O: Oracle>(
    mut game: Game<O>,
    strategy_yes: &mut impl Strategy,
    strategy_no: &mut impl Strategy,
) -> Replay {
    let mut placements = vec![];
    let mut passes: u32 = 0;

    while !game.is_done() {
        let step = match game.advance() {
            Ok(step) => step,
            Err(GameDone) => break,
        };

        match step {
            Step::Pass(_) => passes += 1,
            Step::Turn(start) => {
                let strategy: &mut dyn Strategy = match start.turn.player {
                    Stone::Yes => strategy_yes,
                    Stone::No => strategy_no,
                };

                let target = strategy.select(game.board(), start.turn);
                let placement = game
                    .play(target)
                    .unwrap_or_else(|e| panic!("{:?} returned an unplayable target {}: {}", strategy, target, e));
                placements.push(placement);
            }
        }
    }

    Replay {
        placements,
        passes,
        score: game.score(),
        outcome: game.outcome().unwrap_or_else(|| panic!("game loop ended before the outcome")),
    }
}

/// A single finished game.
#[derive(Debug, Clone)]
pub struct Replay {
    pub placements: Vec<Placement>,
    pub passes: u32,
    pub score: Score,
    pub outcome: Outcome,
}

/// Running counts over the games played so far.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct MatchStats {
    pub games: u32,
    pub wins_yes: u32,
    pub wins_no: u32,
    pub draws: u32,
    pub total_placements: u32,
    pub total_passes: u32,
}

impl MatchStats {
    fn add(&mut self, replay: &Replay) {
        self.games += 1;
        match replay.outcome {
            Outcome::WonBy(Stone::Yes) => self.wins_yes += 1,
            Outcome::WonBy(Stone::No) => self.wins_no += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.total_placements += replay.placements.len() as u32;
        self.total_passes += replay.passes;
    }

    pub fn average_game_length(&self) -> f32 {
        self.total_placements as f32 / self.games as f32
    }
}

/// Structure returned by the function [`run`].
pub struct MatchResult {
    pub stats: MatchStats,
    pub replays: Vec<Replay>,

    pub debug_yes: String,
    pub debug_no: String,
}

impl Debug for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MatchResult {{")?;
        writeln!(
            f,
            "  {} games, average length {:.1}, {} passes",
            self.stats.games,
            self.stats.average_game_length(),
            self.stats.total_passes
        )?;
        writeln!(
            f,
            "  yes {} / draw {} / no {}",
            self.stats.wins_yes, self.stats.draws, self.stats.wins_no
        )?;
        writeln!(f, "  yes:  {}", self.debug_yes)?;
        writeln!(f, "  no:   {}", self.debug_no)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}

fn debug_to_string(d: &impl Debug) -> String {
    let mut s = String::new();
    write!(&mut s, "{:?}", d).unwrap();
    s
}
