//! The two built-in strategies: `RandomStrategy` and `GreedyStrategy`.
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::Strategy;
use crate::board::Board;
use crate::turn::Turn;
use crate::util::coord::Coord;

/// Strategy that chooses uniformly among the legal targets.
pub struct RandomStrategy<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomStrategy<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomStrategy")
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        RandomStrategy { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn select(&mut self, board: &Board, turn: Turn) -> Coord {
        let targets = turn.legal_targets(board);
        let index = self.rng.gen_range(0..targets.count() as u32);
        targets.get_nth(index)
    }
}

/// Strategy that looks one placement ahead and keeps the target that leaves the most
/// stones of its own color on the board, maybe effect included.
///
/// Ties keep the first candidate in cell-index order, so the choice is deterministic.
#[derive(Debug)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn select(&mut self, board: &Board, turn: Turn) -> Coord {
        let targets = turn.legal_targets(board);

        let mut best: Option<(Coord, u8)> = None;
        for target in targets {
            let mut scratch = board.clone();
            turn.apply(&mut scratch, target);
            let score = scratch.count(turn.player);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((target, score));
            }
        }

        let (target, _) = best.unwrap();
        target
    }
}
