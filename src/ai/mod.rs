use std::fmt::Debug;

use crate::board::Board;
use crate::turn::Turn;
use crate::util::coord::Coord;

pub mod simple;

/// Something that can pick a placement for a turn.
///
/// Implementations see the same legal-target set a human player would get for the
/// directive, including the any-empty-cell case on a mismatch.
pub trait Strategy: Debug {
    /// Pick a target from the turn's legal set. Panics if the turn has no legal targets,
    /// callers resolve the automatic pass before asking a strategy.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select(&mut self, board: &Board, turn: Turn) -> Coord;
}

impl<F: FnMut(&Board, Turn) -> Coord + Debug> Strategy for F {
    fn select(&mut self, board: &Board, turn: Turn) -> Coord {
        self(board, turn)
    }
}
