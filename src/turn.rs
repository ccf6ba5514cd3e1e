//! Resolution of a single turn: which cells may be played and what a placement changes.
//!
//! The twist over plain Othello sits here. A matched directive plays an ordinary capture
//! move. A mismatched one (the oracle mandates the opponent's color) may target any empty
//! cell and flips nothing. A maybe directive plays a capture move and then converts every
//! directly adjacent opponent stone.

use tracing::debug;

use crate::board::{Board, Stone};
use crate::oracle::Directive;
use crate::util::bitboard::BitBoard8;
use crate::util::coord::Coord;

/// A directive bound to the player whose turn it is.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Turn {
    pub player: Stone,
    pub directive: Directive,
}

impl Turn {
    pub fn new(player: Stone, directive: Directive) -> Turn {
        Turn { player, directive }
    }

    pub fn mandated_stone(self) -> Stone {
        self.directive.mandated_stone(self.player)
    }

    /// Whether the oracle mandated the opponent's color this turn.
    pub fn is_mismatch(self) -> bool {
        !self.directive.is_maybe() && self.mandated_stone() != self.player
    }

    /// The cells this turn may place on. Empty means the turn is an automatic pass.
    pub fn legal_targets(self, board: &Board) -> BitBoard8 {
        if self.is_mismatch() {
            board.free_tiles()
        } else {
            board.legal_moves(self.mandated_stone())
        }
    }

    /// Place on `target` and resolve all flips for this turn's rule.
    ///
    /// `target` must come from [Turn::legal_targets].
    pub fn apply(self, board: &mut Board, target: Coord) -> Placement {
        debug_assert!(self.legal_targets(board).has(target));

        let stone = self.mandated_stone();
        let (flipped, forced) = if self.is_mismatch() {
            (board.place(target, stone, false), BitBoard8::EMPTY)
        } else if self.directive.is_maybe() {
            let flipped = board.place(target, stone, true);
            let forced = board.flip_adjacent(target, stone);
            (flipped, forced)
        } else {
            (board.place(target, stone, true), BitBoard8::EMPTY)
        };

        debug!(
            "{} placed {} on {}: flipped {}, forced {}",
            self.player,
            stone,
            target,
            flipped.count(),
            forced.count()
        );

        Placement {
            player: self.player,
            stone,
            target,
            flipped,
            forced,
        }
    }
}

/// Everything a resolved placement changed on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    pub player: Stone,
    /// The color that actually went down, which differs from `player` on a mismatch.
    pub stone: Stone,
    pub target: Coord,
    /// Capture-line conversions.
    pub flipped: BitBoard8,
    /// Unconditional adjacent conversions from the maybe effect.
    pub forced: BitBoard8,
}

impl Placement {
    pub fn is_mismatch(&self) -> bool {
        self.stone != self.player
    }

    /// The flash highlight fires when the maybe effect converted at least one stone.
    pub fn flash(&self) -> bool {
        self.forced.any()
    }

    pub fn converted(&self) -> u8 {
        (self.flipped | self.forced).count()
    }
}
