//! The game loop controller.
//!
//! A turn runs through a fixed cycle. [Game::advance] asks the oracle for the turn's
//! directive and computes the legal targets; with no targets the turn passes by itself,
//! otherwise the game waits for a placement. [Game::play] resolves the placement, resets
//! the pass streak and checks for the end of the game. Two consecutive passes or a full
//! board finish it, after which only the result accessors remain useful.

use std::fmt::{Display, Formatter};

use tracing::{debug, info};

use crate::board::{Board, Outcome, Score, Stone};
use crate::oracle::{Directive, Gif, Oracle};
use crate::turn::{Placement, Turn};
use crate::util::bitboard::BitBoard8;
use crate::util::coord::Coord;

/// Error returned by game operations once the game is over.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameDone;

impl Display for GameDone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "the game is over")
    }
}

impl std::error::Error for GameDone {}

/// Error returned when a placement cannot be played.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlayError {
    GameDone,
    /// There is no pending turn, call [Game::advance] first.
    NoPendingTurn,
    /// The target is not in the pending turn's legal set.
    UnavailableTarget,
}

impl Display for PlayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::GameDone => write!(f, "the game is over"),
            PlayError::NoPendingTurn => write!(f, "no turn is awaiting a placement"),
            PlayError::UnavailableTarget => write!(f, "target is not a legal cell for this turn"),
        }
    }
}

impl std::error::Error for PlayError {}

impl From<GameDone> for PlayError {
    fn from(_: GameDone) -> Self {
        PlayError::GameDone
    }
}

/// What [Game::advance] produced for the new turn.
#[derive(Debug)]
pub enum Step {
    /// A placement is required, feed a target to [Game::play].
    Turn(TurnStart),
    /// The turn passed automatically. The game may be over now.
    Pass(PassReport),
}

/// A turn that awaits a placement.
#[derive(Debug)]
pub struct TurnStart {
    pub turn: Turn,
    pub targets: BitBoard8,
    /// The directive came from the random fallback, not from the oracle itself.
    pub fallback: bool,
    pub gif: Option<Gif>,
}

/// A turn that ended in an automatic pass.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PassReport {
    pub player: Stone,
    pub directive: Directive,
    pub fallback: bool,
    pub pass_streak: u8,
}

/// The full game state: board, turn order, pass streak and the oracle driving it.
#[derive(Debug)]
pub struct Game<O: Oracle> {
    board: Board,
    oracle: O,
    next_player: Stone,
    pass_streak: u8,
    pending: Option<Turn>,
    outcome: Option<Outcome>,
}

impl<O: Oracle> Game<O> {
    /// A fresh game from the standard opening, `Yes` to move.
    pub fn new(oracle: O) -> Self {
        Game::from_board(Board::standard(), Stone::Yes, oracle)
    }

    pub fn from_board(board: Board, next_player: Stone, oracle: O) -> Self {
        let mut game = Game {
            board,
            oracle,
            next_player,
            pass_streak: 0,
            pending: None,
            outcome: None,
        };
        game.update_outcome();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Stone {
        self.next_player
    }

    pub fn pass_streak(&self) -> u8 {
        self.pass_streak
    }

    pub fn pending_turn(&self) -> Option<Turn> {
        self.pending
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// `Some` once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    fn check_done(&self) -> Result<(), GameDone> {
        match self.outcome {
            Some(_) => Err(GameDone),
            None => Ok(()),
        }
    }

    /// Start the next turn: fetch the directive and compute the legal targets.
    /// Resolves an automatic pass on the spot.
    ///
    /// Panics if the previous turn is still awaiting its placement.
    pub fn advance(&mut self) -> Result<Step, GameDone> {
        self.check_done()?;
        assert!(self.pending.is_none(), "previous turn is still awaiting a placement");

        let reply = self.oracle.next_directive();
        let turn = Turn::new(self.next_player, reply.directive);
        let targets = turn.legal_targets(&self.board);
        debug!("{} got {:?}, {} targets", turn.player, turn.directive, targets.count());

        if targets.none() {
            self.pass_streak += 1;
            info!("{} must pass (streak {})", turn.player, self.pass_streak);

            let report = PassReport {
                player: turn.player,
                directive: reply.directive,
                fallback: reply.fallback,
                pass_streak: self.pass_streak,
            };
            self.finish_turn();
            Ok(Step::Pass(report))
        } else {
            self.pending = Some(turn);
            Ok(Step::Turn(TurnStart {
                turn,
                targets,
                fallback: reply.fallback,
                gif: reply.gif,
            }))
        }
    }

    /// Resolve the pending turn by placing on `target`.
    pub fn play(&mut self, target: Coord) -> Result<Placement, PlayError> {
        self.check_done()?;
        let turn = self.pending.ok_or(PlayError::NoPendingTurn)?;

        if !turn.legal_targets(&self.board).has(target) {
            return Err(PlayError::UnavailableTarget);
        }

        let placement = turn.apply(&mut self.board, target);
        self.pending = None;
        self.pass_streak = 0;
        self.finish_turn();
        Ok(placement)
    }

    /// The tail of every turn: check the terminal conditions, otherwise hand over.
    fn finish_turn(&mut self) {
        self.update_outcome();
        match self.outcome {
            None => self.next_player = self.next_player.other(),
            Some(outcome) => {
                let score = self.board.score();
                info!("game over: {:?} (y {} n {})", outcome, score.yes, score.no);
            }
        }
    }

    fn update_outcome(&mut self) {
        if self.board.is_full() || self.pass_streak >= 2 {
            self.outcome = Some(self.board.score().outcome());
        }
    }
}
