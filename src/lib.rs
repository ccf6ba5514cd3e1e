#![warn(missing_debug_implementations)]

//! Othello where an oracle dictates the stone color placed each turn.
//!
//! The two stone colors are `Yes` and `No`, after the answers of the yesno.wtf oracle
//! driving the game. Before every turn the oracle mandates a color:
//! * the player's own color plays an ordinary Othello capture move,
//! * the opponent's color may go on any empty cell but flips nothing,
//! * a `maybe` answer plays the player's own color and afterwards converts every directly
//!   adjacent opponent stone, with no line requirement.
//!
//! A turn with no available cell passes automatically. Two passes in a row or a full board
//! end the game, and the color with more stones on the board wins.
//!
//! The main pieces:
//! * [Board](crate::board::Board) holds the stones and the capture rules.
//! * [Game](crate::game::Game) runs the turn cycle against an [Oracle](crate::oracle::Oracle):
//!     the HTTP [OracleClient](crate::oracle::OracleClient), the offline
//!     [RandomOracle](crate::oracle::RandomOracle) or the replayable
//!     [ScriptedOracle](crate::oracle::ScriptedOracle).
//! * [RandomStrategy](crate::ai::simple::RandomStrategy) and
//!     [GreedyStrategy](crate::ai::simple::GreedyStrategy) play a side unattended.
//! * The interactive frontend lives in [console](crate::interface::console),
//!     a strategy arena in [bot_game](crate::util::bot_game).
//!
//! # Examples
//!
//! ## Play the first turn of a scripted game
//!
//! ```
//! use yesno_othello::game::{Game, Step};
//! use yesno_othello::oracle::{Directive, ScriptedOracle};
//! use yesno_othello::util::coord::Coord;
//!
//! let oracle = ScriptedOracle::new([Directive::PlaceYes, Directive::PlaceNo]);
//! let mut game = Game::new(oracle);
//!
//! let step = game.advance().unwrap();
//! assert!(matches!(step, Step::Turn(_)));
//!
//! let placement = game.play(Coord::from_xy(3, 2)).unwrap();
//! assert_eq!(placement.flipped.count(), 1);
//! println!("{}", game.board());
//! ```
//!
//! ## Let two strategies fight it out
//!
//! ```
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoroshiro64StarStar;
//! use yesno_othello::ai::simple::{GreedyStrategy, RandomStrategy};
//! use yesno_othello::oracle::RandomOracle;
//! use yesno_othello::util::bot_game;
//!
//! let result = bot_game::run(
//!     |i| RandomOracle::new(Xoroshiro64StarStar::seed_from_u64(i as u64)),
//!     || RandomStrategy::new(Xoroshiro64StarStar::seed_from_u64(0)),
//!     || GreedyStrategy,
//!     4,
//!     |_, _| {},
//! );
//! assert_eq!(result.stats.games, 4);
//! println!("{:?}", result);
//! ```

pub mod board;
pub mod game;
pub mod oracle;
pub mod turn;

pub mod ai;

pub mod util;

pub mod interface;
