//! Various utility functions.
pub mod bot_game;

pub mod bitboard;
pub mod bits;
pub mod coord;

pub mod tiny;
