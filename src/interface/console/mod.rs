//! The interactive text interface.
//!
//! Renders the board as plain text, reads placements in algebraic notation and can drive
//! a [crate::ai::Strategy] for the `No` side.

pub mod client;
pub mod command;
