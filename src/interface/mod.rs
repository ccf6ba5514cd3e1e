//! User-facing frontends for driving a [crate::game::Game].

pub mod console;
