//! Classic snake arcade game: a pure rules engine driven by a small
//! terminal frontend.
//!
//! The core ([`game`], [`snake`], [`food`], [`progression`]) is synchronous
//! and side-effect free apart from RNG draws and the injected high-score
//! store, so every rule is testable without a terminal or timer. The view
//! modules ([`renderer`], [`ui`]) only read [`game::GameState`]; the input
//! adapter only emits intents back into it.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod progression;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
