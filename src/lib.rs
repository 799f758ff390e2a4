//! Player side of a heads-up no-limit hold'em pokerbot.
//!
//! The engine drives a [`BaseBot`](base::base_bot::BaseBot) through four
//! callbacks; [`EngineClient`](engine::engine_client::EngineClient) turns the
//! engine's line protocol into those calls, and
//! [`Player`](base::player::Player) fills the contract with a pluggable
//! [`Strategy`](strategy::Strategy).

pub mod base;
pub mod engine;
pub mod error;
pub mod game;
pub mod strategy;
