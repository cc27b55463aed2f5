//! Core types: players, secret numbers, feedback records, RNG, configuration.
//!
//! This module contains the value types the engine is built from. All game
//! rules live in `crate::engine`; everything here is a pure building block.

pub mod config;
pub mod feedback;
pub mod player;
pub mod rng;
pub mod secret;

pub use config::{GameOptions, CODE_LENGTH};
pub use feedback::{FeedbackEntry, FeedbackKind};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use secret::{validate, GuessScore, SecretNumber, ValidationError};
