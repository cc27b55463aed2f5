//! # digit-duel
//!
//! A two-player number-guessing (Bulls and Cows) game engine.
//!
//! Each player secretly sets a 4-digit code with no repeated digits, then
//! the players alternate guessing the opponent's code. Every guess is
//! answered with how many digits appear anywhere in the target and how many
//! sit at the right position; four right positions wins, exhausting the
//! shared turn limit draws, and (in timed games) an expired turn clock
//! forfeits the turn.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No rendering, input polling, or timing sources.
//!    The host loop calls operations on user events, ticks the clock with
//!    elapsed time, and renders from the read accessors.
//!
//! 2. **One phase machine**: Session flow is a single exhaustive
//!    `GamePhase` value with strictly forward transitions; an operation
//!    invoked in the wrong phase is rejected without touching state.
//!
//! 3. **Typed outcomes**: The result is a stored `GameResult` tag and the
//!    history is structured `FeedbackEntry` records; display strings are
//!    rendered from them, never parsed back.
//!
//! ## Modules
//!
//! - `core`: players, secret numbers and scoring, feedback records, RNG,
//!   options
//! - `engine`: the `GameEngine` state machine and error taxonomy
//!
//! ## Example
//!
//! ```
//! use digit_duel::{GameEngine, GameOptions, GamePhase};
//!
//! let mut engine = GameEngine::new(GameOptions::default());
//! engine.configure_turn_limit(7).unwrap();
//! engine.configure_time_limit(30).unwrap();
//! engine.set_player_number("0123").unwrap();
//! engine.set_player_number("9876").unwrap();
//! assert_eq!(engine.phase(), GamePhase::Playing);
//!
//! let score = engine.submit_guess("9867").unwrap();
//! assert_eq!(score.correct_digits, 4);
//! assert_eq!(score.correct_positions, 2);
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    validate, FeedbackEntry, FeedbackKind, GameOptions, GameRng, GuessScore, Player, PlayerMap,
    SecretNumber, ValidationError, CODE_LENGTH,
};

pub use crate::engine::{GameEngine, GameError, GamePhase, GameResult};
