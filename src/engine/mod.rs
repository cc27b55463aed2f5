//! The rules layer: the game state machine and its error taxonomy.

pub mod error;
pub mod game;

pub use error::GameError;
pub use game::{GameEngine, GamePhase, GameResult};
