//! Game configuration types.
//!
//! Hosts configure the engine at construction via `GameOptions`. Everything
//! else (turn limit, time limit) is negotiated through the configuration
//! phases of the state machine itself, matching how the players experience
//! setup.

use serde::{Deserialize, Serialize};

/// Number of digits in a secret number or guess.
pub const CODE_LENGTH: usize = 4;

/// Engine feature toggles, fixed for the lifetime of a session.
///
/// ## Example
///
/// ```
/// use digit_duel::core::GameOptions;
///
/// // Default: turns are timed, so setup includes a time-limit phase.
/// let timed = GameOptions::default();
/// assert!(timed.timed_turns);
///
/// // Untimed game: setup skips straight from turn limit to numbers.
/// let untimed = GameOptions::default().untimed();
/// assert!(!untimed.timed_turns);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Whether each turn runs against a per-turn clock.
    ///
    /// When false, the time-limit configuration phase is skipped and
    /// `advance_clock` is a no-op.
    pub timed_turns: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { timed_turns: true }
    }
}

impl GameOptions {
    /// Create the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable the per-turn clock.
    #[must_use]
    pub fn untimed(mut self) -> Self {
        self.timed_turns = false;
        self
    }

    /// Enable the per-turn clock.
    #[must_use]
    pub fn timed(mut self) -> Self {
        self.timed_turns = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_timed() {
        assert!(GameOptions::default().timed_turns);
        assert_eq!(GameOptions::new(), GameOptions::default());
    }

    #[test]
    fn test_builder_toggles() {
        let options = GameOptions::new().untimed();
        assert!(!options.timed_turns);

        let options = options.timed();
        assert!(options.timed_turns);
    }
}
