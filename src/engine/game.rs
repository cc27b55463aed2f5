//! The game state machine.
//!
//! `GameEngine` owns every piece of mutable session state and exposes it
//! only through its operations and read accessors. The presentation layer
//! (window, input polling, rendering) is an external collaborator: it calls
//! one operation per discrete user event, ticks `advance_clock` once per
//! update with the elapsed time, and renders from the accessors. There is a
//! single logical actor driving the engine, so no locking is involved.
//!
//! ## Phases
//!
//! | Phase                  | Valid operations              | Exit to                                    |
//! |------------------------|-------------------------------|--------------------------------------------|
//! | `ConfiguringTurnLimit` | `configure_turn_limit`        | `ConfiguringTimeLimit` or `SettingNumbers` |
//! | `ConfiguringTimeLimit` | `configure_time_limit`        | `SettingNumbers`                           |
//! | `SettingNumbers`       | `set_player_number` (twice)   | `Playing`                                  |
//! | `Playing`              | `submit_guess`, `advance_clock` | `Finished`                               |
//! | `Finished`             | `reset` only                  | `ConfiguringTurnLimit`                     |
//!
//! Transitions are strictly forward; only `reset` returns to the start.

use im::Vector;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::core::feedback::FeedbackEntry;
use crate::core::player::{Player, PlayerMap};
use crate::core::secret::{GuessScore, SecretNumber};
use crate::core::GameOptions;

/// The stage a session is in.
///
/// One exhaustive sum type instead of a set of boolean flags, so invalid
/// flag combinations cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the shared turn limit.
    ConfiguringTurnLimit,
    /// Waiting for the per-turn time limit (timed games only).
    ConfiguringTimeLimit,
    /// Each player enters a secret number, Player 1 first.
    SettingNumbers,
    /// Players alternate guesses against each other's secrets.
    Playing,
    /// A result has been recorded; only `reset` applies.
    Finished,
}

impl GamePhase {
    /// True once a result has been recorded.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Finished)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GamePhase::ConfiguringTurnLimit => "configuring the turn limit",
            GamePhase::ConfiguringTimeLimit => "configuring the time limit",
            GamePhase::SettingNumbers => "setting numbers",
            GamePhase::Playing => "playing",
            GamePhase::Finished => "finished",
        })
    }
}

/// Result of a session.
///
/// Stored as a tagged value, set exactly once at the moment the phase
/// becomes `Finished`; never inferred from the feedback log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The named player guessed the opponent's number.
    Win(Player),
    /// Both players exhausted the turn limit.
    Draw,
    /// No result yet.
    InProgress,
}

impl GameResult {
    /// True once the session has a final result.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The winning player, if there is one.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(player) => Some(player),
            GameResult::Draw | GameResult::InProgress => None,
        }
    }
}

/// The game engine: setup and play state machine for one session.
///
/// ## Example
///
/// ```
/// use digit_duel::{GameEngine, GameOptions, GameResult, Player};
///
/// let mut engine = GameEngine::new(GameOptions::default().untimed());
/// engine.configure_turn_limit(5).unwrap();
/// engine.set_player_number("1234").unwrap();
/// engine.set_player_number("5678").unwrap();
///
/// let score = engine.submit_guess("5678").unwrap();
/// assert!(score.is_exact());
/// assert_eq!(engine.result(), GameResult::Win(Player::One));
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    options: GameOptions,
    phase: GamePhase,
    /// During `SettingNumbers`: whose secret comes next.
    /// During `Playing`: whose guess comes next.
    active: Player,
    secrets: PlayerMap<Option<SecretNumber>>,
    turns_taken: PlayerMap<u32>,
    turn_limit: u32,
    time_limit_secs: Option<u32>,
    remaining_secs: f64,
    result: GameResult,
    history: Vector<FeedbackEntry>,
    prompt: String,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

impl GameEngine {
    /// Create a fresh engine in the initial configuration phase.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            phase: GamePhase::ConfiguringTurnLimit,
            active: Player::One,
            secrets: PlayerMap::with_default(),
            turns_taken: PlayerMap::with_value(0),
            turn_limit: 0,
            time_limit_secs: None,
            remaining_secs: 0.0,
            result: GameResult::InProgress,
            history: Vector::new(),
            prompt: "Enter the number of turns for this game.".to_string(),
        }
    }

    // === Configuration ===

    /// Set the per-player turn limit.
    ///
    /// Only valid while configuring the turn limit. Limits below 1 are
    /// rejected and the phase does not advance.
    pub fn configure_turn_limit(&mut self, limit: u32) -> Result<(), GameError> {
        self.expect_phase(GamePhase::ConfiguringTurnLimit)?;
        if limit < 1 {
            return Err(GameError::InvalidConfig);
        }

        self.turn_limit = limit;
        if self.options.timed_turns {
            self.enter_phase(GamePhase::ConfiguringTimeLimit);
            self.prompt = "Enter time limit per turn (seconds):".to_string();
        } else {
            self.enter_phase(GamePhase::SettingNumbers);
            self.prompt = format!("{}, set your 4-digit number.", Player::One);
        }
        Ok(())
    }

    /// Set the per-turn time limit in seconds.
    ///
    /// Only valid while configuring the time limit (timed games only).
    pub fn configure_time_limit(&mut self, seconds: u32) -> Result<(), GameError> {
        self.expect_phase(GamePhase::ConfiguringTimeLimit)?;
        if seconds < 1 {
            return Err(GameError::InvalidConfig);
        }

        self.time_limit_secs = Some(seconds);
        self.enter_phase(GamePhase::SettingNumbers);
        self.prompt = format!("{}, set your 4-digit number.", Player::One);
        Ok(())
    }

    // === Setup ===

    /// Store the acting setup player's secret number.
    ///
    /// Validation failure leaves all state untouched and the same player
    /// stays up. After the second valid number the session enters the
    /// `Playing` phase with Player 1 to guess first.
    pub fn set_player_number(&mut self, input: &str) -> Result<(), GameError> {
        self.expect_phase(GamePhase::SettingNumbers)?;
        let number = SecretNumber::parse(input)?;

        self.secrets[self.active] = Some(number);
        match self.active {
            Player::One => {
                self.active = Player::Two;
                self.prompt = format!("{}, set your 4-digit number.", Player::Two);
            }
            Player::Two => {
                self.active = Player::One;
                self.enter_phase(GamePhase::Playing);
                self.rearm_clock();
                self.prompt = "Game starts! Player 1's turn to guess.".to_string();
            }
        }
        Ok(())
    }

    // === Play ===

    /// Score the active player's guess against the opponent's secret.
    ///
    /// An invalid guess is rejected without being scored, logged, or
    /// consuming a turn. A full match wins immediately (without consuming a
    /// turn); otherwise the turn is consumed and play passes to the
    /// opponent until both players exhaust the turn limit, which draws the
    /// game.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessScore, GameError> {
        self.expect_phase(GamePhase::Playing)?;
        let guess = SecretNumber::parse(input)?;

        let target = self.secrets[self.active.opponent()]
            .expect("both secrets are set before the Playing phase begins");
        let score = guess.score_against(&target);

        if score.is_exact() {
            let entry = FeedbackEntry::for_win(self.active, guess, score);
            self.prompt = entry.message.clone();
            self.history.push_back(entry);
            self.result = GameResult::Win(self.active);
            self.enter_phase(GamePhase::Finished);
            info!("{} wins after {} turns", self.active, self.turns_taken[self.active]);
            return Ok(score);
        }

        self.turns_taken[self.active] += 1;
        let entry = FeedbackEntry::for_guess(self.active, guess, score);
        self.prompt = entry.message.clone();
        self.history.push_back(entry);

        if !self.both_at_turn_limit() {
            self.switch_active();
        }
        // Checked separately from the switch: the limit can be reached on
        // the very guess that consumed the second player's last turn.
        if self.both_at_turn_limit() {
            self.finish_draw();
        }
        Ok(score)
    }

    /// Advance the turn clock by the elapsed seconds since the last tick.
    ///
    /// No-op unless the session is playing with timed turns. On expiry the
    /// timed-out player's turn is consumed, a timeout entry is logged, play
    /// passes to the opponent with a fresh clock, and the turn-limit draw
    /// check runs. Returns true if a timeout fired.
    pub fn advance_clock(&mut self, elapsed_secs: f64) -> bool {
        if self.phase != GamePhase::Playing || !self.options.timed_turns {
            return false;
        }
        debug_assert!(elapsed_secs >= 0.0);

        self.remaining_secs -= elapsed_secs;
        if self.remaining_secs > 0.0 {
            return false;
        }

        let expired = self.active;
        debug!("{expired} timed out");
        let entry = FeedbackEntry::for_timeout(expired);
        self.prompt = entry.message.clone();
        self.history.push_back(entry);

        self.turns_taken[expired] += 1;
        self.switch_active();
        if self.both_at_turn_limit() {
            self.finish_draw();
        }
        true
    }

    /// Return every piece of state to its initial value.
    ///
    /// Valid in any phase. Clears both secrets, all counters, and the full
    /// feedback history; the phase returns to the first configuration step.
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::new(self.options);
    }

    // === Read accessors ===

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The session result (`InProgress` until the phase is `Finished`).
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Whose action comes next (setup or guessing, depending on phase).
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// The configured per-player turn limit (0 until configured).
    #[must_use]
    pub fn turn_limit(&self) -> u32 {
        self.turn_limit
    }

    /// The configured per-turn time limit in seconds, if any.
    #[must_use]
    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit_secs
    }

    /// Turns the given player has consumed.
    #[must_use]
    pub fn turns_taken(&self, player: Player) -> u32 {
        self.turns_taken[player]
    }

    /// Seconds left in the current turn (0 when untimed or not playing).
    #[must_use]
    pub fn remaining_time(&self) -> f64 {
        self.remaining_secs
    }

    /// The latest prompt or announcement for display.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The full feedback history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<FeedbackEntry> {
        &self.history
    }

    /// A player's stored secret (for owner display or end-of-game reveal).
    #[must_use]
    pub fn secret_number(&self, player: Player) -> Option<SecretNumber> {
        self.secrets[player]
    }

    /// The feature toggles this engine was created with.
    #[must_use]
    pub fn options(&self) -> GameOptions {
        self.options
    }

    /// True once the session has finished.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    // === Internals ===

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            warn!("rejected an operation for the {expected} phase while {}", self.phase);
            Err(GameError::IllegalOperation(self.phase))
        }
    }

    fn enter_phase(&mut self, next: GamePhase) {
        debug!("phase: {} -> {next}", self.phase);
        self.phase = next;
    }

    fn switch_active(&mut self) {
        self.active = self.active.opponent();
        self.rearm_clock();
    }

    fn rearm_clock(&mut self) {
        if let Some(limit) = self.time_limit_secs {
            self.remaining_secs = f64::from(limit);
        }
    }

    fn both_at_turn_limit(&self) -> bool {
        self.turns_taken.all(|&taken| taken >= self.turn_limit)
    }

    fn finish_draw(&mut self) {
        self.result = GameResult::Draw;
        self.prompt = "Turn limit reached! It's a draw.".to_string();
        self.enter_phase(GamePhase::Finished);
        info!("draw at the turn limit ({})", self.turn_limit);
    }
}
