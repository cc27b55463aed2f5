//! Feedback history records.
//!
//! One `FeedbackEntry` is appended per resolved guess and per expired turn.
//! Entries are immutable once created; the engine keeps them in an
//! append-only `im::Vector` that the view layer reads in full (truncating
//! to the most recent N for display is the view's business, not ours).

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::secret::{GuessScore, SecretNumber};

/// What a feedback entry records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    /// A scored guess, including the winning one.
    Guess {
        /// The submitted guess.
        guess: SecretNumber,
        /// Digit/position match counts against the opponent's secret.
        score: GuessScore,
    },
    /// The acting player's turn clock expired.
    Timeout,
}

/// One record in the feedback history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// The player whose action (or expiry) produced this entry.
    pub player: Player,
    /// Structured payload.
    pub kind: FeedbackKind,
    /// Rendered message for display.
    pub message: String,
}

impl FeedbackEntry {
    /// Entry for a scored, non-winning guess.
    #[must_use]
    pub fn for_guess(player: Player, guess: SecretNumber, score: GuessScore) -> Self {
        let message = format!(
            "Guess: {guess} - {player}: {} correct digits, {} in position.",
            score.correct_digits, score.correct_positions
        );
        Self {
            player,
            kind: FeedbackKind::Guess { guess, score },
            message,
        }
    }

    /// Entry for the winning guess.
    #[must_use]
    pub fn for_win(player: Player, guess: SecretNumber, score: GuessScore) -> Self {
        Self {
            player,
            kind: FeedbackKind::Guess { guess, score },
            message: format!("{player} wins!"),
        }
    }

    /// Entry for an expired turn.
    #[must_use]
    pub fn for_timeout(player: Player) -> Self {
        Self {
            player,
            kind: FeedbackKind::Timeout,
            message: format!("{player} ran out of time!"),
        }
    }

    /// The recorded guess, if this entry is for one.
    #[must_use]
    pub fn guess(&self) -> Option<SecretNumber> {
        match self.kind {
            FeedbackKind::Guess { guess, .. } => Some(guess),
            FeedbackKind::Timeout => None,
        }
    }

    /// The recorded score, if this entry is for a guess.
    #[must_use]
    pub fn score(&self) -> Option<GuessScore> {
        match self.kind {
            FeedbackKind::Guess { score, .. } => Some(score),
            FeedbackKind::Timeout => None,
        }
    }

    /// True for turn-expiry entries.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, FeedbackKind::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_entry_message() {
        let guess = SecretNumber::parse("4205").unwrap();
        let target = SecretNumber::parse("1234").unwrap();
        let score = guess.score_against(&target);

        let entry = FeedbackEntry::for_guess(Player::One, guess, score);

        assert_eq!(
            entry.message,
            "Guess: 4205 - Player 1: 2 correct digits, 1 in position."
        );
        assert_eq!(entry.player, Player::One);
        assert_eq!(entry.guess(), Some(guess));
        assert_eq!(entry.score(), Some(score));
        assert!(!entry.is_timeout());
    }

    #[test]
    fn test_win_entry_message() {
        let guess = SecretNumber::parse("1234").unwrap();
        let score = guess.score_against(&guess);

        let entry = FeedbackEntry::for_win(Player::Two, guess, score);

        assert_eq!(entry.message, "Player 2 wins!");
        assert!(entry.score().unwrap().is_exact());
    }

    #[test]
    fn test_timeout_entry() {
        let entry = FeedbackEntry::for_timeout(Player::Two);

        assert_eq!(entry.message, "Player 2 ran out of time!");
        assert_eq!(entry.guess(), None);
        assert_eq!(entry.score(), None);
        assert!(entry.is_timeout());
    }

    #[test]
    fn test_entry_serialization() {
        let guess = SecretNumber::parse("5678").unwrap();
        let target = SecretNumber::parse("1234").unwrap();
        let entry = FeedbackEntry::for_guess(Player::Two, guess, guess.score_against(&target));

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: FeedbackEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, deserialized);
    }
}
