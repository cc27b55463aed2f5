//! Secret numbers: validation and guess scoring.
//!
//! ## SecretNumber
//!
//! A 4-digit code with no repeated digits. The type can only be constructed
//! through validation, so every held value is well-formed and scoring never
//! has to re-check its inputs.
//!
//! ## Validation
//!
//! Rules are checked in a fixed order, first failure wins:
//! 1. Length must be exactly 4 characters.
//! 2. Every character must be an ASCII digit 0-9.
//! 3. No digit may repeat.
//!
//! The fixed order keeps error messages deterministic for any given input.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::config::CODE_LENGTH;

/// Why an input string is not a valid secret number or guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Input is not exactly 4 characters long.
    #[error("number must be exactly 4 digits long")]
    WrongLength,
    /// Input contains a character that is not an ASCII digit.
    #[error("only numeric digits (0-9) are allowed")]
    NotADigit,
    /// Input contains the same digit more than once.
    #[error("digits must not repeat")]
    RepeatedDigit,
}

/// Validate a candidate secret number or guess.
///
/// Pure function shared by setup and guess submission.
///
/// ```
/// use digit_duel::core::{validate, ValidationError};
///
/// assert!(validate("1234").is_ok());
/// assert_eq!(validate("123"), Err(ValidationError::WrongLength));
/// assert_eq!(validate("12a4"), Err(ValidationError::NotADigit));
/// assert_eq!(validate("1123"), Err(ValidationError::RepeatedDigit));
/// ```
pub fn validate(input: &str) -> Result<(), ValidationError> {
    if input.chars().count() != CODE_LENGTH {
        return Err(ValidationError::WrongLength);
    }

    if !input.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(ValidationError::NotADigit);
    }

    let mut seen = FxHashSet::default();
    for ch in input.chars() {
        if !seen.insert(ch) {
            return Err(ValidationError::RepeatedDigit);
        }
    }

    Ok(())
}

/// A validated 4-unique-digit code.
///
/// Used both for the secrets players set during setup and for the guesses
/// they submit during play; the two sides of a guess are therefore always
/// structurally identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretNumber {
    /// Digit values 0-9, in input order.
    digits: [u8; CODE_LENGTH],
}

impl SecretNumber {
    /// Parse and validate an input string.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        validate(input)?;

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(input.chars()) {
            *slot = ch as u8 - b'0';
        }

        Ok(Self { digits })
    }

    /// Build from digit values already known to be unique and in range.
    ///
    /// Crate-internal; the RNG dealer upholds both invariants by
    /// construction.
    pub(crate) fn from_digits(digits: [u8; CODE_LENGTH]) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9));
        debug_assert!((0..CODE_LENGTH).all(|i| !digits[i + 1..].contains(&digits[i])));
        Self { digits }
    }

    /// Get the digit values in input order.
    #[must_use]
    pub fn digits(&self) -> [u8; CODE_LENGTH] {
        self.digits
    }

    /// Score a guess (`self`) against a target code.
    ///
    /// `correct_digits` counts guess digits present anywhere in the target;
    /// `correct_positions` counts indices where guess and target agree.
    /// Both codes hold unique digits, so a guess digit can match at most one
    /// target digit and the counts never double-count.
    ///
    /// ```
    /// use digit_duel::core::SecretNumber;
    ///
    /// let guess = SecretNumber::parse("1243").unwrap();
    /// let target = SecretNumber::parse("1234").unwrap();
    ///
    /// let score = guess.score_against(&target);
    /// assert_eq!(score.correct_digits, 4);
    /// assert_eq!(score.correct_positions, 2);
    /// ```
    #[must_use]
    pub fn score_against(&self, target: &SecretNumber) -> GuessScore {
        let mut correct_digits = 0;
        let mut correct_positions = 0;

        for (i, &digit) in self.digits.iter().enumerate() {
            if target.digits.contains(&digit) {
                correct_digits += 1;
            }
            if target.digits[i] == digit {
                correct_positions += 1;
            }
        }

        GuessScore {
            correct_digits,
            correct_positions,
        }
    }
}

impl FromStr for SecretNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SecretNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Feedback counts for one scored guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessScore {
    /// Guess digits present anywhere in the target.
    pub correct_digits: u8,
    /// Guess digits matching the target at the same index.
    pub correct_positions: u8,
}

impl GuessScore {
    /// True when every position matches, i.e. the guess equals the target.
    #[must_use]
    pub fn is_exact(self) -> bool {
        self.correct_positions as usize == CODE_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_unique_digits() {
        assert!(validate("1234").is_ok());
        assert!(validate("0987").is_ok());
        assert!(validate("5063").is_ok());
    }

    #[test]
    fn test_validate_length_rule() {
        assert_eq!(validate(""), Err(ValidationError::WrongLength));
        assert_eq!(validate("123"), Err(ValidationError::WrongLength));
        assert_eq!(validate("12345"), Err(ValidationError::WrongLength));
    }

    #[test]
    fn test_validate_digit_rule() {
        assert_eq!(validate("12a4"), Err(ValidationError::NotADigit));
        assert_eq!(validate("abcd"), Err(ValidationError::NotADigit));
        assert_eq!(validate("12.4"), Err(ValidationError::NotADigit));
    }

    #[test]
    fn test_validate_repeat_rule() {
        assert_eq!(validate("1123"), Err(ValidationError::RepeatedDigit));
        assert_eq!(validate("1231"), Err(ValidationError::RepeatedDigit));
        assert_eq!(validate("0000"), Err(ValidationError::RepeatedDigit));
    }

    #[test]
    fn test_validate_rule_order() {
        // Length beats everything.
        assert_eq!(validate("11a"), Err(ValidationError::WrongLength));
        // A non-digit is reported before a repeat, wherever it sits.
        assert_eq!(validate("11a2"), Err(ValidationError::NotADigit));
        assert_eq!(validate("a112"), Err(ValidationError::NotADigit));
    }

    #[test]
    fn test_validate_non_ascii_input() {
        // Multibyte characters count as characters, not bytes.
        assert_eq!(validate("12é4"), Err(ValidationError::NotADigit));
        assert_eq!(validate("éé"), Err(ValidationError::WrongLength));
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let code = SecretNumber::parse("0918").unwrap();
        assert_eq!(code.digits(), [0, 9, 1, 8]);
        assert_eq!(code.to_string(), "0918");
    }

    #[test]
    fn test_from_str() {
        let code: SecretNumber = "4567".parse().unwrap();
        assert_eq!(code.to_string(), "4567");

        let err = "4566".parse::<SecretNumber>();
        assert_eq!(err, Err(ValidationError::RepeatedDigit));
    }

    #[test]
    fn test_score_no_overlap() {
        let guess = SecretNumber::parse("5678").unwrap();
        let target = SecretNumber::parse("1234").unwrap();

        let score = guess.score_against(&target);
        assert_eq!(score.correct_digits, 0);
        assert_eq!(score.correct_positions, 0);
        assert!(!score.is_exact());
    }

    #[test]
    fn test_score_partial_overlap() {
        // 4 and 2 appear in the target; only 2 sits at its target index.
        let guess = SecretNumber::parse("4205").unwrap();
        let target = SecretNumber::parse("1234").unwrap();

        let score = guess.score_against(&target);
        assert_eq!(score.correct_digits, 2);
        assert_eq!(score.correct_positions, 1);
    }

    #[test]
    fn test_score_exact_match() {
        let code = SecretNumber::parse("3907").unwrap();

        let score = code.score_against(&code);
        assert_eq!(score.correct_digits, 4);
        assert_eq!(score.correct_positions, 4);
        assert!(score.is_exact());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::WrongLength.to_string(),
            "number must be exactly 4 digits long"
        );
        assert_eq!(
            ValidationError::NotADigit.to_string(),
            "only numeric digits (0-9) are allowed"
        );
        assert_eq!(
            ValidationError::RepeatedDigit.to_string(),
            "digits must not repeat"
        );
    }

    #[test]
    fn test_secret_number_serialization() {
        let code = SecretNumber::parse("2580").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        let deserialized: SecretNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(code, deserialized);
    }
}
