//! Deterministic random number generation for dealing secret numbers.
//!
//! The engine itself consumes no randomness: players choose their own
//! codes. Hosts that want to deal codes instead (pass-and-play on one
//! device, scripted demos, tests) use `GameRng`, which is deterministic so
//! the same seed always deals the same codes.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::CODE_LENGTH;
use super::secret::SecretNumber;

/// Deterministic RNG that deals valid secret numbers.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness.
///
/// ```
/// use digit_duel::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let code = rng.deal_secret();
///
/// // Same seed, same deal.
/// assert_eq!(GameRng::new(42).deal_secret(), code);
/// ```
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Deal a uniformly random valid secret number.
    ///
    /// Shuffles the digit alphabet and takes a prefix, so uniqueness holds
    /// by construction.
    pub fn deal_secret(&mut self) -> SecretNumber {
        let mut alphabet = [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        alphabet.shuffle(&mut self.inner);

        let mut digits = [0u8; CODE_LENGTH];
        digits.copy_from_slice(&alphabet[..CODE_LENGTH]);
        SecretNumber::from_digits(digits)
    }
}
