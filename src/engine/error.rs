//! Error taxonomy for engine operations.
//!
//! Every error is recoverable at the caller: the engine rejects the
//! operation, leaves its state untouched, and the host re-prompts or fixes
//! its call site. Nothing here is fatal to the process.

use thiserror::Error;

use super::game::GamePhase;
use crate::core::secret::ValidationError;

/// Why an engine operation was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A turn limit or time limit below the minimum of 1.
    ///
    /// The caller should re-prompt; the phase does not advance.
    #[error("limit must be at least 1")]
    InvalidConfig,

    /// The submitted number or guess failed validation.
    ///
    /// The caller should display the reason and allow a retry; no turn is
    /// consumed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation is not valid in the current phase.
    ///
    /// A caller bug: the engine rejects it as a no-op instead of corrupting
    /// state. Carries the phase the engine was actually in.
    #[error("operation not available while {0}")]
    IllegalOperation(GamePhase),
}
