//! The governor error taxonomy.
//!
//! Every rejected operation fails with exactly one of these variants and
//! leaves all engine state untouched.

use thiserror::Error;

/// Errors returned by governor entry points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GovernorError {
    /// The caller does not hold the role required for the operation.
    #[error("caller is not qualified for this operation")]
    Unqualified,

    /// The caller already voted for this candidate or transaction.
    #[error("caller has already voted")]
    AlreadyVoted,

    /// A mutation was attempted on a transaction that already executed.
    #[error("transaction has already been executed")]
    AlreadyExecuted,

    /// Unknown transaction id, or an ungoverned (target, selector) pair.
    #[error("not found")]
    NotFound,

    /// A function threshold below 1 was supplied.
    #[error("required votes must be at least 1")]
    InvalidThreshold,

    /// A state-mutating call arrived while the engine is paused, or a
    /// pause was requested while already paused.
    #[error("engine is paused")]
    Paused,

    /// An unpause vote arrived while the engine is running.
    #[error("engine is not paused")]
    NotPaused,

    /// A call payload too short to carry a selector.
    #[error("call payload is malformed")]
    MalformedPayload,

    /// The downstream collaborator rejected the dispatched call; the
    /// triggering vote was not committed.
    #[error("downstream call failed: {0}")]
    CallFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unqualified_display() {
        let err = GovernorError::Unqualified;
        assert_eq!(err.to_string(), "caller is not qualified for this operation");
    }

    #[test]
    fn call_failed_carries_reason() {
        let err = GovernorError::CallFailed("collaborator unavailable".into());
        assert!(err.to_string().contains("collaborator unavailable"));
    }

    #[test]
    fn variants_are_comparable() {
        assert_eq!(GovernorError::AlreadyVoted, GovernorError::AlreadyVoted);
        assert_ne!(GovernorError::Paused, GovernorError::NotPaused);
    }
}
