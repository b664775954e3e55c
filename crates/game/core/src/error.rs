//! Common error infrastructure for cave-core.
//!
//! Domain-specific errors (e.g., `MoveError`, `AttackError`) are defined in their
//! respective modules alongside the actions they validate. This module only
//! holds what they share: a severity classification that frontends use to
//! decide between re-prompting and aborting.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the turn can be retried with another action
/// - **Validation**: the request was invalid for the current menu
/// - **Internal**: state inconsistency, indicates a bug
/// - **Fatal**: the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: no neighbouring room to flee into
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: hotkey not on the menu, attacking a corpse
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: player standing on a position with no tile
    Internal,

    /// Fatal error - game state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the frontend may simply ask for another action.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all cave-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Error type for actions that never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this error should never be constructed")]
pub enum NeverError {}

impl GameError for NeverError {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }

    fn error_code(&self) -> &'static str {
        match *self {}
    }
}
