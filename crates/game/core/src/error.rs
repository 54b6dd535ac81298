//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`BoardError`, `ExecuteError`) live next to the
//! component that raises them. Legality rejections are not errors at all:
//! they are reported as [`crate::engine::MoveOutcome::Rejected`] plus an
//! event, so only configuration absence and broken invariants surface here.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
/// - **Fatal**: a required collaborator is missing, the call cannot proceed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, e.g. placing a unit outside the board.
    Validation,

    /// Occupancy grid and unit coordinates disagree.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// Required dependency absent, e.g. spending energy without a pool.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
