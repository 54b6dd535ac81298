use crate::board::BoardError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitId;

/// Failures that abort a move attempt.
///
/// Ordinary rejections (not enough energy, blocked destination) are not
/// errors; see [`super::RejectReason`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("unit {unit} asked to spend energy but no energy pool is configured")]
    MissingEnergyPool { unit: UnitId },

    #[error("unit {unit} disappeared while its move was being applied")]
    UnitVanished { unit: UnitId },

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingEnergyPool { .. } => ErrorSeverity::Fatal,
            Self::UnitVanished { .. } => ErrorSeverity::Internal,
            Self::Board(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingEnergyPool { .. } => "EXECUTE_MISSING_ENERGY_POOL",
            Self::UnitVanished { .. } => "EXECUTE_UNIT_VANISHED",
            Self::Board(err) => err.error_code(),
        }
    }
}
