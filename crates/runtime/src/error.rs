//! Unified error type surfaced by the runtime.
use game_core::{ExecuteError, Team};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no turn controller registered for {team}")]
    ControllerMissing { team: Team },

    #[error("skirmish needs at least one unit per side")]
    EmptySide { team: Team },

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}
