//! Event types for the turn topic.

use game_core::Team;
use serde::{Deserialize, Serialize};

/// Events related to turn management (lightweight)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    TurnStarted {
        team: Team,
        turn: u32,
        energy: u32,
        max: u32,
    },
    EnergyChanged {
        team: Team,
        remaining: u32,
        max: u32,
    },
    TurnEnded {
        team: Team,
        turn: u32,
    },
}
