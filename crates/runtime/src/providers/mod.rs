//! Turn controllers: whoever decides what a side does with its turn.
//!
//! Runtime users plug in [`TurnController`] implementations so a skirmish can
//! run with AI agents, scripted fixtures, or sides that simply pass.
use async_trait::async_trait;
use game_core::{Board, EnergyPool, Team};

use crate::error::Result;
use crate::turn::TurnManager;

pub mod ai;

use ai::{EndReason, TurnSummary};

/// Plays whole turns for one team.
#[async_trait]
pub trait TurnController: Send {
    fn team(&self) -> Team;

    /// Plays the team's current turn on `board`.
    ///
    /// Implementations normally finish by calling `end_turn` on `turns`; a
    /// controller that returns while its team is still acting leaves the
    /// side switch to the caller.
    async fn play_turn(&mut self, board: &mut Board, turns: &mut TurnManager)
    -> Result<TurnSummary>;
}

/// Controller that ends every turn immediately.
#[derive(Debug, Clone, Copy)]
pub struct PassController {
    team: Team,
}

impl PassController {
    pub fn new(team: Team) -> Self {
        Self { team }
    }
}

#[async_trait]
impl TurnController for PassController {
    fn team(&self) -> Team {
        self.team
    }

    async fn play_turn(
        &mut self,
        _board: &mut Board,
        turns: &mut TurnManager,
    ) -> Result<TurnSummary> {
        if turns.acting_team() == self.team {
            turns.end_turn();
        }
        Ok(TurnSummary {
            actions: 0,
            reason: EndReason::Passed,
        })
    }
}
