//! Match orchestration: alternate team controllers until one side is gone.

use std::collections::HashMap;

use game_core::{Board, EnergyPool, GameConfig, Team};
use strum::IntoEnumIterator;
use tracing::info;

use crate::error::{Result, RuntimeError};
use crate::events::EventBus;
use crate::providers::TurnController;
use crate::turn::TurnManager;

/// How a skirmish ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkirmishResult {
    /// `None` when the turn limit was reached with both sides standing.
    pub winner: Option<Team>,
    pub turns_played: u32,
}

/// Owns the board and turn manager of one match and drives the controllers.
pub struct Skirmish {
    board: Board,
    turns: TurnManager,
    controllers: HashMap<Team, Box<dyn TurnController>>,
    max_turns: u32,
}

impl Skirmish {
    pub const DEFAULT_MAX_TURNS: u32 = 200;

    pub fn new(board: Board, config: &GameConfig, bus: EventBus) -> Self {
        Self {
            board,
            turns: TurnManager::new(config, bus),
            controllers: HashMap::new(),
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }

    /// Registers a controller for its team, replacing any previous one.
    pub fn with_controller(mut self, controller: Box<dyn TurnController>) -> Self {
        self.controllers.insert(controller.team(), controller);
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turns(&self) -> &TurnManager {
        &self.turns
    }

    /// `Some(winner)` once at most one side has units left.
    fn decided(&self) -> Option<Option<Team>> {
        let standing: Vec<Team> = Team::iter()
            .filter(|&team| self.board.units_of(team).next().is_some())
            .collect();
        match standing.as_slice() {
            [] => Some(None),
            [team] => Some(Some(*team)),
            _ => None,
        }
    }

    /// Plays turns until one side has no units or the turn limit is reached.
    pub async fn run(&mut self) -> Result<SkirmishResult> {
        for team in Team::iter() {
            if !self.controllers.contains_key(&team) {
                return Err(RuntimeError::ControllerMissing { team });
            }
            if self.board.units_of(team).next().is_none() {
                return Err(RuntimeError::EmptySide { team });
            }
        }

        self.turns.announce();
        let mut turns_played = 0;
        while turns_played < self.max_turns {
            if let Some(winner) = self.decided() {
                info!(?winner, turns_played, "skirmish decided");
                return Ok(SkirmishResult {
                    winner,
                    turns_played,
                });
            }

            let team = self.turns.acting_team();
            let controller = self
                .controllers
                .get_mut(&team)
                .ok_or(RuntimeError::ControllerMissing { team })?;
            let summary = controller.play_turn(&mut self.board, &mut self.turns).await?;
            turns_played += 1;
            info!(
                %team,
                turn = self.turns.turn(),
                actions = summary.actions,
                reason = %summary.reason,
                "turn played"
            );

            // Controllers that stop without ending their turn lose it here.
            if self.turns.acting_team() == team {
                self.turns.end_turn();
            }
        }

        let winner = self.decided().flatten();
        info!(?winner, turns_played, "turn limit reached");
        Ok(SkirmishResult {
            winner,
            turns_played,
        })
    }
}
