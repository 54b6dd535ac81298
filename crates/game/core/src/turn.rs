//! Turn and energy bookkeeping.

use crate::config::GameConfig;
use crate::state::Team;

/// Per-turn energy budget consumed by moves.
///
/// Implementations are the single writer of the acting team and its energy.
/// `try_spend` is the only way energy decreases and it must check and deduct
/// in one step.
pub trait EnergyPool: Send {
    fn acting_team(&self) -> Team;

    fn remaining(&self) -> u32;

    fn max_per_turn(&self) -> u32;

    /// Deducts `cost` if enough energy remains; otherwise changes nothing.
    fn try_spend(&mut self, cost: u32) -> bool;

    /// Hands the turn to `team` with a full budget.
    fn begin_turn(&mut self, team: Team);

    /// Ends the current turn and begins the opponent's.
    fn end_turn(&mut self);

    /// Energy that would remain after paying `cost`, clamped to `[0, max]`.
    fn preview_remaining(&self, cost: u32) -> u32 {
        self.remaining()
            .saturating_sub(cost)
            .min(self.max_per_turn())
    }
}

/// Plain in-memory [`EnergyPool`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    team: Team,
    remaining: u32,
    max_per_turn: u32,
    turn: u32,
}

impl TurnState {
    /// Starts turn 1 for `config.starting_team` with a full budget.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            team: config.starting_team,
            remaining: config.max_energy_per_turn,
            max_per_turn: config.max_energy_per_turn,
            turn: 1,
        }
    }

    /// Turn counter, starting at 1 and increased by every `begin_turn`.
    pub fn turn(&self) -> u32 {
        self.turn
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl EnergyPool for TurnState {
    fn acting_team(&self) -> Team {
        self.team
    }

    fn remaining(&self) -> u32 {
        self.remaining
    }

    fn max_per_turn(&self) -> u32 {
        self.max_per_turn
    }

    fn try_spend(&mut self, cost: u32) -> bool {
        if self.remaining < cost {
            return false;
        }
        self.remaining -= cost;
        true
    }

    fn begin_turn(&mut self, team: Team) {
        self.team = team;
        self.remaining = self.max_per_turn;
        self.turn += 1;
    }

    fn end_turn(&mut self) {
        self.begin_turn(self.team.opponent());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spending_is_all_or_nothing() {
        let mut turn = TurnState::default();
        assert_eq!(turn.remaining(), 6);
        assert!(turn.try_spend(4));
        assert!(!turn.try_spend(3));
        assert_eq!(turn.remaining(), 2);
        assert!(turn.try_spend(0));
        assert!(turn.try_spend(2));
        assert_eq!(turn.remaining(), 0);
    }

    #[test]
    fn end_turn_switches_team_and_refills() {
        let mut turn = TurnState::default();
        turn.try_spend(5);
        turn.end_turn();
        assert_eq!(turn.acting_team(), Team::Black);
        assert_eq!(turn.remaining(), 6);
        assert_eq!(turn.turn(), 2);
    }

    #[test]
    fn preview_clamps_at_zero() {
        let mut turn = TurnState::default();
        turn.try_spend(5);
        assert_eq!(turn.preview_remaining(3), 0);
        assert_eq!(turn.preview_remaining(1), 0);
        assert_eq!(turn.preview_remaining(0), 1);
    }
}
