//! Turn manager: the authoritative energy pool for a running skirmish.

use game_core::{EnergyPool, GameConfig, Team, TurnState};

use crate::events::{Event, EventBus, TurnEvent};

/// [`EnergyPool`] that publishes every turn and energy change on the bus.
///
/// Wraps a [`TurnState`]; the bookkeeping rules live there, this type only
/// adds observability.
pub struct TurnManager {
    state: TurnState,
    bus: EventBus,
}

impl TurnManager {
    pub fn new(config: &GameConfig, bus: EventBus) -> Self {
        Self {
            state: TurnState::new(config),
            bus,
        }
    }

    pub fn turn(&self) -> u32 {
        self.state.turn()
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Publishes the current turn as started without changing anything.
    ///
    /// Used once when a skirmish begins, since the first turn is set up by
    /// construction rather than by `begin_turn`.
    pub fn announce(&self) {
        self.publish_started();
    }

    fn publish_started(&self) {
        tracing::info!(
            team = %self.state.acting_team(),
            turn = self.state.turn(),
            energy = self.state.remaining(),
            "turn started"
        );
        self.bus.publish(Event::Turn(TurnEvent::TurnStarted {
            team: self.state.acting_team(),
            turn: self.state.turn(),
            energy: self.state.remaining(),
            max: self.state.max_per_turn(),
        }));
    }

    fn publish_energy(&self) {
        self.bus.publish(Event::Turn(TurnEvent::EnergyChanged {
            team: self.state.acting_team(),
            remaining: self.state.remaining(),
            max: self.state.max_per_turn(),
        }));
    }
}

impl EnergyPool for TurnManager {
    fn acting_team(&self) -> Team {
        self.state.acting_team()
    }

    fn remaining(&self) -> u32 {
        self.state.remaining()
    }

    fn max_per_turn(&self) -> u32 {
        self.state.max_per_turn()
    }

    fn try_spend(&mut self, cost: u32) -> bool {
        if !self.state.try_spend(cost) {
            tracing::debug!(
                cost,
                remaining = self.state.remaining(),
                "insufficient energy"
            );
            return false;
        }
        self.publish_energy();
        true
    }

    fn begin_turn(&mut self, team: Team) {
        self.state.begin_turn(team);
        self.publish_started();
        self.publish_energy();
    }

    fn end_turn(&mut self) {
        let team = self.state.acting_team();
        tracing::info!(%team, turn = self.state.turn(), "turn ended");
        self.bus.publish(Event::Turn(TurnEvent::TurnEnded {
            team,
            turn: self.state.turn(),
        }));
        self.begin_turn(team.opponent());
    }
}
