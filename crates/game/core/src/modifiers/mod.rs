//! Stackable modifiers attached to archetypes (base) or units (runtime).
//!
//! Every hook has a pass-through default so a modifier only overrides what it
//! changes. Transform hooks (`filter_moves`, `adjust_*`) are folded in
//! base-then-runtime order; reaction hooks fire only during real execution,
//! never under [`crate::board::Simulation`].
use crate::board::Board;
use crate::state::{Position, Unit};

pub trait Modifier: Send + Sync {
    fn name(&self) -> &str;

    /// Receives the accumulated destination set and returns its replacement.
    fn filter_moves(&self, _unit: &Unit, _board: &Board, moves: Vec<Position>) -> Vec<Position> {
        moves
    }

    fn adjust_move_cost(&self, _unit: &Unit, _from: Position, _to: Position, cost: i32) -> i32 {
        cost
    }

    fn adjust_attack(&self, _unit: &Unit, attack: i32) -> i32 {
        attack
    }

    fn adjust_max_health(&self, _unit: &Unit, max_health: i32) -> i32 {
        max_health
    }

    fn on_enter_tile(&self, _unit: &Unit, _cell: Position) {}

    fn on_leave_tile(&self, _unit: &Unit, _cell: Position) {}

    fn on_damage_taken(&self, _unit: &Unit, _amount: u32) {}

    fn on_kill(&self, _unit: &Unit, _victim: &Unit) {}

    fn on_attach(&self, _unit: &Unit) {}

    fn on_detach(&self, _unit: &Unit) {}
}

/// Adds the eight neighbouring cells to whatever the unit could already reach.
#[derive(Clone, Debug, Default)]
pub struct StepPlusOne;

impl Modifier for StepPlusOne {
    fn name(&self) -> &str {
        "step-plus-one"
    }

    fn filter_moves(&self, unit: &Unit, _board: &Board, mut moves: Vec<Position>) -> Vec<Position> {
        let origin = unit.position();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx != 0 || dy != 0 {
                    moves.push(origin.offset(dx, dy));
                }
            }
        }
        moves
    }
}

/// Flat attack and max-health bonus (negative values act as penalties).
#[derive(Clone, Debug)]
pub struct StatBonus {
    attack: i32,
    max_health: i32,
}

impl StatBonus {
    pub fn new(attack: i32, max_health: i32) -> Self {
        Self { attack, max_health }
    }
}

impl Modifier for StatBonus {
    fn name(&self) -> &str {
        "stat-bonus"
    }

    fn adjust_attack(&self, _unit: &Unit, attack: i32) -> i32 {
        attack + self.attack
    }

    fn adjust_max_health(&self, _unit: &Unit, max_health: i32) -> i32 {
        max_health + self.max_health
    }
}

/// Reduces every move cost by a fixed discount. The pipeline floors the
/// result at one.
#[derive(Clone, Debug)]
pub struct Haste {
    discount: i32,
}

impl Haste {
    pub fn new(discount: i32) -> Self {
        Self { discount }
    }
}

impl Modifier for Haste {
    fn name(&self) -> &str {
        "haste"
    }

    fn adjust_move_cost(&self, _unit: &Unit, _from: Position, _to: Position, cost: i32) -> i32 {
        cost - self.discount
    }
}
