//! Per-cell tile rules: origin move filters, entry gates and triggers.
//!
//! Triggers do not mutate the unit themselves. They describe [`TileEffect`]s
//! which [`crate::engine::execute_move`] applies after the unit has moved, so
//! every resulting health change is reported as an event.
use crate::board::Board;
use crate::state::{Position, Unit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileEffect {
    Damage(u32),
    Heal(u32),
}

pub trait TileRule: Send + Sync {
    fn name(&self) -> &str;

    /// Replaces the accumulated destination set while a unit stands on this cell.
    fn affect_moves_on_origin(
        &self,
        _unit: &Unit,
        _board: &Board,
        moves: Vec<Position>,
    ) -> Vec<Position> {
        moves
    }

    fn allow_enter(&self, _unit: &Unit, _board: &Board, _cell: Position) -> bool {
        true
    }

    fn on_enter(&self, _unit: &Unit, _cell: Position) -> Vec<TileEffect> {
        Vec::new()
    }

    fn on_leave(&self, _unit: &Unit, _cell: Position) -> Vec<TileEffect> {
        Vec::new()
    }
}

/// Burns any unit that steps onto the cell.
#[derive(Clone, Debug)]
pub struct Lava {
    damage: u32,
}

impl Lava {
    pub fn new(damage: u32) -> Self {
        Self { damage }
    }
}

impl Default for Lava {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileRule for Lava {
    fn name(&self) -> &str {
        "lava"
    }

    fn on_enter(&self, _unit: &Unit, _cell: Position) -> Vec<TileEffect> {
        vec![TileEffect::Damage(self.damage)]
    }
}

/// Impassable cell.
#[derive(Clone, Debug, Default)]
pub struct Wall;

impl TileRule for Wall {
    fn name(&self) -> &str {
        "wall"
    }

    fn allow_enter(&self, _unit: &Unit, _board: &Board, _cell: Position) -> bool {
        false
    }
}

/// Sticky ground: a unit standing here can only reach adjacent cells.
#[derive(Clone, Debug, Default)]
pub struct Mire;

impl TileRule for Mire {
    fn name(&self) -> &str {
        "mire"
    }

    fn affect_moves_on_origin(
        &self,
        unit: &Unit,
        _board: &Board,
        moves: Vec<Position>,
    ) -> Vec<Position> {
        let origin = unit.position();
        moves
            .into_iter()
            .filter(|cell| origin.chebyshev(*cell) <= 1)
            .collect()
    }
}
