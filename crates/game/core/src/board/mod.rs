//! Board state: geometry, occupancy and the units standing on it.
//!
//! The board owns every [`Unit`]; the [`OccupancyGrid`] only stores ids. The
//! grid and each unit's own coordinate must agree after every mutation, which
//! [`Board::check_invariants`] verifies (and debug builds assert).
mod geometry;
mod grid;
mod simulation;

pub use geometry::{approach_cell, line_between};
pub use grid::OccupancyGrid;
pub use simulation::{SimSnapshot, Simulation};

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::env::{MapDimensions, MapOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::events::EventSink;
use crate::modifiers::Modifier;
use crate::state::{Archetype, Position, Team, Unit, UnitId};
use crate::tiles::TileRule;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board has no occupancy grid allocated")]
    MissingGrid,

    #[error("position {position} is outside the board")]
    OutOfBounds { position: Position },

    #[error("position {position} is already occupied by unit {occupant}")]
    Occupied { position: Position, occupant: UnitId },

    #[error("unit {unit} not found")]
    UnitNotFound { unit: UnitId },

    #[error("occupancy desync at {position}: grid holds {grid:?}, unit {unit} claims the cell")]
    OccupancyDesync {
        position: Position,
        unit: UnitId,
        grid: Option<UnitId>,
    },
}

impl GameError for BoardError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingGrid => ErrorSeverity::Fatal,
            Self::OutOfBounds { .. } | Self::Occupied { .. } | Self::UnitNotFound { .. } => {
                ErrorSeverity::Validation
            }
            Self::OccupancyDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingGrid => "BOARD_MISSING_GRID",
            Self::OutOfBounds { .. } => "BOARD_OUT_OF_BOUNDS",
            Self::Occupied { .. } => "BOARD_OCCUPIED",
            Self::UnitNotFound { .. } => "BOARD_UNIT_NOT_FOUND",
            Self::OccupancyDesync { .. } => "BOARD_OCCUPANCY_DESYNC",
        }
    }
}

pub struct Board {
    map: Arc<dyn MapOracle>,
    grid: Option<OccupancyGrid>,
    units: BTreeMap<UnitId, Unit>,
    next_id: u32,
}

impl Board {
    /// Creates an empty board with an occupancy grid sized from the map.
    pub fn new(map: Arc<dyn MapOracle>) -> Self {
        let grid = OccupancyGrid::new(map.dimensions());
        Self {
            map,
            grid: Some(grid),
            units: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Creates a board whose occupancy grid has not been allocated.
    ///
    /// Such a board answers geometry queries but refuses placement and
    /// simulation.
    pub fn without_grid(map: Arc<dyn MapOracle>) -> Self {
        Self {
            map,
            grid: None,
            units: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn map(&self) -> &Arc<dyn MapOracle> {
        &self.map
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.map.dimensions()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.map.contains(position)
    }

    pub fn tile_rules(&self, position: Position) -> &[Arc<dyn TileRule>] {
        self.map.tile_rules(position)
    }

    pub fn grid(&self) -> Option<&OccupancyGrid> {
        self.grid.as_ref()
    }

    pub fn occupant(&self, position: Position) -> Option<UnitId> {
        self.grid.as_ref()?.get(position)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    pub fn unit_at(&self, position: Position) -> Option<&Unit> {
        self.occupant(position).and_then(|id| self.units.get(&id))
    }

    /// All units in id order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Units of `team` standing on the grid.
    ///
    /// A defender cleared by a running simulation is skipped.
    pub fn units_of(&self, team: Team) -> impl Iterator<Item = &Unit> {
        self.units
            .values()
            .filter(move |u| u.team() == team && self.stands(u))
    }

    fn stands(&self, unit: &Unit) -> bool {
        match &self.grid {
            Some(grid) => grid.get(unit.position()) == Some(unit.id()),
            None => true,
        }
    }

    pub fn unit_ids_of(&self, team: Team) -> Vec<UnitId> {
        self.units_of(team).map(Unit::id).collect()
    }

    pub fn enemies_of(&self, team: Team) -> impl Iterator<Item = &Unit> {
        self.units_of(team.opponent())
    }

    /// Closest enemy of `team` by Manhattan distance; ties go to the lower id.
    pub fn nearest_enemy(&self, from: Position, team: Team) -> Option<&Unit> {
        self.enemies_of(team)
            .min_by_key(|enemy| (from.manhattan(enemy.position()), enemy.id()))
    }

    pub fn place_unit(
        &mut self,
        archetype: Arc<Archetype>,
        team: Team,
        position: Position,
    ) -> Result<UnitId, BoardError> {
        let grid = self.grid.as_mut().ok_or(BoardError::MissingGrid)?;
        if !grid.contains(position) {
            return Err(BoardError::OutOfBounds { position });
        }
        if let Some(occupant) = grid.get(position) {
            return Err(BoardError::Occupied { position, occupant });
        }

        let id = UnitId(self.next_id);
        self.next_id += 1;
        grid.set(position, id);
        self.units
            .insert(id, Unit::new(id, archetype, team, position));
        debug_assert!(self.check_invariants().is_ok());
        Ok(id)
    }

    /// Removes a unit from the grid and destroys it.
    pub fn remove_unit(&mut self, id: UnitId) -> Option<Unit> {
        let unit = self.units.remove(&id)?;
        if let Some(grid) = self.grid.as_mut()
            && grid.get(unit.position()) == Some(id)
        {
            grid.clear(unit.position());
        }
        debug_assert!(self.check_invariants().is_ok());
        Some(unit)
    }

    /// Moves a unit to an empty in-bounds cell, updating grid and coordinate.
    pub(crate) fn relocate(&mut self, id: UnitId, to: Position) -> Result<(), BoardError> {
        let grid = self.grid.as_mut().ok_or(BoardError::MissingGrid)?;
        let unit = self
            .units
            .get_mut(&id)
            .ok_or(BoardError::UnitNotFound { unit: id })?;
        if !grid.contains(to) {
            return Err(BoardError::OutOfBounds { position: to });
        }
        match grid.get(to) {
            Some(occupant) if occupant != id => {
                return Err(BoardError::Occupied {
                    position: to,
                    occupant,
                });
            }
            _ => {}
        }

        let from = unit.position();
        if grid.get(from) != Some(id) {
            return Err(BoardError::OccupancyDesync {
                position: from,
                unit: id,
                grid: grid.get(from),
            });
        }
        grid.clear(from);
        grid.set(to, id);
        unit.set_position(to);
        debug_assert!(self.check_invariants().is_ok());
        Ok(())
    }

    /// Attaches a runtime modifier and reports the resulting health change.
    pub fn attach_modifier(
        &mut self,
        id: UnitId,
        modifier: Arc<dyn Modifier>,
        events: &mut dyn EventSink,
    ) -> Result<(), BoardError> {
        let unit = self
            .units
            .get_mut(&id)
            .ok_or(BoardError::UnitNotFound { unit: id })?;
        let change = unit.attach_modifier(modifier);
        events.emit(change.into_event());
        Ok(())
    }

    /// Detaches the most recent runtime modifier named `name`.
    ///
    /// Returns `Ok(false)` when the unit carries no such modifier.
    pub fn detach_modifier(
        &mut self,
        id: UnitId,
        name: &str,
        events: &mut dyn EventSink,
    ) -> Result<bool, BoardError> {
        let unit = self
            .units
            .get_mut(&id)
            .ok_or(BoardError::UnitNotFound { unit: id })?;
        match unit.detach_modifier(name) {
            Some((_, change)) => {
                events.emit(change.into_event());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Re-derives a unit's stats; emits `health-changed` only when they moved.
    pub fn refresh_stats(
        &mut self,
        id: UnitId,
        events: &mut dyn EventSink,
    ) -> Result<(), BoardError> {
        let unit = self
            .units
            .get_mut(&id)
            .ok_or(BoardError::UnitNotFound { unit: id })?;
        let max_before = unit.max_health();
        let change = unit.recompute_stats(false);
        if change.old != change.new || change.max != max_before {
            events.emit(change.into_event());
        }
        Ok(())
    }

    /// Verifies that the grid and every unit coordinate agree.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        self.check_invariants_except(None)
    }

    /// Same as [`Board::check_invariants`], ignoring `off_grid`'s own claim
    /// on its cell.
    pub(crate) fn check_invariants_except(
        &self,
        off_grid: Option<UnitId>,
    ) -> Result<(), BoardError> {
        let Some(grid) = self.grid.as_ref() else {
            return if self.units.is_empty() {
                Ok(())
            } else {
                Err(BoardError::MissingGrid)
            };
        };

        for unit in self.units.values().filter(|u| Some(u.id()) != off_grid) {
            let cell = grid.get(unit.position());
            if cell != Some(unit.id()) {
                return Err(BoardError::OccupancyDesync {
                    position: unit.position(),
                    unit: unit.id(),
                    grid: cell,
                });
            }
        }
        for (position, id) in grid.occupied() {
            match self.units.get(&id) {
                Some(unit) if unit.position() == position => {}
                _ => {
                    return Err(BoardError::OccupancyDesync {
                        position,
                        unit: id,
                        grid: Some(id),
                    });
                }
            }
        }
        Ok(())
    }
}
