//! Move assembly: composes rules, modifiers and tile effects into the legal
//! move list of one unit.
//!
//! # Pipeline
//!
//! 1. Union the raw destinations of every movement rule (first-seen order).
//! 2. Fold through every modifier, base then runtime.
//! 3. Fold through the tile rules of the origin cell.
//! 4. Per distinct coordinate: drop out-of-bounds and same-team cells, take
//!    Chebyshev distance (or the rule set's fixed jump cost), drop cells whose
//!    tile rules deny entry, fold the cost through modifier cost hooks and
//!    floor it at [`GameConfig::MIN_MOVE_COST`].
//! 5. Flag captures where an enemy stands.
//!
//! Results are recomputed on every query and never cached.
use std::collections::HashSet;

use crate::board::Board;
use crate::config::GameConfig;
use crate::state::{Position, Unit, UnitId};

/// One legal destination for a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOption {
    pub destination: Position,
    /// Energy charged for the move, at least one.
    pub cost: u32,
    pub is_capture: bool,
}

/// Legal moves of the unit with `id`; empty when no such unit exists.
pub fn legal_moves(board: &Board, id: UnitId) -> Vec<MoveOption> {
    board
        .unit(id)
        .map(|unit| legal_moves_for(board, unit))
        .unwrap_or_default()
}

pub fn legal_moves_for(board: &Board, unit: &Unit) -> Vec<MoveOption> {
    let rules = unit.archetype().rules();
    if rules.is_empty() {
        return Vec::new();
    }

    let origin = unit.position();
    let raw: Vec<Position> = rules
        .iter()
        .flat_map(|rule| rule.destinations(unit, board))
        .collect();
    let raw = unit
        .all_modifiers()
        .fold(raw, |moves, modifier| modifier.filter_moves(unit, board, moves));
    let raw = board
        .tile_rules(origin)
        .iter()
        .fold(raw, |moves, tile| tile.affect_moves_on_origin(unit, board, moves));

    let fixed_cost = rules.iter().find_map(|rule| rule.fixed_cost());
    let mut seen = HashSet::with_capacity(raw.len());
    raw.into_iter()
        .filter(|cell| seen.insert(*cell))
        .filter_map(|destination| assemble(board, unit, origin, destination, fixed_cost))
        .collect()
}

fn assemble(
    board: &Board,
    unit: &Unit,
    origin: Position,
    destination: Position,
    fixed_cost: Option<u32>,
) -> Option<MoveOption> {
    if !board.contains(destination) {
        return None;
    }
    let occupant = board.unit_at(destination);
    if occupant.is_some_and(|o| o.team() == unit.team()) {
        return None;
    }

    let base = fixed_cost.unwrap_or_else(|| origin.chebyshev(destination));
    if !board
        .tile_rules(destination)
        .iter()
        .all(|tile| tile.allow_enter(unit, board, destination))
    {
        return None;
    }

    let cost = unit.all_modifiers().fold(base as i32, |cost, modifier| {
        modifier.adjust_move_cost(unit, origin, destination, cost)
    });

    Some(MoveOption {
        destination,
        cost: cost.max(GameConfig::MIN_MOVE_COST as i32) as u32,
        is_capture: occupant.is_some(),
    })
}
