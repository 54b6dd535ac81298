//! Move execution: the only path that applies real moves to a board.
//!
//! Each attempt ends in one of four states: [`MoveOutcome::Moved`],
//! [`MoveOutcome::AttackedKill`], [`MoveOutcome::AttackedNoKill`] or
//! [`MoveOutcome::Rejected`]. Rejections are ordinary results reported through
//! events; `Err` is reserved for misconfiguration and broken invariants.
mod errors;

pub use errors::ExecuteError;

use crate::board::{Board, approach_cell};
use crate::combat::resolve_attack;
use crate::events::{EventSink, GameEvent};
use crate::moves::MoveOption;
use crate::state::{Position, UnitId};
use crate::tiles::TileEffect;
use crate::turn::EnergyPool;

/// One attempted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub unit: UnitId,
    pub destination: Position,
    pub cost: u32,
    /// Charge `cost` to the energy pool before acting.
    pub spend_energy: bool,
}

impl MoveRequest {
    /// Request for a legal move option, paid from the energy pool.
    pub fn from_option(unit: UnitId, option: &MoveOption) -> Self {
        Self {
            unit,
            destination: option.destination,
            cost: option.cost,
            spend_energy: true,
        }
    }

    /// Scripted move that does not touch the energy pool.
    pub fn free(unit: UnitId, destination: Position) -> Self {
        Self {
            unit,
            destination,
            cost: 0,
            spend_energy: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    UnitMissing,
    OutOfBounds,
    BlockedByAlly,
    EntryDenied,
    InsufficientEnergy { cost: u32, remaining: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        from: Position,
        to: Position,
    },
    AttackedKill {
        from: Position,
        to: Position,
        victim: UnitId,
        damage: u32,
    },
    /// The defender survived; the attacker may have glided next to it.
    AttackedNoKill {
        from: Position,
        defender: UnitId,
        damage: u32,
        glided_to: Option<Position>,
    },
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Executes one move attempt.
///
/// `pool` may be `None` only for requests with `spend_energy == false`;
/// asking to spend without a pool is a fatal [`ExecuteError::MissingEnergyPool`].
pub fn execute_move(
    board: &mut Board,
    pool: Option<&mut dyn EnergyPool>,
    events: &mut dyn EventSink,
    request: MoveRequest,
) -> Result<MoveOutcome, ExecuteError> {
    let MoveRequest {
        unit: id,
        destination,
        cost,
        spend_energy,
    } = request;

    events.emit(GameEvent::MoveStarted {
        unit: id,
        destination,
    });
    let Some(unit) = board.unit(id) else {
        return Ok(MoveOutcome::Rejected(RejectReason::UnitMissing));
    };
    let from = unit.position();
    let team = unit.team();

    let occupant = board.unit_at(destination).map(|o| (o.id(), o.team()));
    let defender = match occupant {
        Some((other, other_team)) if other_team != team => Some(other),
        _ => None,
    };
    if defender.is_some() {
        events.emit(GameEvent::AttackStarted {
            attacker: id,
            cell: destination,
        });
    }

    if spend_energy && pool.is_none() {
        return Err(ExecuteError::MissingEnergyPool { unit: id });
    }
    let ally_blocked = occupant.is_some() && defender.is_none();
    if let Some(reason) = check_legality(board, id, destination, ally_blocked) {
        return Ok(MoveOutcome::Rejected(reason));
    }

    if spend_energy && let Some(pool) = pool {
        if !pool.try_spend(cost) {
            events.emit(GameEvent::MoveFailedInsufficientEnergy {
                unit: id,
                destination,
                cost,
            });
            return Ok(MoveOutcome::Rejected(RejectReason::InsufficientEnergy {
                cost,
                remaining: pool.remaining(),
            }));
        }
    }

    let Some(defender) = defender else {
        move_with_triggers(board, id, destination, cost, events)?;
        return Ok(MoveOutcome::Moved {
            from,
            to: destination,
        });
    };

    let combat = resolve_attack(board, id, defender, events)
        .ok_or(ExecuteError::UnitVanished { unit: defender })?;

    if combat.target_died {
        board.remove_unit(defender);
        events.emit(GameEvent::PieceCaptured {
            attacker: id,
            victim: defender,
            cell: destination,
        });
        move_with_triggers(board, id, destination, cost, events)?;
        events.emit(GameEvent::AttackResolved {
            attacker: id,
            cell: destination,
            died: true,
        });
        return Ok(MoveOutcome::AttackedKill {
            from,
            to: destination,
            victim: defender,
            damage: combat.damage,
        });
    }

    let glided_to = approach_cell(board, from, destination)
        .filter(|cell| *cell != from && board.occupant(*cell).is_none());
    if let Some(cell) = glided_to {
        move_with_triggers(board, id, cell, cost, events)?;
    }
    events.emit(GameEvent::AttackResolved {
        attacker: id,
        cell: destination,
        died: false,
    });
    Ok(MoveOutcome::AttackedNoKill {
        from,
        defender,
        damage: combat.damage,
        glided_to,
    })
}

fn check_legality(
    board: &Board,
    id: UnitId,
    destination: Position,
    blocked_by_ally: bool,
) -> Option<RejectReason> {
    if !board.contains(destination) {
        return Some(RejectReason::OutOfBounds);
    }
    if blocked_by_ally {
        return Some(RejectReason::BlockedByAlly);
    }
    let unit = board.unit(id)?;
    let denied = board
        .tile_rules(destination)
        .iter()
        .any(|tile| !tile.allow_enter(unit, board, destination));
    denied.then_some(RejectReason::EntryDenied)
}

/// Relocates a unit, firing leave/enter triggers, then applies tile effects.
///
/// Trigger hooks run in leave-then-enter order before the relocation; their
/// effects are applied after `piece-moved` so every event follows its mutation.
fn move_with_triggers(
    board: &mut Board,
    id: UnitId,
    to: Position,
    cost: u32,
    events: &mut dyn EventSink,
) -> Result<(), ExecuteError> {
    let unit = board
        .unit(id)
        .ok_or(ExecuteError::UnitVanished { unit: id })?;
    let from = unit.position();

    let mut effects = Vec::new();
    for tile in board.tile_rules(from) {
        effects.extend(tile.on_leave(unit, from));
    }
    for modifier in unit.all_modifiers() {
        modifier.on_leave_tile(unit, from);
    }
    for tile in board.tile_rules(to) {
        effects.extend(tile.on_enter(unit, to));
    }

    board.relocate(id, to)?;
    if let Some(unit) = board.unit(id) {
        for modifier in unit.all_modifiers() {
            modifier.on_enter_tile(unit, to);
        }
    }
    events.emit(GameEvent::PieceMoved {
        unit: id,
        from,
        to,
        cost,
    });

    apply_tile_effects(board, id, &effects, events);
    Ok(())
}

fn apply_tile_effects(
    board: &mut Board,
    id: UnitId,
    effects: &[TileEffect],
    events: &mut dyn EventSink,
) {
    for effect in effects {
        let Some(unit) = board.unit_mut(id) else {
            return;
        };
        let change = match *effect {
            TileEffect::Damage(amount) => unit.receive_damage(amount),
            TileEffect::Heal(amount) => unit.heal(amount),
        };
        events.emit(change.into_event());

        if change.is_lethal() {
            board.remove_unit(id);
            events.emit(GameEvent::UnitKilled {
                killer: None,
                victim: id,
            });
            return;
        }
    }
}
