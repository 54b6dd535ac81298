//! Combat result types and attack resolution.

use crate::board::Board;
use crate::events::{EventSink, GameEvent};
use crate::state::UnitId;

use super::damage::calculate_damage;

/// Result of a combat resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatOutcome {
    /// Damage dealt to the defender.
    pub damage: u32,

    /// Whether the defender's health reached zero.
    pub target_died: bool,
}

/// Applies one hit from `attacker` to `defender`.
///
/// Emits `health-changed` and `attack-hit`, plus `unit-killed` when the
/// defender dies; the defender's modifiers observe the damage and the
/// attacker's modifiers observe the kill. The dead defender stays on the board;
/// removing it is the caller's job.
///
/// Returns `None` when either unit is missing.
pub fn resolve_attack(
    board: &mut Board,
    attacker: UnitId,
    defender: UnitId,
    events: &mut dyn EventSink,
) -> Option<CombatOutcome> {
    let damage = calculate_damage(board.unit(attacker)?);

    let change = board.unit_mut(defender)?.receive_damage(damage);
    events.emit(change.into_event());
    events.emit(GameEvent::AttackHit {
        attacker,
        defender,
        damage,
    });

    let target_died = change.is_lethal();
    if target_died {
        events.emit(GameEvent::UnitKilled {
            killer: Some(attacker),
            victim: defender,
        });
        if let (Some(killer), Some(victim)) = (board.unit(attacker), board.unit(defender)) {
            for modifier in killer.all_modifiers() {
                modifier.on_kill(killer, victim);
            }
        }
    }

    Some(CombatOutcome {
        damage,
        target_died,
    })
}
