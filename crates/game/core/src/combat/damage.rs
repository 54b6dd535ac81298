//! Damage calculation shared by real combat and simulation.

use crate::state::Unit;

/// Damage an attacker deals with one hit.
///
/// # Formula
///
/// ```text
/// damage = max(0, attack)
/// ```
///
/// Attack is already floored at zero when stats are derived, so this is the
/// attacker's current attack value.
pub fn calculate_damage(attacker: &Unit) -> u32 {
    attacker.attack()
}

/// Whether one hit from `attacker` would bring `defender` to zero health.
///
/// Pure: uses the same formula as [`super::resolve_attack`] without touching
/// the defender.
pub fn would_kill(attacker: &Unit, defender: &Unit) -> bool {
    defender.health().saturating_sub(calculate_damage(attacker)) == 0
}
