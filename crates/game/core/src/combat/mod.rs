//! Combat resolution: damage, death and outcome records.
//!
//! Combat never changes positions. Relocating the attacker after a kill, or
//! gliding it to the approach cell after a non-lethal hit, belongs to
//! [`crate::engine::execute_move`].
mod damage;
mod result;

pub use damage::{calculate_damage, would_kill};
pub use result::{CombatOutcome, resolve_attack};
