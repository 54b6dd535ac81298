//! Plain data types: coordinates, teams, archetypes and units.
mod common;
mod unit;

pub use common::{Position, Team, UnitId};
pub use unit::{Archetype, HealthChange, Unit};
