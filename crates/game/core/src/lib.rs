//! Deterministic grid-combat rules shared by the runtime and tools.
//!
//! `game-core` defines the canonical rules (movement rules, modifiers, tile
//! effects, combat) and exposes pure APIs that the runtime's agents and any
//! human-facing frontend reuse. All board mutation flows through
//! [`engine::execute_move`]; speculative evaluation flows through
//! [`board::Simulation`], which never fires hooks or events.
//!
//! Modules are organized leaves first:
//! - [`state`] and [`env`] hold coordinates, teams, units and the geometry provider
//! - [`rules`], [`modifiers`] and [`tiles`] are the extension points
//! - [`moves`] composes them into legal move options
//! - [`board`] owns occupancy and the simulation guard
//! - [`combat`] and [`engine`] resolve attacks and apply real moves
//! - [`turn`] and [`events`] are the interfaces consumed and exposed by the core
pub mod board;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod modifiers;
pub mod moves;
pub mod rules;
pub mod state;
pub mod tiles;
pub mod turn;

pub use board::{
    Board, BoardError, OccupancyGrid, SimSnapshot, Simulation, approach_cell, line_between,
};
pub use combat::{CombatOutcome, calculate_damage, resolve_attack, would_kill};
pub use config::GameConfig;
pub use engine::{ExecuteError, MoveOutcome, MoveRequest, RejectReason, execute_move};
pub use env::{MapDimensions, MapOracle, StaticMap};
pub use error::{ErrorSeverity, GameError};
pub use events::{EventSink, GameEvent, NullSink};
pub use modifiers::{Haste, Modifier, StatBonus, StepPlusOne};
pub use moves::{MoveOption, legal_moves, legal_moves_for};
pub use rules::{FixedJumps, MoveRule, PawnAdvance, SingleStep, SlidingRays};
pub use state::{Archetype, HealthChange, Position, Team, Unit, UnitId};
pub use tiles::{Lava, Mire, TileEffect, TileRule, Wall};
pub use turn::{EnergyPool, TurnState};
