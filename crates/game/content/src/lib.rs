//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Archetype catalogue (built-in chess-like pieces, extendable from specs)
//! - Rule, modifier and tile specs that build game-core trait objects
//! - Agent profiles (tier order, heuristic weights, pacing)
//! - Scenarios (board size, tile layout, unit placements)
//! - Game configuration (TOML)
//!
//! Content is consumed by the runtime and the client; game-core never sees
//! these files, only the objects built from them.

pub mod catalog;
pub mod profile;
pub mod scenario;
pub mod specs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ArchetypeCatalog, ContentError};
pub use profile::{
    AgentProfile, HeuristicWeights, LookaheadSettings, PriorityTier, ProfileError,
    RetreatThresholds, Rgba, TelegraphColors,
};
pub use scenario::{Scenario, TilePlacement, UnitPlacement};
pub use specs::{ArchetypeSpec, ModifierSpec, RuleSpec, TileSpec};

#[cfg(feature = "loaders")]
pub use loaders::{
    ArchetypeLoader, ConfigLoader, ContentFactory, LoadResult, ProfileLoader, ScenarioLoader,
};
