//! Runtime orchestration for agent-driven skirmishes.
//!
//! This crate wires the synchronous rules in `game-core` to time: a topic-based
//! event bus, a turn manager that owns the energy budget, the agent decision
//! funnel that plays whole turns with paced, cancellable actions, and a
//! skirmish orchestrator that alternates controllers until one side is gone.
//!
//! Modules are organized by responsibility:
//! - [`events`] provides the topic-based event bus
//! - [`turn`] hosts the [`TurnManager`] energy pool
//! - [`providers`] holds turn controllers, including the AI agent
//! - [`telegraph`] exposes the path-highlighting seam used before each action
//! - [`skirmish`] runs a full match
pub mod error;
pub mod events;
pub mod providers;
pub mod skirmish;
pub mod telegraph;
pub mod turn;

pub use error::{Result, RuntimeError};
pub use events::{BusSink, Event, EventBus, Topic, TurnEvent};
pub use providers::ai::{AbortHandle, AgentController, EndReason, TurnSummary};
pub use providers::{PassController, TurnController};
pub use skirmish::{Skirmish, SkirmishResult};
pub use telegraph::{NoopRenderer, PathRenderer, TelegraphPlan};
pub use turn::TurnManager;
