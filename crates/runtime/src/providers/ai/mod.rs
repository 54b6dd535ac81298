//! Priority-tier AI for whole turns.
//!
//! Each step of a turn runs the same funnel:
//!
//! 1. **Selection**: walk the profile's [`PriorityTier`]s in order and collect
//!    every legal move of the side that fits the tier; the first tier with any
//!    candidate wins and lower tiers are never looked at.
//! 2. **Scoring**: score each candidate directly, then add a discounted
//!    one-ply lookahead computed on a simulated board.
//! 3. **Gate**: stop when the best score is below the profile's minimum.
//! 4. **Telegraph, execute, pause**, then repeat while energy and the action
//!    cap allow.
//!
//! # Core Components
//!
//! - [`AgentController`]: the [`crate::TurnController`] running the loop
//! - [`context`]: board queries shared by selection and scoring
//! - [`Scorer`]: direct and lookahead scoring
//! - [`collect_candidates`] / [`pick_best`]: tier selection
//!
//! [`PriorityTier`]: game_content::PriorityTier

pub mod agent;
pub mod context;
pub mod scoring;
pub mod tiers;

pub use agent::{AbortHandle, AgentController, EndReason, TurnSummary};
pub use scoring::Scorer;
pub use tiers::{Candidate, Choice, collect_candidates, pick_best};
