//! Movement rules: per-archetype generators of raw destinations.
//!
//! A rule only looks at geometry and occupancy. Bounds, ally blocking, tile
//! gates and costs are applied afterwards by [`crate::moves::legal_moves`], so
//! rules are free to over-generate.
mod builtin;

pub use builtin::{FixedJumps, PawnAdvance, SingleStep, SlidingRays};

use crate::board::Board;
use crate::state::{Position, Unit};

/// Produces raw destination cells for a unit given the current board.
pub trait MoveRule: Send + Sync {
    fn name(&self) -> &str;

    fn destinations(&self, unit: &Unit, board: &Board) -> Vec<Position>;

    /// Flat cost that replaces the geometric distance for every move of a unit
    /// carrying this rule. Modifier cost hooks still apply on top.
    fn fixed_cost(&self) -> Option<u32> {
        None
    }
}
