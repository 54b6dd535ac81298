//! Move telegraphing: the cells an agent highlights before it acts.

use game_content::{Rgba, TelegraphColors};
use game_core::{Position, line_between};

/// Presentation seam for announcing a move. Consumes, never feeds back.
pub trait PathRenderer: Send {
    fn highlight(&mut self, cells: &[(Position, Rgba)]);

    fn clear(&mut self, cells: &[Position]);
}

/// Renderer for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl PathRenderer for NoopRenderer {
    fn highlight(&mut self, _cells: &[(Position, Rgba)]) {}

    fn clear(&mut self, _cells: &[Position]) {}
}

/// Origin, the straight or diagonal cells in between, and the destination.
///
/// Knight-style jumps have no intermediate path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TelegraphPlan {
    pub origin: Position,
    pub path: Vec<Position>,
    pub destination: Position,
}

impl TelegraphPlan {
    pub fn new(origin: Position, destination: Position) -> Self {
        Self {
            origin,
            path: line_between(origin, destination),
            destination,
        }
    }

    pub fn colored(&self, colors: &TelegraphColors) -> Vec<(Position, Rgba)> {
        std::iter::once((self.origin, colors.origin))
            .chain(self.path.iter().map(|&cell| (cell, colors.path)))
            .chain(std::iter::once((self.destination, colors.destination)))
            .collect()
    }

    pub fn cells(&self) -> Vec<Position> {
        std::iter::once(self.origin)
            .chain(self.path.iter().copied())
            .chain(std::iter::once(self.destination))
            .collect()
    }
}
