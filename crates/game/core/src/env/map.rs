use std::collections::HashMap;
use std::sync::Arc;

use crate::state::Position;
use crate::tiles::TileRule;

/// Static map oracle exposing board size and the tile rules of every cell.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;

    /// Tile rules attached to a cell, in evaluation order. Empty for plain cells
    /// and for coordinates outside the board.
    fn tile_rules(&self, position: Position) -> &[Arc<dyn TileRule>];

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// In-memory map built from a scenario: fixed dimensions plus sparse tile rules.
#[derive(Default)]
pub struct StaticMap {
    dimensions: MapDimensions,
    tiles: HashMap<Position, Vec<Arc<dyn TileRule>>>,
}

impl Default for MapDimensions {
    fn default() -> Self {
        Self::new(8, 8)
    }
}

impl StaticMap {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            tiles: HashMap::new(),
        }
    }

    /// Appends a rule to a cell. Rules outside the board are ignored.
    pub fn with_tile(mut self, position: Position, rule: Arc<dyn TileRule>) -> Self {
        self.add_tile(position, rule);
        self
    }

    pub fn add_tile(&mut self, position: Position, rule: Arc<dyn TileRule>) {
        if self.dimensions.contains(position) {
            self.tiles.entry(position).or_default().push(rule);
        }
    }
}

impl MapOracle for StaticMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile_rules(&self, position: Position) -> &[Arc<dyn TileRule>] {
        self.tiles.get(&position).map(Vec::as_slice).unwrap_or(&[])
    }
}
