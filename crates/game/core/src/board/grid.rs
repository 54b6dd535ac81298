use crate::env::MapDimensions;
use crate::state::{Position, UnitId};

/// Fixed-size row-major array of optional unit references.
///
/// The grid never owns units; it only records which [`UnitId`] stands where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    dimensions: MapDimensions,
    cells: Vec<Option<UnitId>>,
}

impl OccupancyGrid {
    pub fn new(dimensions: MapDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![None; dimensions.cell_count()],
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    pub fn get(&self, position: Position) -> Option<UnitId> {
        self.index(position).and_then(|i| self.cells[i])
    }

    /// Writes an occupant; returns false when the cell is out of bounds.
    pub(crate) fn set(&mut self, position: Position, unit: UnitId) -> bool {
        match self.index(position) {
            Some(i) => {
                self.cells[i] = Some(unit);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self, position: Position) -> Option<UnitId> {
        self.index(position).and_then(|i| self.cells[i].take())
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, UnitId)> + '_ {
        let width = self.dimensions.width.max(1) as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|id| (Position::new((i % width) as i32, (i / width) as i32), id))
        })
    }
}
