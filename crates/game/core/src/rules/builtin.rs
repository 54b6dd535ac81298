use crate::board::Board;
use crate::config::GameConfig;
use crate::state::{Position, Unit};

use super::MoveRule;

const ORTHOGONAL: &[(i32, i32)] = &[(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: &[(i32, i32)] = &[(1, 1), (1, -1), (-1, 1), (-1, -1)];
const OMNI: &[(i32, i32)] = &[
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
const KNIGHT: &[(i32, i32)] = &[
    (1, 2),
    (2, 1),
    (-1, 2),
    (2, -1),
    (-2, 1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

/// Rays that slide until the board edge or the first occupant.
///
/// The first occupant is included only when it belongs to the other team.
#[derive(Clone, Debug)]
pub struct SlidingRays {
    name: &'static str,
    directions: &'static [(i32, i32)],
}

impl SlidingRays {
    pub const fn rook() -> Self {
        Self {
            name: "rook-rays",
            directions: ORTHOGONAL,
        }
    }

    pub const fn bishop() -> Self {
        Self {
            name: "bishop-rays",
            directions: DIAGONAL,
        }
    }

    pub const fn queen() -> Self {
        Self {
            name: "queen-rays",
            directions: OMNI,
        }
    }
}

impl MoveRule for SlidingRays {
    fn name(&self) -> &str {
        self.name
    }

    fn destinations(&self, unit: &Unit, board: &Board) -> Vec<Position> {
        let origin = unit.position();
        let mut cells = Vec::new();
        for &(dx, dy) in self.directions {
            let mut cursor = origin.offset(dx, dy);
            while board.contains(cursor) {
                if let Some(occupant) = board.unit_at(cursor) {
                    if occupant.team() != unit.team() {
                        cells.push(cursor);
                    }
                    break;
                }
                cells.push(cursor);
                cursor = cursor.offset(dx, dy);
            }
        }
        cells
    }
}

/// Knight-like jumps over any blocker, always charged [`GameConfig::JUMP_COST`].
#[derive(Clone, Debug, Default)]
pub struct FixedJumps;

impl MoveRule for FixedJumps {
    fn name(&self) -> &str {
        "knight-jumps"
    }

    fn destinations(&self, unit: &Unit, board: &Board) -> Vec<Position> {
        let origin = unit.position();
        KNIGHT
            .iter()
            .map(|&(dx, dy)| origin.offset(dx, dy))
            .filter(|cell| board.contains(*cell))
            .collect()
    }

    fn fixed_cost(&self) -> Option<u32> {
        Some(GameConfig::JUMP_COST)
    }
}

/// One step in any of the eight directions.
#[derive(Clone, Debug, Default)]
pub struct SingleStep;

impl MoveRule for SingleStep {
    fn name(&self) -> &str {
        "king-steps"
    }

    fn destinations(&self, unit: &Unit, board: &Board) -> Vec<Position> {
        let origin = unit.position();
        OMNI.iter()
            .map(|&(dx, dy)| origin.offset(dx, dy))
            .filter(|cell| board.contains(*cell))
            .filter(|cell| board.unit_at(*cell).is_none_or(|o| o.team() != unit.team()))
            .collect()
    }
}

/// Pawn-like movement: a single forward step into an empty cell, plus
/// forward-diagonal captures when enabled.
#[derive(Clone, Debug)]
pub struct PawnAdvance {
    forward: i32,
    capture_diagonals: bool,
}

impl PawnAdvance {
    /// `forward` is the y direction of travel; only its sign is used.
    pub fn new(forward: i32, capture_diagonals: bool) -> Self {
        Self {
            forward: if forward < 0 { -1 } else { 1 },
            capture_diagonals,
        }
    }

    pub fn forward(&self) -> i32 {
        self.forward
    }
}

impl MoveRule for PawnAdvance {
    fn name(&self) -> &str {
        "pawn-advance"
    }

    fn destinations(&self, unit: &Unit, board: &Board) -> Vec<Position> {
        let origin = unit.position();
        let mut cells = Vec::new();

        let ahead = origin.offset(0, self.forward);
        if board.contains(ahead) && board.unit_at(ahead).is_none() {
            cells.push(ahead);
        }

        if self.capture_diagonals {
            for dx in [-1, 1] {
                let diagonal = origin.offset(dx, self.forward);
                if board
                    .unit_at(diagonal)
                    .is_some_and(|o| o.team() != unit.team())
                {
                    cells.push(diagonal);
                }
            }
        }
        cells
    }
}
