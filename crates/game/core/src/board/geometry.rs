use crate::state::Position;

use super::Board;

/// Unit step along the straight or diagonal line from `from` to `to`, or
/// `None` when the two cells are not aligned.
fn line_step(from: Position, to: Position) -> Option<(i32, i32)> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if (dx, dy) == (0, 0) {
        return None;
    }
    if dx == 0 || dy == 0 || dx.abs() == dy.abs() {
        Some((dx.signum(), dy.signum()))
    } else {
        None
    }
}

/// Cells strictly between `from` and `to` on a straight or diagonal line.
///
/// Empty for adjacent or unaligned cells (e.g. knight jumps).
pub fn line_between(from: Position, to: Position) -> Vec<Position> {
    let Some((sx, sy)) = line_step(from, to) else {
        return Vec::new();
    };
    let mut cells = Vec::new();
    let mut cursor = from.offset(sx, sy);
    while cursor != to {
        cells.push(cursor);
        cursor = cursor.offset(sx, sy);
    }
    cells
}

/// Last free cell on the line from `from` toward `target`, adjacent to `target`.
///
/// Returns `from` itself when the two cells are adjacent, and `None` when they
/// are not aligned or any intermediate cell is off the board or occupied.
pub fn approach_cell(board: &Board, from: Position, target: Position) -> Option<Position> {
    line_step(from, target)?;
    let mut last = from;
    for cell in line_between(from, target) {
        if !board.contains(cell) || board.occupant(cell).is_some() {
            return None;
        }
        last = cell;
    }
    Some(last)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::env::{MapDimensions, StaticMap};
    use crate::state::{Archetype, Team};

    #[test]
    fn line_between_handles_orthogonal_diagonal_and_jumps() {
        assert_eq!(
            line_between(Position::new(0, 0), Position::new(0, 3)),
            vec![Position::new(0, 1), Position::new(0, 2)]
        );
        assert_eq!(
            line_between(Position::new(3, 3), Position::new(1, 1)),
            vec![Position::new(2, 2)]
        );
        assert!(line_between(Position::new(0, 0), Position::new(1, 2)).is_empty());
        assert!(line_between(Position::new(0, 0), Position::new(1, 1)).is_empty());
    }

    #[test]
    fn approach_cell_stops_next_to_target() {
        let mut board = Board::new(Arc::new(StaticMap::new(MapDimensions::new(8, 8))));
        let piece = Arc::new(Archetype::new("piece"));
        board
            .place_unit(piece.clone(), Team::Black, Position::new(0, 5))
            .expect("placement");

        assert_eq!(
            approach_cell(&board, Position::new(0, 0), Position::new(0, 5)),
            Some(Position::new(0, 4))
        );
        assert_eq!(
            approach_cell(&board, Position::new(0, 4), Position::new(0, 5)),
            Some(Position::new(0, 4))
        );
        assert_eq!(
            approach_cell(&board, Position::new(1, 3), Position::new(0, 5)),
            None
        );

        board
            .place_unit(piece, Team::White, Position::new(0, 2))
            .expect("placement");
        assert_eq!(
            approach_cell(&board, Position::new(0, 0), Position::new(0, 5)),
            None
        );
    }
}
