//! Plain-text board output for headless runs.

use game_content::Rgba;
use game_core::{Board, Position, Team};
use runtime::PathRenderer;

/// One line per row, top row first.
///
/// White units print as upper-case glyphs, Black as lower-case. Empty cells
/// show their first tile rule: `#` wall, `~` lava, `%` mire.
pub fn render_board(board: &Board) -> String {
    let dims = board.dimensions();
    let mut out = String::new();
    for y in (0..dims.height as i32).rev() {
        for x in 0..dims.width as i32 {
            let cell = Position::new(x, y);
            let glyph = match board.unit_at(cell) {
                Some(unit) => match unit.team() {
                    Team::White => unit.archetype().glyph().to_ascii_uppercase(),
                    Team::Black => unit.archetype().glyph().to_ascii_lowercase(),
                },
                None => tile_glyph(board, cell),
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn tile_glyph(board: &Board, cell: Position) -> char {
    match board.tile_rules(cell).first().map(|rule| rule.name()) {
        Some("wall") => '#',
        Some("lava") => '~',
        Some("mire") => '%',
        Some(_) => '?',
        None => '.',
    }
}

/// Telegraph renderer that logs highlighted cells.
#[derive(Debug, Default)]
pub struct LogRenderer;

impl PathRenderer for LogRenderer {
    fn highlight(&mut self, cells: &[(Position, Rgba)]) {
        let path: Vec<String> = cells.iter().map(|(cell, _)| cell.to_string()).collect();
        tracing::debug!(target: "telegraph", "highlight {}", path.join(" -> "));
    }

    fn clear(&mut self, cells: &[Position]) {
        tracing::trace!(target: "telegraph", cleared = cells.len(), "clear");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::{Scenario, TilePlacement, TileSpec, UnitPlacement};

    #[test]
    fn renders_units_and_tiles() {
        let scenario = Scenario {
            width: 3,
            height: 2,
            tiles: vec![TilePlacement {
                x: 2,
                y: 0,
                tile: TileSpec::Wall,
            }],
            units: vec![
                UnitPlacement::new("rook", Team::White, 0, 0),
                UnitPlacement::new("knight", Team::Black, 1, 1),
            ],
        };
        let board = scenario
            .instantiate(&game_content::ArchetypeCatalog::builtin())
            .expect("scenario builds");

        assert_eq!(render_board(&board), ".n.\nR.#\n");
    }
}
