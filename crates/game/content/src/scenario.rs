//! Scenario definitions: board size, tile layout and starting units.

use std::sync::Arc;

use game_core::{Board, MapDimensions, NullSink, Position, StaticMap, Team};
use serde::{Deserialize, Serialize};

use crate::catalog::{ArchetypeCatalog, ContentError};
use crate::specs::{ModifierSpec, TileSpec};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub x: i32,
    pub y: i32,
    pub tile: TileSpec,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPlacement {
    pub archetype: String,
    pub team: Team,
    pub x: i32,
    pub y: i32,
    /// Runtime modifiers attached after placement.
    #[serde(default)]
    pub extra_modifiers: Vec<ModifierSpec>,
}

impl UnitPlacement {
    pub fn new(archetype: &str, team: Team, x: i32, y: i32) -> Self {
        Self {
            archetype: archetype.to_string(),
            team,
            x,
            y,
            extra_modifiers: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub tiles: Vec<TilePlacement>,
    #[serde(default)]
    pub units: Vec<UnitPlacement>,
}

impl Scenario {
    pub fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }

    /// Builds a fresh board with every tile and unit in place.
    ///
    /// Tiles outside the board are dropped; units outside the board or on an
    /// occupied cell fail the whole scenario.
    pub fn instantiate(&self, catalog: &ArchetypeCatalog) -> Result<Board, ContentError> {
        let mut map = StaticMap::new(self.dimensions());
        for placement in &self.tiles {
            map.add_tile(Position::new(placement.x, placement.y), placement.tile.build());
        }

        let mut board = Board::new(Arc::new(map));
        for placement in &self.units {
            let archetype = catalog.get(&placement.archetype, placement.team)?;
            let id = board
                .place_unit(archetype, placement.team, placement.position())
                .map_err(|source| ContentError::Placement {
                    archetype: placement.archetype.clone(),
                    source,
                })?;
            for modifier in &placement.extra_modifiers {
                board
                    .attach_modifier(id, modifier.build(), &mut NullSink)
                    .map_err(|source| ContentError::Placement {
                        archetype: placement.archetype.clone(),
                        source,
                    })?;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duel() -> Scenario {
        Scenario {
            width: 5,
            height: 5,
            tiles: vec![TilePlacement {
                x: 2,
                y: 2,
                tile: TileSpec::Wall,
            }],
            units: vec![
                UnitPlacement::new("rook", Team::White, 0, 0),
                UnitPlacement {
                    extra_modifiers: vec![ModifierSpec::StatBonus {
                        attack: 2,
                        max_health: 0,
                    }],
                    ..UnitPlacement::new("knight", Team::Black, 4, 4)
                },
            ],
        }
    }

    #[test]
    fn instantiate_places_units_and_tiles() {
        let catalog = ArchetypeCatalog::builtin();
        let board = duel().instantiate(&catalog).expect("scenario builds");

        assert_eq!(board.units().count(), 2);
        assert_eq!(board.tile_rules(Position::new(2, 2)).len(), 1);
        let knight = board.unit_at(Position::new(4, 4)).expect("knight placed");
        assert_eq!(knight.attack(), 4);
        assert_eq!(knight.team(), Team::Black);
    }

    #[test]
    fn overlapping_units_fail() {
        let catalog = ArchetypeCatalog::builtin();
        let mut scenario = duel();
        scenario
            .units
            .push(UnitPlacement::new("pawn", Team::White, 0, 0));

        let Err(err) = scenario.instantiate(&catalog) else {
            panic!("overlapping placement should fail");
        };
        assert!(matches!(err, ContentError::Placement { archetype, .. } if archetype == "pawn"));
    }

    #[test]
    fn unknown_archetype_fails() {
        let catalog = ArchetypeCatalog::builtin();
        let mut scenario = duel();
        scenario
            .units
            .push(UnitPlacement::new("dragon", Team::White, 1, 1));

        assert!(matches!(
            scenario.instantiate(&catalog),
            Err(ContentError::UnknownArchetype(_))
        ));
    }
}
