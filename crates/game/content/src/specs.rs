//! Serializable descriptions of rules, modifiers, tiles and archetypes.
//!
//! Specs are plain data; `build` turns them into the shared trait objects
//! game-core works with.

use std::sync::Arc;

use game_core::{
    Archetype, FixedJumps, Haste, Lava, Mire, Modifier, MoveRule, PawnAdvance, SingleStep,
    SlidingRays, StatBonus, StepPlusOne, Team, TileRule, Wall,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSpec {
    Rook,
    Bishop,
    Queen,
    Knight,
    King,
    /// Moves toward the opponent's side: +y for White, -y for Black.
    Pawn { capture_diagonals: bool },
}

impl RuleSpec {
    pub fn build(&self, team: Team) -> Arc<dyn MoveRule> {
        match self {
            RuleSpec::Rook => Arc::new(SlidingRays::rook()),
            RuleSpec::Bishop => Arc::new(SlidingRays::bishop()),
            RuleSpec::Queen => Arc::new(SlidingRays::queen()),
            RuleSpec::Knight => Arc::new(FixedJumps),
            RuleSpec::King => Arc::new(SingleStep),
            RuleSpec::Pawn { capture_diagonals } => {
                let forward = match team {
                    Team::White => 1,
                    Team::Black => -1,
                };
                Arc::new(PawnAdvance::new(forward, *capture_diagonals))
            }
        }
    }

    /// Whether the built rule depends on the owning team.
    pub fn is_directional(&self) -> bool {
        matches!(self, RuleSpec::Pawn { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierSpec {
    StepPlusOne,
    StatBonus { attack: i32, max_health: i32 },
    Haste { discount: i32 },
}

impl ModifierSpec {
    pub fn build(&self) -> Arc<dyn Modifier> {
        match self {
            ModifierSpec::StepPlusOne => Arc::new(StepPlusOne),
            ModifierSpec::StatBonus { attack, max_health } => {
                Arc::new(StatBonus::new(*attack, *max_health))
            }
            ModifierSpec::Haste { discount } => Arc::new(Haste::new(*discount)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileSpec {
    Lava { damage: u32 },
    Wall,
    Mire,
}

impl TileSpec {
    pub fn build(&self) -> Arc<dyn TileRule> {
        match self {
            TileSpec::Lava { damage } => Arc::new(Lava::new(*damage)),
            TileSpec::Wall => Arc::new(Wall),
            TileSpec::Mire => Arc::new(Mire),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeSpec {
    pub name: String,
    #[serde(default)]
    pub glyph: Option<char>,
    pub max_health: i32,
    pub attack: i32,
    pub rules: Vec<RuleSpec>,
    #[serde(default)]
    pub modifiers: Vec<ModifierSpec>,
}

impl ArchetypeSpec {
    pub fn new(name: &str, max_health: i32, attack: i32, rules: Vec<RuleSpec>) -> Self {
        Self {
            name: name.to_string(),
            glyph: None,
            max_health,
            attack,
            rules,
            modifiers: Vec::new(),
        }
    }

    pub fn build(&self, team: Team) -> Archetype {
        let mut archetype = Archetype::new(&self.name).with_stats(self.max_health, self.attack);
        if let Some(glyph) = self.glyph {
            archetype = archetype.with_glyph(glyph);
        }
        let archetype = self
            .rules
            .iter()
            .fold(archetype, |a, rule| a.with_rule(rule.build(team)));
        self.modifiers
            .iter()
            .fold(archetype, |a, modifier| a.with_modifier(modifier.build()))
    }
}
