//! Registry of shared archetypes.

use std::collections::HashMap;
use std::sync::Arc;

use game_core::{Archetype, BoardError, Team};
use strum::IntoEnumIterator;

use crate::specs::{ArchetypeSpec, ModifierSpec, RuleSpec};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("unknown archetype `{0}`")]
    UnknownArchetype(String),

    #[error("failed to place `{archetype}`")]
    Placement {
        archetype: String,
        #[source]
        source: BoardError,
    },
}

/// Owns one [`Archetype`] per (name, team) and hands out shared references.
///
/// Archetypes are built per team because pawn-like rules face the opponent.
#[derive(Default)]
pub struct ArchetypeCatalog {
    specs: HashMap<String, ArchetypeSpec>,
    built: HashMap<(String, Team), Arc<Archetype>>,
}

impl ArchetypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six chess-like pieces.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        let pieces = [
            ArchetypeSpec::new("pawn", 2, 1, vec![RuleSpec::Pawn {
                capture_diagonals: true,
            }]),
            ArchetypeSpec {
                glyph: Some('N'),
                ..ArchetypeSpec::new("knight", 3, 2, vec![RuleSpec::Knight])
            },
            ArchetypeSpec::new("bishop", 3, 2, vec![RuleSpec::Bishop]),
            ArchetypeSpec::new("rook", 4, 2, vec![RuleSpec::Rook]),
            ArchetypeSpec::new("queen", 5, 3, vec![RuleSpec::Queen]),
            ArchetypeSpec::new("king", 6, 1, vec![RuleSpec::King]),
        ];
        for spec in pieces {
            catalog.insert(spec);
        }

        let mut berserker = ArchetypeSpec::new("berserker", 4, 2, vec![RuleSpec::King]);
        berserker.glyph = Some('B');
        berserker.modifiers = vec![
            ModifierSpec::StepPlusOne,
            ModifierSpec::StatBonus {
                attack: 1,
                max_health: -1,
            },
        ];
        catalog.insert(berserker);
        catalog
    }

    /// Registers (or replaces) an archetype for both teams.
    pub fn insert(&mut self, spec: ArchetypeSpec) {
        for team in Team::iter() {
            self.built
                .insert((spec.name.clone(), team), Arc::new(spec.build(team)));
        }
        self.specs.insert(spec.name.clone(), spec);
    }

    pub fn get(&self, name: &str, team: Team) -> Result<Arc<Archetype>, ContentError> {
        self.built
            .get(&(name.to_string(), team))
            .cloned()
            .ok_or_else(|| ContentError::UnknownArchetype(name.to_string()))
    }

    pub fn spec(&self, name: &str) -> Option<&ArchetypeSpec> {
        self.specs.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }
}
