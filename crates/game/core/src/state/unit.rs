use std::fmt;
use std::sync::Arc;

use crate::events::GameEvent;
use crate::modifiers::Modifier;
use crate::rules::MoveRule;

use super::{Position, Team, UnitId};

/// Immutable template shared by every unit of one kind.
///
/// Archetypes are built once by the content layer and handed out as
/// `Arc<Archetype>`; nothing mutates them per instance.
pub struct Archetype {
    name: String,
    glyph: char,
    base_max_health: i32,
    base_attack: i32,
    rules: Vec<Arc<dyn MoveRule>>,
    base_modifiers: Vec<Arc<dyn Modifier>>,
}

impl Archetype {
    pub const DEFAULT_MAX_HEALTH: i32 = 1;
    pub const DEFAULT_ATTACK: i32 = 1;

    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let glyph = name.chars().next().unwrap_or('?');
        Self {
            name,
            glyph,
            base_max_health: Self::DEFAULT_MAX_HEALTH,
            base_attack: Self::DEFAULT_ATTACK,
            rules: Vec::new(),
            base_modifiers: Vec::new(),
        }
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_stats(mut self, max_health: i32, attack: i32) -> Self {
        self.base_max_health = max_health;
        self.base_attack = attack;
        self
    }

    pub fn with_rule(mut self, rule: Arc<dyn MoveRule>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_modifier(mut self, modifier: Arc<dyn Modifier>) -> Self {
        self.base_modifiers.push(modifier);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn base_max_health(&self) -> i32 {
        self.base_max_health
    }

    pub fn base_attack(&self) -> i32 {
        self.base_attack
    }

    pub fn rules(&self) -> &[Arc<dyn MoveRule>] {
        &self.rules
    }

    pub fn base_modifiers(&self) -> &[Arc<dyn Modifier>] {
        &self.base_modifiers
    }
}

impl fmt::Debug for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Archetype")
            .field("name", &self.name)
            .field("base_max_health", &self.base_max_health)
            .field("base_attack", &self.base_attack)
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field(
                "base_modifiers",
                &self.base_modifiers.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Health transition produced by damage, healing or a stat recompute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthChange {
    pub unit: UnitId,
    pub old: u32,
    pub new: u32,
    pub max: u32,
}

impl HealthChange {
    pub fn is_lethal(&self) -> bool {
        self.new == 0
    }

    pub fn into_event(self) -> GameEvent {
        GameEvent::HealthChanged {
            unit: self.unit,
            old: self.old,
            new: self.new,
            max: self.max,
        }
    }
}

/// A unit placed on a board.
///
/// Attack and health bounds are derived: [`Unit::recompute_stats`] folds the
/// archetype's base values through every base and runtime modifier, and is the
/// only writer of those fields besides damage and healing.
pub struct Unit {
    id: UnitId,
    archetype: Arc<Archetype>,
    team: Team,
    position: Position,
    health: u32,
    max_health: u32,
    attack: u32,
    modifiers: Vec<Arc<dyn Modifier>>,
}

impl Unit {
    pub(crate) fn new(
        id: UnitId,
        archetype: Arc<Archetype>,
        team: Team,
        position: Position,
    ) -> Self {
        let mut unit = Self {
            id,
            archetype,
            team,
            position,
            health: 0,
            max_health: 1,
            attack: 0,
            modifiers: Vec::new(),
        };
        unit.recompute_stats(true);
        unit
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn archetype(&self) -> &Arc<Archetype> {
        &self.archetype
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Remaining health as a fraction of the maximum.
    pub fn health_ratio(&self) -> f32 {
        self.health as f32 / self.max_health.max(1) as f32
    }

    /// Heuristic worth of this unit as a capture target.
    pub fn value(&self) -> u32 {
        self.attack * 2 + self.max_health
    }

    pub fn runtime_modifiers(&self) -> &[Arc<dyn Modifier>] {
        &self.modifiers
    }

    /// Base modifiers first, then runtime modifiers in attach order.
    pub fn all_modifiers(&self) -> impl Iterator<Item = &Arc<dyn Modifier>> {
        self.archetype
            .base_modifiers()
            .iter()
            .chain(self.modifiers.iter())
    }

    /// Re-derives attack and max health from the archetype and every modifier.
    ///
    /// On initialization health is filled to the new maximum; otherwise it is
    /// clamped into `[0, max]`.
    pub fn recompute_stats(&mut self, initializing: bool) -> HealthChange {
        let old = self.health;
        let mut attack = self.archetype.base_attack();
        let mut max_health = self.archetype.base_max_health();
        for modifier in self.all_modifiers() {
            attack = modifier.adjust_attack(self, attack);
            max_health = modifier.adjust_max_health(self, max_health);
        }

        self.attack = attack.max(0) as u32;
        self.max_health = max_health.max(1) as u32;
        self.health = if initializing {
            self.max_health
        } else {
            self.health.min(self.max_health)
        };

        self.health_change(old)
    }

    /// Adds a runtime modifier, fires its attach hook and recomputes stats.
    pub fn attach_modifier(&mut self, modifier: Arc<dyn Modifier>) -> HealthChange {
        modifier.on_attach(self);
        self.modifiers.push(modifier);
        self.recompute_stats(false)
    }

    /// Removes the most recently attached runtime modifier with this name.
    pub fn detach_modifier(&mut self, name: &str) -> Option<(Arc<dyn Modifier>, HealthChange)> {
        let index = self.modifiers.iter().rposition(|m| m.name() == name)?;
        let modifier = self.modifiers.remove(index);
        modifier.on_detach(self);
        let change = self.recompute_stats(false);
        Some((modifier, change))
    }

    pub fn receive_damage(&mut self, amount: u32) -> HealthChange {
        let old = self.health;
        self.health = self.health.saturating_sub(amount);
        for modifier in self.all_modifiers() {
            modifier.on_damage_taken(self, amount);
        }
        self.health_change(old)
    }

    pub fn heal(&mut self, amount: u32) -> HealthChange {
        let old = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health_change(old)
    }

    fn health_change(&self, old: u32) -> HealthChange {
        HealthChange {
            unit: self.id,
            old,
            new: self.health,
            max: self.max_health,
        }
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("id", &self.id)
            .field("archetype", &self.archetype.name())
            .field("team", &self.team)
            .field("position", &self.position)
            .field("health", &self.health)
            .field("max_health", &self.max_health)
            .field("attack", &self.attack)
            .field(
                "modifiers",
                &self.modifiers.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::StatBonus;

    fn soldier() -> Arc<Archetype> {
        Arc::new(Archetype::new("soldier").with_stats(5, 2))
    }

    #[test]
    fn initialization_fills_health() {
        let unit = Unit::new(UnitId(1), soldier(), Team::White, Position::ORIGIN);
        assert_eq!(unit.health(), 5);
        assert_eq!(unit.max_health(), 5);
        assert_eq!(unit.attack(), 2);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut unit = Unit::new(UnitId(1), soldier(), Team::White, Position::ORIGIN);
        unit.attach_modifier(Arc::new(StatBonus::new(3, -2)));
        let first = (unit.attack(), unit.max_health(), unit.health());
        unit.recompute_stats(false);
        unit.recompute_stats(false);
        assert_eq!((unit.attack(), unit.max_health(), unit.health()), first);
    }

    #[test]
    fn derived_stats_are_floored() {
        let mut unit = Unit::new(UnitId(1), soldier(), Team::Black, Position::ORIGIN);
        unit.attach_modifier(Arc::new(StatBonus::new(-10, -10)));
        assert_eq!(unit.attack(), 0);
        assert_eq!(unit.max_health(), 1);
        assert_eq!(unit.health(), 1);
    }

    #[test]
    fn detach_restores_stats_without_refilling_health() {
        let mut unit = Unit::new(UnitId(1), soldier(), Team::White, Position::ORIGIN);
        unit.attach_modifier(Arc::new(StatBonus::new(1, 3)));
        assert_eq!(unit.max_health(), 8);
        assert_eq!(unit.health(), 5);

        let (removed, change) = unit.detach_modifier("stat-bonus").expect("attached");
        assert_eq!(removed.name(), "stat-bonus");
        assert_eq!(change.max, 5);
        assert_eq!(unit.attack(), 2);
        assert!(unit.detach_modifier("stat-bonus").is_none());
    }

    #[test]
    fn damage_and_heal_clamp() {
        let mut unit = Unit::new(UnitId(1), soldier(), Team::White, Position::ORIGIN);
        let change = unit.receive_damage(9);
        assert!(change.is_lethal());
        assert_eq!(change.old, 5);
        let change = unit.heal(100);
        assert_eq!(change.new, 5);
    }
}
