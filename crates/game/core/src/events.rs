//! Domain events emitted by execution and combat.
//!
//! Emission order within one action's lifecycle is fixed: `MoveStarted` and
//! `AttackStarted` announce intent before validation, everything else is
//! emitted after the mutation it describes.
use crate::state::{Position, UnitId};

#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    MoveStarted {
        unit: UnitId,
        destination: Position,
    },
    MoveFailedInsufficientEnergy {
        unit: UnitId,
        destination: Position,
        cost: u32,
    },
    PieceCaptured {
        attacker: UnitId,
        victim: UnitId,
        cell: Position,
    },
    PieceMoved {
        unit: UnitId,
        from: Position,
        to: Position,
        cost: u32,
    },
    AttackStarted {
        attacker: UnitId,
        cell: Position,
    },
    AttackHit {
        attacker: UnitId,
        defender: UnitId,
        damage: u32,
    },
    /// `killer` is `None` when a tile effect did the killing.
    UnitKilled {
        killer: Option<UnitId>,
        victim: UnitId,
    },
    AttackResolved {
        attacker: UnitId,
        cell: Position,
        died: bool,
    },
    HealthChanged {
        unit: UnitId,
        old: u32,
        new: u32,
        max: u32,
    },
}

impl GameEvent {
    /// Variant name, used as a log field.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// Fire-and-forget receiver of domain events.
pub trait EventSink: Send {
    fn emit(&mut self, event: GameEvent);
}

/// Records events in order; handy for tests and replays.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}
