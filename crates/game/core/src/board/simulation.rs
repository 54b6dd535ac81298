//! Speculative mutate-then-restore of the occupancy grid.
//!
//! [`Board::simulate`] hypothesizes one move by touching only the grid and the
//! mover's coordinate, and returns a [`Simulation`] guard. While the guard is
//! alive the board is reachable read-only through it; dropping the guard rolls
//! the board back on every exit path. No tile trigger, modifier reaction or
//! event fires here.
use std::ops::Deref;

use crate::combat::would_kill;
use crate::state::{Position, UnitId};

use super::{Board, BoardError, approach_cell};

/// Everything needed to undo one simulated move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimSnapshot {
    pub mover: UnitId,
    pub origin: Position,
    pub placed_at: Position,
    /// Defender temporarily cleared from the grid because it would die.
    pub cleared: Option<UnitId>,
}

/// Scoped simulation; rolls the board back when dropped.
pub struct Simulation<'a> {
    board: &'a mut Board,
    snapshot: SimSnapshot,
}

impl Board {
    /// Places `mover` where a real move toward `destination` would leave it.
    ///
    /// A surviving enemy at the destination places the mover on the approach
    /// cell (or leaves it at its origin when there is none); a defender that
    /// would die is cleared from the grid and the mover takes its cell.
    ///
    /// Returns `None` when the board has no occupancy grid, the mover is
    /// unknown, or the destination is off the board or held by an ally.
    /// Callers fall back to scoring without lookahead.
    pub fn simulate(&mut self, mover: UnitId, destination: Position) -> Option<Simulation<'_>> {
        let grid = self.grid.as_ref()?;
        if !grid.contains(destination) {
            return None;
        }
        let unit = self.units.get(&mover)?;
        let origin = unit.position();

        let (placed_at, cleared) = match self.unit_at(destination) {
            None => (destination, None),
            Some(occupant) if occupant.team() == unit.team() => return None,
            Some(defender) if would_kill(unit, defender) => (destination, Some(defender.id())),
            Some(_) => (
                approach_cell(self, origin, destination).unwrap_or(origin),
                None,
            ),
        };

        let grid = self.grid.as_mut()?;
        grid.clear(origin);
        if cleared.is_some() {
            grid.clear(destination);
        }
        grid.set(placed_at, mover);
        if let Some(unit) = self.units.get_mut(&mover) {
            unit.set_position(placed_at);
        }

        Some(Simulation {
            board: self,
            snapshot: SimSnapshot {
                mover,
                origin,
                placed_at,
                cleared,
            },
        })
    }
}

impl Simulation<'_> {
    pub fn snapshot(&self) -> &SimSnapshot {
        &self.snapshot
    }

    pub fn placed_at(&self) -> Position {
        self.snapshot.placed_at
    }

    /// Ends the simulation explicitly; equivalent to dropping the guard.
    pub fn rollback(self) {}

    /// Board invariants as they hold mid-simulation.
    ///
    /// A defender cleared by a lethal capture keeps its coordinate while the
    /// mover holds its cell, so that one claim is exempt.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        self.board.check_invariants_except(self.snapshot.cleared)
    }

    fn restore(&mut self) {
        let SimSnapshot {
            mover,
            origin,
            placed_at,
            cleared,
        } = self.snapshot;

        // Defenders never move under simulation, so their own coordinate is
        // still the cell they were cleared from.
        let defender_cell =
            cleared.and_then(|id| self.board.units.get(&id).map(|d| (id, d.position())));

        if let Some(grid) = self.board.grid.as_mut() {
            grid.clear(placed_at);
            if let Some((id, cell)) = defender_cell {
                grid.set(cell, id);
            }
            grid.set(origin, mover);
        }
        if let Some(unit) = self.board.units.get_mut(&mover) {
            unit.set_position(origin);
        }
        debug_assert!(self.board.check_invariants().is_ok());
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::env::{MapDimensions, StaticMap};
    use crate::rules::SlidingRays;
    use crate::state::{Archetype, Team};

    fn board() -> Board {
        Board::new(Arc::new(StaticMap::new(MapDimensions::new(8, 8))))
    }

    fn rook(attack: i32, health: i32) -> Arc<Archetype> {
        Arc::new(
            Archetype::new("rook")
                .with_stats(health, attack)
                .with_rule(Arc::new(SlidingRays::rook())),
        )
    }

    #[test]
    fn empty_destination_moves_and_restores() {
        let mut board = board();
        let id = board
            .place_unit(rook(1, 3), Team::White, Position::new(0, 0))
            .expect("placement");
        let before = board.grid().cloned();

        {
            let sim = board.simulate(id, Position::new(0, 3)).expect("simulate");
            assert_eq!(sim.placed_at(), Position::new(0, 3));
            assert_eq!(sim.occupant(Position::new(0, 3)), Some(id));
            assert_eq!(sim.occupant(Position::new(0, 0)), None);
            assert!(sim.check_invariants().is_ok());
        }

        assert_eq!(board.grid().cloned(), before);
        assert_eq!(board.unit(id).map(|u| u.position()), Some(Position::new(0, 0)));
    }

    #[test]
    fn lethal_capture_clears_defender_then_restores_it() {
        let mut board = board();
        let attacker = board
            .place_unit(rook(5, 3), Team::White, Position::new(0, 0))
            .expect("placement");
        let defender = board
            .place_unit(rook(1, 2), Team::Black, Position::new(0, 5))
            .expect("placement");

        let sim = board.simulate(attacker, Position::new(0, 5)).expect("simulate");
        assert_eq!(sim.snapshot().cleared, Some(defender));
        assert_eq!(sim.occupant(Position::new(0, 5)), Some(attacker));
        assert_eq!(sim.unit(defender).map(|u| u.health()), Some(2));
        assert_eq!(sim.enemies_of(Team::White).count(), 0);
        assert!(sim.check_invariants().is_ok());
        sim.rollback();

        assert_eq!(board.occupant(Position::new(0, 5)), Some(defender));
        assert_eq!(board.occupant(Position::new(0, 0)), Some(attacker));
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn surviving_defender_places_mover_on_approach_cell() {
        let mut board = board();
        let attacker = board
            .place_unit(rook(3, 3), Team::White, Position::new(0, 0))
            .expect("placement");
        let defender = board
            .place_unit(rook(1, 5), Team::Black, Position::new(0, 5))
            .expect("placement");

        let sim = board.simulate(attacker, Position::new(0, 5)).expect("simulate");
        assert_eq!(sim.placed_at(), Position::new(0, 4));
        assert_eq!(sim.snapshot().cleared, None);
        assert_eq!(sim.occupant(Position::new(0, 5)), Some(defender));
        drop(sim);

        assert_eq!(board.occupant(Position::new(0, 4)), None);
        assert_eq!(board.unit(attacker).map(|u| u.position()), Some(Position::new(0, 0)));
    }

    #[test]
    fn diagonal_lethal_capture_keeps_invariants() {
        let mut board = board();
        let bishop = Arc::new(
            Archetype::new("bishop")
                .with_stats(3, 1)
                .with_rule(Arc::new(SlidingRays::bishop())),
        );
        let queen = Arc::new(
            Archetype::new("queen")
                .with_stats(5, 3)
                .with_rule(Arc::new(SlidingRays::queen())),
        );
        let defender = board
            .place_unit(bishop, Team::White, Position::new(4, 0))
            .expect("placement");
        let attacker = board
            .place_unit(queen, Team::Black, Position::new(5, 1))
            .expect("placement");

        {
            let sim = board.simulate(attacker, Position::new(4, 0)).expect("simulate");
            assert_eq!(sim.snapshot().cleared, Some(defender));
            assert_eq!(sim.check_invariants(), Ok(()));
        }

        assert_eq!(board.check_invariants(), Ok(()));
        assert_eq!(board.occupant(Position::new(4, 0)), Some(defender));
    }

    #[test]
    fn no_grid_means_no_simulation() {
        let mut board = Board::without_grid(Arc::new(StaticMap::new(MapDimensions::new(8, 8))));
        assert!(board.simulate(UnitId(1), Position::new(0, 1)).is_none());
    }

    #[test]
    fn ally_destination_is_not_simulated() {
        let mut board = board();
        let a = board
            .place_unit(rook(1, 1), Team::White, Position::new(0, 0))
            .expect("placement");
        board
            .place_unit(rook(1, 1), Team::White, Position::new(0, 1))
            .expect("placement");
        assert!(board.simulate(a, Position::new(0, 1)).is_none());
    }
}
