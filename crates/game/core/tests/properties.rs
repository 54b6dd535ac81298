//! Property-based tests for move assembly, simulation and execution.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use game_core::{
    Archetype, Board, EnergyPool, FixedJumps, Haste, MapDimensions, MoveOutcome, MoveRequest,
    NullSink, PawnAdvance, Position, RejectReason, SingleStep, SlidingRays, StaticMap,
    StepPlusOne, Team, TurnState, UnitId, Wall, execute_move, legal_moves,
};

fn archetypes() -> Vec<Arc<Archetype>> {
    vec![
        Arc::new(
            Archetype::new("rook")
                .with_stats(4, 2)
                .with_rule(Arc::new(SlidingRays::rook())),
        ),
        Arc::new(
            Archetype::new("bishop")
                .with_stats(3, 2)
                .with_rule(Arc::new(SlidingRays::bishop())),
        ),
        Arc::new(
            Archetype::new("queen")
                .with_stats(5, 3)
                .with_rule(Arc::new(SlidingRays::queen())),
        ),
        Arc::new(
            Archetype::new("knight")
                .with_stats(3, 3)
                .with_rule(Arc::new(FixedJumps)),
        ),
        Arc::new(
            Archetype::new("king")
                .with_stats(6, 1)
                .with_rule(Arc::new(SingleStep)),
        ),
        Arc::new(
            Archetype::new("pawn")
                .with_stats(2, 1)
                .with_rule(Arc::new(PawnAdvance::new(1, true))),
        ),
        Arc::new(
            Archetype::new("scout")
                .with_stats(2, 1)
                .with_rule(Arc::new(SlidingRays::bishop()))
                .with_modifier(Arc::new(StepPlusOne))
                .with_modifier(Arc::new(Haste::new(3))),
        ),
    ]
}

type Placement = (i32, i32, bool, usize);

fn placements() -> impl Strategy<Value = Vec<Placement>> {
    prop::collection::vec((0i32..8, 0i32..8, any::<bool>(), 0usize..7), 1..14)
}

fn walls() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((0i32..8, 0i32..8), 0..4)
}

fn build(placements: &[Placement], walls: &[(i32, i32)]) -> (Board, Vec<UnitId>) {
    let mut map = StaticMap::new(MapDimensions::new(8, 8));
    for &(x, y) in walls {
        map.add_tile(Position::new(x, y), Arc::new(Wall));
    }
    let mut board = Board::new(Arc::new(map));
    let kinds = archetypes();
    let ids = placements
        .iter()
        .filter_map(|&(x, y, white, kind)| {
            let team = if white { Team::White } else { Team::Black };
            board
                .place_unit(kinds[kind].clone(), team, Position::new(x, y))
                .ok()
        })
        .collect();
    (board, ids)
}

fn positions(board: &Board) -> Vec<(UnitId, Position, u32)> {
    board
        .units()
        .map(|u| (u.id(), u.position(), u.health()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Assembled moves are in bounds, never onto allies and never duplicated.
    #[test]
    fn prop_moves_are_legal_and_distinct(placements in placements(), walls in walls()) {
        let (board, ids) = build(&placements, &walls);
        let dims = board.dimensions();
        for id in ids {
            let team = board.unit(id).map(|u| u.team());
            let moves = legal_moves(&board, id);
            let mut seen = HashSet::new();
            for option in &moves {
                prop_assert!(dims.contains(option.destination));
                prop_assert!(seen.insert(option.destination));
                prop_assert!(option.cost >= 1);
                let occupant = board.unit_at(option.destination);
                prop_assert!(occupant.is_none_or(|o| Some(o.team()) != team));
                prop_assert_eq!(option.is_capture, occupant.is_some());
                prop_assert!(board.tile_rules(option.destination).is_empty());
            }
        }
    }

    /// Simulating any legal move and rolling back leaves the board bit-identical.
    #[test]
    fn prop_simulation_is_a_no_op(placements in placements()) {
        let (mut board, ids) = build(&placements, &[]);
        let grid_before = board.grid().cloned();
        let units_before = positions(&board);

        for id in ids {
            for option in legal_moves(&board, id) {
                let sim = board.simulate(id, option.destination);
                prop_assert!(sim.is_some());
                if let Some(sim) = sim {
                    prop_assert!(sim.check_invariants().is_ok());
                    let _followups = legal_moves(&sim, id);
                }
            }
        }

        prop_assert_eq!(board.grid().cloned(), grid_before);
        prop_assert_eq!(positions(&board), units_before);
    }

    /// A failed spend leaves grid, positions and health untouched.
    #[test]
    fn prop_failed_spend_mutates_nothing(placements in placements(), spent in 0u32..=6) {
        let (mut board, ids) = build(&placements, &[]);
        let mut pool = TurnState::default();
        pool.try_spend(spent);

        for id in ids {
            for option in legal_moves(&board, id) {
                if option.cost <= pool.remaining() {
                    continue;
                }
                let grid_before = board.grid().cloned();
                let units_before = positions(&board);
                let outcome = execute_move(
                    &mut board,
                    Some(&mut pool),
                    &mut NullSink,
                    MoveRequest::from_option(id, &option),
                );
                let rejected = matches!(
                    outcome,
                    Ok(MoveOutcome::Rejected(RejectReason::InsufficientEnergy { .. }))
                );
                prop_assert!(rejected);
                prop_assert_eq!(board.grid().cloned(), grid_before);
                prop_assert_eq!(positions(&board), units_before);
            }
        }
    }

    /// Recomputing derived stats without modifier changes is idempotent.
    #[test]
    fn prop_stat_recompute_is_idempotent(placements in placements(), bonus in -5i32..5) {
        let (mut board, ids) = build(&placements, &[]);
        for id in ids {
            board
                .attach_modifier(
                    id,
                    Arc::new(game_core::StatBonus::new(bonus, bonus)),
                    &mut NullSink,
                )
                .expect("unit exists");
            let first = board.unit(id).map(|u| (u.attack(), u.max_health(), u.health()));
            board.refresh_stats(id, &mut NullSink).expect("unit exists");
            board.refresh_stats(id, &mut NullSink).expect("unit exists");
            let second = board.unit(id).map(|u| (u.attack(), u.max_health(), u.health()));
            prop_assert_eq!(first, second);
        }
    }
}
