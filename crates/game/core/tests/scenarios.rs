use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use game_core::{
    Archetype, Board, EnergyPool, FixedJumps, GameEvent, MapDimensions, Modifier, MoveOutcome,
    MoveRequest, NullSink, Position, SlidingRays, StaticMap, Team, TurnState, Unit, execute_move,
    legal_moves,
};

fn open_board() -> Board {
    Board::new(Arc::new(StaticMap::new(MapDimensions::new(8, 8))))
}

fn rook(health: i32, attack: i32) -> Arc<Archetype> {
    Arc::new(
        Archetype::new("rook")
            .with_stats(health, attack)
            .with_rule(Arc::new(SlidingRays::rook())),
    )
}

#[test]
fn rook_sees_enemy_down_an_open_file() {
    let mut board = open_board();
    let id = board
        .place_unit(rook(3, 1), Team::White, Position::new(0, 0))
        .expect("placement");
    board
        .place_unit(rook(3, 1), Team::Black, Position::new(0, 5))
        .expect("placement");

    let moves = legal_moves(&board, id);
    let capture = moves
        .iter()
        .find(|m| m.destination == Position::new(0, 5))
        .expect("enemy cell is reachable");
    assert!(capture.is_capture);
    assert_eq!(capture.cost, 5);
    assert!(moves.iter().all(|m| m.destination != Position::new(0, 6)));
}

#[test]
fn knight_in_the_middle_gets_all_eight_jumps_at_cost_two() {
    let mut board = open_board();
    let knight = Arc::new(Archetype::new("knight").with_rule(Arc::new(FixedJumps)));
    let id = board
        .place_unit(knight, Team::White, Position::new(3, 3))
        .expect("placement");

    let mut destinations: Vec<_> = legal_moves(&board, id)
        .iter()
        .inspect(|m| assert_eq!(m.cost, 2))
        .map(|m| m.destination)
        .collect();
    destinations.sort();

    let mut expected: Vec<_> = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (2, -1),
        (-2, 1),
        (1, -2),
        (-1, -2),
        (-2, -1),
    ]
    .iter()
    .map(|&(dx, dy)| Position::new(3 + dx, 3 + dy))
    .collect();
    expected.sort();
    assert_eq!(destinations, expected);
}

#[test]
fn knight_in_the_corner_keeps_only_in_bounds_jumps() {
    let mut board = open_board();
    let knight = Arc::new(Archetype::new("knight").with_rule(Arc::new(FixedJumps)));
    let id = board
        .place_unit(knight, Team::White, Position::new(7, 7))
        .expect("placement");
    let moves = legal_moves(&board, id);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.cost == 2 && !m.is_capture));
}

#[test]
fn surviving_defender_stops_attacker_on_the_approach_cell() {
    let mut board = open_board();
    let attacker = board
        .place_unit(rook(4, 3), Team::White, Position::new(0, 0))
        .expect("placement");
    let defender = board
        .place_unit(rook(5, 1), Team::Black, Position::new(0, 5))
        .expect("placement");
    let mut pool = TurnState::default();
    let mut events: Vec<GameEvent> = Vec::new();

    let option = legal_moves(&board, attacker)
        .into_iter()
        .find(|m| m.destination == Position::new(0, 5))
        .expect("capture option");
    let outcome = execute_move(
        &mut board,
        Some(&mut pool),
        &mut events,
        MoveRequest::from_option(attacker, &option),
    )
    .expect("configured");

    assert_eq!(
        outcome,
        MoveOutcome::AttackedNoKill {
            from: Position::new(0, 0),
            defender,
            damage: 3,
            glided_to: Some(Position::new(0, 4)),
        }
    );
    let defender_unit = board.unit(defender).expect("defender survives");
    assert_eq!(defender_unit.health(), 2);
    assert_eq!(defender_unit.position(), Position::new(0, 5));
    assert_eq!(board.occupant(Position::new(0, 4)), Some(attacker));
    assert_eq!(board.occupant(Position::new(0, 5)), Some(defender));
    assert_eq!(pool.remaining(), 1);
    assert_eq!(
        events.last(),
        Some(&GameEvent::AttackResolved {
            attacker,
            cell: Position::new(0, 5),
            died: false
        })
    );
}

#[test]
fn adjacent_non_lethal_attack_does_not_move_the_attacker() {
    let mut board = open_board();
    let attacker = board
        .place_unit(rook(4, 1), Team::White, Position::new(2, 2))
        .expect("placement");
    board
        .place_unit(rook(5, 1), Team::Black, Position::new(2, 3))
        .expect("placement");

    let outcome = execute_move(
        &mut board,
        None,
        &mut NullSink,
        MoveRequest::free(attacker, Position::new(2, 3)),
    )
    .expect("configured");

    assert!(matches!(
        outcome,
        MoveOutcome::AttackedNoKill {
            glided_to: None,
            ..
        }
    ));
    assert_eq!(board.occupant(Position::new(2, 2)), Some(attacker));
}

/// Counts reaction hooks so tests can prove which paths fire them.
#[derive(Default)]
struct HookCounter {
    enters: AtomicU32,
    leaves: AtomicU32,
    kills: AtomicU32,
}

struct Counting(Arc<HookCounter>);

impl Modifier for Counting {
    fn name(&self) -> &str {
        "counting"
    }

    fn on_enter_tile(&self, _unit: &Unit, _cell: Position) {
        self.0.enters.fetch_add(1, Ordering::SeqCst);
    }

    fn on_leave_tile(&self, _unit: &Unit, _cell: Position) {
        self.0.leaves.fetch_add(1, Ordering::SeqCst);
    }

    fn on_kill(&self, _unit: &Unit, _victim: &Unit) {
        self.0.kills.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn reaction_hooks_fire_for_real_moves_but_not_simulation() {
    let counter = Arc::new(HookCounter::default());
    let archetype = Arc::new(
        Archetype::new("hooked")
            .with_stats(3, 5)
            .with_rule(Arc::new(SlidingRays::rook()))
            .with_modifier(Arc::new(Counting(counter.clone()))),
    );
    let mut board = open_board();
    let id = board
        .place_unit(archetype, Team::White, Position::new(0, 0))
        .expect("placement");
    board
        .place_unit(rook(1, 1), Team::Black, Position::new(0, 6))
        .expect("placement");

    for destination in [Position::new(0, 3), Position::new(0, 6)] {
        let sim = board.simulate(id, destination).expect("grid allocated");
        drop(sim);
    }
    assert_eq!(counter.enters.load(Ordering::SeqCst), 0);
    assert_eq!(counter.kills.load(Ordering::SeqCst), 0);

    execute_move(
        &mut board,
        None,
        &mut NullSink,
        MoveRequest::free(id, Position::new(0, 6)),
    )
    .expect("configured");
    assert_eq!(counter.enters.load(Ordering::SeqCst), 1);
    assert_eq!(counter.leaves.load(Ordering::SeqCst), 1);
    assert_eq!(counter.kills.load(Ordering::SeqCst), 1);
}
