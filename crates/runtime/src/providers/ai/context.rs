//! Board queries the agent asks while selecting and scoring.
//!
//! All of these read the board as it currently is, so they give the right
//! answers on a simulated board too.

use game_content::RetreatThresholds;
use game_core::{Board, Position, Team, Unit, legal_moves_for};

/// Number of `victim_team`'s enemies with a legal move onto `cell`.
pub fn threat_count(board: &Board, cell: Position, victim_team: Team) -> u32 {
    board
        .enemies_of(victim_team)
        .filter(|enemy| {
            legal_moves_for(board, enemy)
                .iter()
                .any(|option| option.destination == cell)
        })
        .count() as u32
}

/// Cell of the enemy closest to `from` by Manhattan distance.
pub fn nearest_enemy_position(board: &Board, from: Position, team: Team) -> Option<Position> {
    board.nearest_enemy(from, team).map(Unit::position)
}

/// Worth of a unit as a target.
pub fn piece_value(unit: &Unit) -> f32 {
    unit.value() as f32
}

/// Hurt badly enough or threatened by enough enemies to fall back.
pub fn should_retreat(board: &Board, unit: &Unit, thresholds: &RetreatThresholds) -> bool {
    unit.health_ratio() <= thresholds.low_health_ratio
        || threat_count(board, unit.position(), unit.team()) >= thresholds.threat_count
}
