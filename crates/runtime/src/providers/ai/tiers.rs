//! Priority-tier candidate selection.

use game_content::{AgentProfile, PriorityTier};
use game_core::{Board, MoveOption, Position, Team, Unit, UnitId, legal_moves_for, would_kill};

use super::context::{nearest_enemy_position, should_retreat, threat_count};
use super::scoring::Scorer;

/// A legal move that fits a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub unit: UnitId,
    pub origin: Position,
    pub option: MoveOption,
}

/// Best-scoring candidate of the winning tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Choice {
    pub candidate: Candidate,
    pub tier: PriorityTier,
    pub score: f32,
}

/// Every affordable move of `profile.team` that fits `tier`.
pub fn collect_candidates(
    board: &Board,
    profile: &AgentProfile,
    tier: PriorityTier,
    energy: u32,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for unit in board.units_of(profile.team) {
        let origin = unit.position();
        let nearest = nearest_enemy_position(board, origin, unit.team());
        let retreat = (tier == PriorityTier::Retreat)
            .then(|| RetreatContext::new(board, unit, profile))
            .flatten();

        for option in legal_moves_for(board, unit) {
            if option.cost > energy {
                continue;
            }
            let target = board.unit_at(option.destination);
            let enemy = target.filter(|t| t.team() != unit.team());

            let fits = match tier {
                PriorityTier::LethalCapture => enemy.is_some_and(|e| would_kill(unit, e)),
                PriorityTier::Capture => enemy.is_some(),
                PriorityTier::Approach => {
                    target.is_none()
                        && nearest.is_some_and(|n| {
                            option.destination.manhattan(n) < origin.manhattan(n)
                        })
                }
                PriorityTier::Retreat => {
                    target.is_none()
                        && retreat.as_ref().is_some_and(|r| {
                            r.improves(board, unit.team(), option.destination, nearest)
                        })
                }
            };
            if fits {
                candidates.push(Candidate {
                    unit: unit.id(),
                    origin,
                    option,
                });
            }
        }
    }
    candidates
}

/// Threat level at the unit's cell, known only when it wants to retreat.
struct RetreatContext {
    origin: Position,
    threats_now: u32,
}

impl RetreatContext {
    fn new(board: &Board, unit: &Unit, profile: &AgentProfile) -> Option<Self> {
        should_retreat(board, unit, &profile.retreat).then(|| Self {
            origin: unit.position(),
            threats_now: threat_count(board, unit.position(), unit.team()),
        })
    }

    /// Strictly safer or strictly farther from the nearest enemy.
    fn improves(
        &self,
        board: &Board,
        team: Team,
        destination: Position,
        nearest: Option<Position>,
    ) -> bool {
        let safer = threat_count(board, destination, team) < self.threats_now;
        let farther = nearest
            .is_some_and(|n| destination.manhattan(n) > self.origin.manhattan(n));
        safer || farther
    }
}

/// Walks the profile's tiers in order and scores the first non-empty one.
///
/// Lower tiers are never collected once a tier yields candidates. Ties keep
/// the first candidate scored.
pub fn pick_best(board: &mut Board, scorer: &mut Scorer<'_>, energy: u32) -> Option<Choice> {
    let profile = scorer.profile();
    for &tier in &profile.priorities {
        let candidates = collect_candidates(board, profile, tier, energy);
        if candidates.is_empty() {
            tracing::trace!(%tier, "no candidates");
            continue;
        }

        let mut best: Option<Choice> = None;
        for candidate in candidates {
            let score = scorer.with_lookahead(board, candidate.unit, &candidate.option, energy);
            tracing::debug!(
                %tier,
                unit = %candidate.unit,
                destination = %candidate.option.destination,
                cost = candidate.option.cost,
                score,
                "scored candidate"
            );
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(Choice {
                    candidate,
                    tier,
                    score,
                });
            }
        }
        return best;
    }
    None
}
