//! Agent personality profiles.
//!
//! A profile is everything the decision funnel needs to know about one side:
//! which tiers to try and in what order, how to weigh candidates, how far to
//! look ahead and how to pace its actions. Every field has a default, so
//! profile files only need to spell out what differs.

use std::time::Duration;

use game_core::Team;
use serde::{Deserialize, Serialize};

/// Priority category evaluated in strict configured order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum PriorityTier {
    /// Capture an enemy that dies from the hit.
    LethalCapture,
    /// Attack any enemy.
    Capture,
    /// Step onto an empty cell closer to the nearest enemy.
    Approach,
    /// Step away from danger when hurt or threatened.
    Retreat,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    pub lethal_capture: f32,
    pub capture_damage: f32,
    pub target_value: f32,
    pub close_distance: f32,
    pub stride: f32,
    pub energy_cost: f32,
    pub repeat: f32,
    pub threat_penalty: f32,
    /// Half-width of the uniform noise added to every score.
    pub noise: f32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            lethal_capture: 120.0,
            capture_damage: 6.0,
            target_value: 1.5,
            close_distance: 0.8,
            stride: 2.0,
            energy_cost: 0.7,
            repeat: 1.0,
            threat_penalty: 1.0,
            noise: 0.15,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookaheadSettings {
    pub enabled: bool,
    /// Weight applied to the best follow-up score.
    pub decay: f32,
    /// Upper bound on follow-up moves scored per candidate.
    pub max_followups: usize,
}

impl Default for LookaheadSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            decay: 0.5,
            max_followups: 32,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetreatThresholds {
    /// Retreat when health / max health is at or below this ratio.
    pub low_health_ratio: f32,
    /// Retreat when at least this many enemies can reach the unit's cell.
    pub threat_count: u32,
}

impl Default for RetreatThresholds {
    fn default() -> Self {
        Self {
            low_health_ratio: 0.33,
            threat_count: 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Highlight colors used when an agent announces its move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegraphColors {
    pub origin: Rgba,
    pub path: Rgba,
    pub destination: Rgba,
}

impl Default for TelegraphColors {
    fn default() -> Self {
        Self {
            origin: Rgba::new(1.0, 0.3, 0.3, 1.0),
            path: Rgba::new(0.6, 0.8, 1.0, 1.0),
            destination: Rgba::new(1.0, 0.6, 0.1, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentProfile {
    pub team: Team,
    pub priorities: Vec<PriorityTier>,
    pub weights: HeuristicWeights,
    pub lookahead: LookaheadSettings,
    pub max_actions_per_turn: u32,
    /// Turn ends when the best candidate scores below this.
    pub min_score_to_act: f32,
    pub retreat: RetreatThresholds,
    /// Pause after each executed action, in seconds.
    pub action_delay_secs: f32,
    pub telegraph: TelegraphColors,
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            team: Team::Black,
            priorities: vec![
                PriorityTier::LethalCapture,
                PriorityTier::Capture,
                PriorityTier::Approach,
                PriorityTier::Retreat,
            ],
            weights: HeuristicWeights::default(),
            lookahead: LookaheadSettings::default(),
            max_actions_per_turn: 6,
            min_score_to_act: 0.0,
            retreat: RetreatThresholds::default(),
            action_delay_secs: 0.25,
            telegraph: TelegraphColors::default(),
        }
    }
}

impl AgentProfile {
    pub fn for_team(team: Team) -> Self {
        Self {
            team,
            ..Self::default()
        }
    }

    pub fn action_delay(&self) -> Duration {
        secs_to_millis(self.action_delay_secs)
    }

    /// Pause between telegraphing a move and executing it.
    pub fn telegraph_delay(&self) -> Duration {
        secs_to_millis(self.action_delay_secs * 0.6).max(MIN_TELEGRAPH_DELAY)
    }

    /// Rejects values that cannot drive a turn: non-finite weights, negative
    /// delays or noise, and an empty tier list.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.priorities.is_empty() {
            return Err(ProfileError::NoPriorities { team: self.team });
        }

        let w = &self.weights;
        let finite = [
            ("weights.lethal_capture", w.lethal_capture),
            ("weights.capture_damage", w.capture_damage),
            ("weights.target_value", w.target_value),
            ("weights.close_distance", w.close_distance),
            ("weights.stride", w.stride),
            ("weights.energy_cost", w.energy_cost),
            ("weights.repeat", w.repeat),
            ("weights.threat_penalty", w.threat_penalty),
            ("lookahead.decay", self.lookahead.decay),
            ("min_score_to_act", self.min_score_to_act),
            ("retreat.low_health_ratio", self.retreat.low_health_ratio),
        ];
        if let Some((field, value)) = finite.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ProfileError::NotFinite { field, value });
        }

        let non_negative = [
            ("weights.noise", w.noise),
            ("action_delay_secs", self.action_delay_secs),
        ];
        if let Some((field, value)) = non_negative
            .into_iter()
            .find(|(_, v)| !v.is_finite() || *v < 0.0)
        {
            return Err(ProfileError::Negative { field, value });
        }
        Ok(())
    }
}

const MIN_TELEGRAPH_DELAY: Duration = Duration::from_millis(100);

/// Whole milliseconds; anything non-finite or negative is zero.
fn secs_to_millis(secs: f32) -> Duration {
    if !secs.is_finite() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_millis((secs * 1000.0).round() as u64)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("profile for {team} lists no priority tiers")]
    NoPriorities { team: Team },

    #[error("`{field}` must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("`{field}` must be finite and not negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}
