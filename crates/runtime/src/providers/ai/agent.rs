//! The agent turn loop.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use game_content::AgentProfile;
use game_core::{Board, EnergyPool, MoveOutcome, MoveRequest, Team, UnitId, execute_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::scoring::Scorer;
use super::tiers::{Choice, pick_best};
use crate::error::Result;
use crate::events::{BusSink, EventBus};
use crate::providers::TurnController;
use crate::telegraph::{NoopRenderer, PathRenderer, TelegraphPlan};
use crate::turn::TurnManager;

/// Why a turn loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum EndReason {
    /// No tier produced a candidate.
    NoCandidate,
    /// The best candidate scored below the profile's minimum.
    BelowMinimumScore,
    EnergyExhausted,
    ActionCap,
    /// Execution rejected the chosen move.
    ExecutionFailed,
    /// The turn was aborted while the loop was paused.
    Aborted,
    /// Asked to play while another team was acting.
    NotActing,
    Passed,
}

/// What one played turn amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    /// Execution attempts, failed ones included.
    pub actions: u32,
    pub reason: EndReason,
}

/// Aborts the agent's turn in progress.
///
/// The loop notices at its next pause, clears any telegraph highlight and
/// returns without ending the turn on the pool.
#[derive(Clone)]
pub struct AbortHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl AbortHandle {
    pub fn abort(&self) {
        self.tx.send_replace(true);
    }
}

/// [`TurnController`] driven by an [`AgentProfile`].
pub struct AgentController {
    profile: AgentProfile,
    bus: EventBus,
    renderer: Box<dyn PathRenderer>,
    rng: StdRng,
    abort_tx: Arc<watch::Sender<bool>>,
    abort_rx: watch::Receiver<bool>,
    last_moved: Option<UnitId>,
}

impl AgentController {
    pub fn new(profile: AgentProfile, bus: EventBus) -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            profile,
            bus,
            renderer: Box::new(NoopRenderer),
            rng: StdRng::from_entropy(),
            abort_tx: Arc::new(tx),
            abort_rx: rx,
            last_moved: None,
        }
    }

    /// Fixes the noise source so runs repeat exactly.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn PathRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    pub fn abort_handle(&self) -> AbortHandle {
        AbortHandle {
            tx: Arc::clone(&self.abort_tx),
        }
    }

    fn aborted(&self) -> bool {
        *self.abort_rx.borrow()
    }

    /// Waits for `duration` unless the turn is aborted first.
    ///
    /// Returns `false` when aborted. A zero duration still yields once.
    async fn pause(&mut self, duration: Duration) -> bool {
        if self.aborted() {
            return false;
        }
        if duration.is_zero() {
            tokio::task::yield_now().await;
            return !self.aborted();
        }
        let abort_rx = &mut self.abort_rx;
        tokio::select! {
            biased;
            Ok(_) = abort_rx.wait_for(|aborted| *aborted) => false,
            _ = tokio::time::sleep(duration) => true,
        }
    }

    async fn telegraph(&mut self, plan: &TelegraphPlan) -> bool {
        self.renderer.highlight(&plan.colored(&self.profile.telegraph));
        let keep_going = self.pause(self.profile.telegraph_delay()).await;
        self.renderer.clear(&plan.cells());
        keep_going
    }

    fn choose(&mut self, board: &mut Board, energy: u32) -> Option<Choice> {
        let mut scorer = Scorer::new(&self.profile, &mut self.rng, self.last_moved);
        pick_best(board, &mut scorer, energy)
    }

    /// One select-telegraph-execute-pause step; `Some` ends the turn.
    ///
    /// `actions` counts every execution attempt, failed ones included.
    async fn step(
        &mut self,
        board: &mut Board,
        turns: &mut TurnManager,
        actions: &mut u32,
    ) -> Option<EndReason> {
        let Some(choice) = self.choose(board, turns.remaining()) else {
            return Some(EndReason::NoCandidate);
        };
        let candidate = choice.candidate;
        if choice.score < self.profile.min_score_to_act {
            debug!(
                score = choice.score,
                minimum = self.profile.min_score_to_act,
                "best candidate below minimum score"
            );
            return Some(EndReason::BelowMinimumScore);
        }

        let plan = TelegraphPlan::new(candidate.origin, candidate.option.destination);
        if !self.telegraph(&plan).await {
            return Some(EndReason::Aborted);
        }

        let mut sink = BusSink::new(self.bus.clone());
        let request = MoveRequest::from_option(candidate.unit, &candidate.option);
        let executed = execute_move(board, Some(&mut *turns), &mut sink, request);
        *actions += 1;
        match executed {
            Ok(MoveOutcome::Rejected(reason)) => {
                warn!(unit = %candidate.unit, ?reason, "agent move rejected");
                return Some(EndReason::ExecutionFailed);
            }
            Ok(outcome) => {
                info!(
                    team = %self.profile.team,
                    unit = %candidate.unit,
                    tier = %choice.tier,
                    from = %candidate.origin,
                    to = %candidate.option.destination,
                    cost = candidate.option.cost,
                    score = choice.score,
                    ?outcome,
                    "agent acted"
                );
                self.last_moved = Some(candidate.unit);
            }
            Err(error) => {
                warn!(unit = %candidate.unit, %error, "agent move failed");
                return Some(EndReason::ExecutionFailed);
            }
        }

        if !self.pause(self.profile.action_delay()).await {
            return Some(EndReason::Aborted);
        }
        None
    }

    /// Plays until energy, the action cap, the score gate or a failure stops
    /// the turn, then ends it if this team is still acting.
    pub async fn run_turn(&mut self, board: &mut Board, turns: &mut TurnManager) -> TurnSummary {
        let team = self.profile.team;
        if turns.acting_team() != team {
            warn!(%team, acting = %turns.acting_team(), "agent asked to play out of turn");
            return TurnSummary {
                actions: 0,
                reason: EndReason::NotActing,
            };
        }

        self.abort_tx.send_replace(false);
        self.last_moved = None;
        let mut actions = 0;

        // The turn manager is borrowed for the whole loop, so only this
        // agent's own `end_turn` can hand the turn over.
        let reason = loop {
            if turns.remaining() == 0 {
                break EndReason::EnergyExhausted;
            }
            if actions >= self.profile.max_actions_per_turn {
                break EndReason::ActionCap;
            }
            if let Some(reason) = self.step(board, turns, &mut actions).await {
                break reason;
            }
        };

        if reason != EndReason::Aborted {
            turns.end_turn();
        }
        info!(%team, actions, %reason, "agent turn finished");
        TurnSummary { actions, reason }
    }
}

#[async_trait]
impl TurnController for AgentController {
    fn team(&self) -> Team {
        self.profile.team
    }

    async fn play_turn(
        &mut self,
        board: &mut Board,
        turns: &mut TurnManager,
    ) -> Result<TurnSummary> {
        Ok(self.run_turn(board, turns).await)
    }
}
