//! Run state, step logic and the caller-facing run handle.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tweenstep_core::{
    truncate_lossy, truncate_position, AnimationParameters, CurveExtras, CurveFamily, EasingError,
    EasingPhase, Evaluator,
};

use crate::error::DriverError;

/// Identifier of a started run, unique per driver.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunState {
    /// Started, waiting for a pool slot
    Idle,
    /// Stepping
    Running,
    /// Step counter reached the duration
    Completed,
    /// Stopped from outside
    Cancelled,
    /// Ended on a position that could not be delivered
    Failed,
}

impl RunState {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Failed)
    }
}

/// How a run ended, with the number of positions it posted.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed { delivered: u64 },
    Cancelled { delivered: u64 },
    Failed { delivered: u64, error: EasingError },
}

impl RunOutcome {
    #[inline]
    pub fn delivered(&self) -> u64 {
        match self {
            Self::Completed { delivered }
            | Self::Cancelled { delivered }
            | Self::Failed { delivered, .. } => *delivered,
        }
    }

    #[inline]
    pub fn state(&self) -> RunState {
        match self {
            Self::Completed { .. } => RunState::Completed,
            Self::Cancelled { .. } => RunState::Cancelled,
            Self::Failed { .. } => RunState::Failed,
        }
    }
}

/// Private stepping state of one run.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    params: AnimationParameters,
    family: CurveFamily,
    phase: EasingPhase,
    extras: CurveExtras,
    evaluator: Evaluator,
    step_delay: Duration,
    halt_on_non_finite: bool,
}

impl AnimationRun {
    pub fn new(
        params: AnimationParameters,
        family: CurveFamily,
        phase: EasingPhase,
        extras: CurveExtras,
        step_delay: Duration,
    ) -> Result<Self, EasingError> {
        params.validate()?;
        let evaluator = tweenstep_core::resolve(family, phase)?;
        Ok(Self {
            params,
            family,
            phase,
            extras,
            evaluator,
            step_delay,
            halt_on_non_finite: true,
        })
    }

    /// Deliver saturated integers instead of failing on unrepresentable positions.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.halt_on_non_finite = !lenient;
        self
    }

    #[inline]
    pub fn family(&self) -> CurveFamily {
        self.family
    }

    #[inline]
    pub fn phase(&self) -> EasingPhase {
        self.phase
    }

    #[inline]
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Step counter of the next evaluation.
    #[inline]
    pub fn current_time(&self) -> f64 {
        self.params.current_time
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.params.current_time >= self.params.duration
    }

    /// Evaluate the current step and advance the counter by one.
    ///
    /// Returns `None` once the counter has reached the duration.
    pub fn step(&mut self) -> Option<Result<i32, EasingError>> {
        if self.is_finished() {
            return None;
        }
        let p = &mut self.params;
        let t = p.current_time;
        let raw = (self.evaluator)(t, p.begin(), p.delta(), p.duration, &self.extras);
        p.current_time += 1.0;

        match truncate_position(t, raw) {
            Ok(position) => Some(Ok(position)),
            Err(err) if self.halt_on_non_finite => Some(Err(err)),
            Err(err) => {
                tracing::warn!(step = t, value = raw, error = %err, "tween.run.lossy_position");
                Some(Ok(truncate_lossy(raw)))
            }
        }
    }
}

/// Caller-side handle of a started run.
#[derive(Debug)]
pub struct RunHandle {
    id: RunId,
    cancel: CancellationToken,
    state: watch::Receiver<RunState>,
    join: JoinHandle<RunOutcome>,
}

impl RunHandle {
    pub(crate) fn new(
        id: RunId,
        cancel: CancellationToken,
        state: watch::Receiver<RunState>,
        join: JoinHandle<RunOutcome>,
    ) -> Self {
        Self {
            id,
            cancel,
            state,
            join,
        }
    }

    #[inline]
    pub fn id(&self) -> RunId {
        self.id
    }

    /// Latest published state.
    #[inline]
    pub fn state(&self) -> RunState {
        *self.state.borrow()
    }

    /// Request cancellation; takes effect at the next step boundary or
    /// immediately if the run is sleeping or waiting for a slot.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    #[inline]
    pub fn is_stop_requested(&self) -> bool {
        self.cancel.is_cancelled()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait until the run publishes `target` or any terminal state.
    pub async fn wait_for_state(&mut self, target: RunState) -> RunState {
        let reached = self
            .state
            .wait_for(|state| *state == target || state.is_terminal())
            .await
            .map(|state| *state);
        // sender dropped: the task is gone and the last value is final
        reached.unwrap_or_else(|_| *self.state.borrow())
    }

    /// Wait for the run to end.
    pub async fn wait(self) -> Result<RunOutcome, DriverError> {
        let id = self.id;
        self.join.await.map_err(|err| DriverError::Join {
            id,
            reason: err.to_string(),
        })
    }
}
