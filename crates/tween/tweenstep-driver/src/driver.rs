//! Stepping driver.
//!
//! Every started run becomes one task on the driver's runtime. A run waits
//! for a pool slot (bounded by `max_concurrent_runs`), then loops: evaluate,
//! truncate, post, advance, sleep. Runs share nothing but the slot semaphore;
//! each owns a child of the driver's cancellation token, so a run can be
//! stopped on its own or together with the driver.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{watch, Semaphore};
use tokio_util::sync::CancellationToken;
use tweenstep_core::{AnimationParameters, CurveExtras, CurveFamily, EasingPhase};

use crate::channel::{CallbackChannel, DeliveryChannel};
use crate::config::DriverConfig;
use crate::error::DriverError;
use crate::run::{AnimationRun, RunHandle, RunId, RunOutcome, RunState};
use crate::runtime::runtime_handle;

/// Starts and stops stepped animation runs.
#[derive(Debug)]
pub struct AnimationDriver {
    config: DriverConfig,
    handle: Handle,
    slots: Arc<Semaphore>,
    root: CancellationToken,
    next_id: AtomicU64,
    active: Arc<AtomicUsize>,
}

impl AnimationDriver {
    /// Create a driver on the current Tokio runtime, or on a shared fallback
    /// runtime when none is running.
    pub fn new(config: DriverConfig) -> Result<Self, DriverError> {
        let handle = runtime_handle(config.worker_threads)?;
        Self::with_handle(config, handle)
    }

    /// Create a driver whose runs are spawned on `handle`.
    pub fn with_handle(config: DriverConfig, handle: Handle) -> Result<Self, DriverError> {
        config.validate()?;
        Ok(Self {
            slots: Arc::new(Semaphore::new(config.max_concurrent_runs)),
            config,
            handle,
            root: CancellationToken::new(),
            next_id: AtomicU64::new(0),
            active: Arc::new(AtomicUsize::new(0)),
        })
    }

    #[inline]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    #[inline]
    pub fn default_step_delay(&self) -> Duration {
        self.config.default_step_delay()
    }

    /// Runs started and not yet ended, including those waiting for a slot.
    #[inline]
    pub fn active_runs(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Free pool slots.
    #[inline]
    pub fn available_slots(&self) -> usize {
        self.slots.available_permits()
    }

    /// Wrap `on_step` in a channel whose dispatch task lives on this driver's runtime.
    pub fn callback_channel<F>(&self, on_step: F) -> CallbackChannel
    where
        F: FnMut(i32) + Send + 'static,
    {
        CallbackChannel::spawn(&self.handle, on_step)
    }

    /// Start a run and return immediately.
    ///
    /// Parameters and selectors are checked before anything is spawned; every
    /// position then arrives through `channel`. `extras` are used as given,
    /// including their elastic and midpoint rules.
    pub fn start<C>(
        &self,
        params: AnimationParameters,
        family: CurveFamily,
        phase: EasingPhase,
        extras: CurveExtras,
        step_delay: Duration,
        channel: C,
    ) -> Result<RunHandle, DriverError>
    where
        C: DeliveryChannel,
    {
        if self.root.is_cancelled() {
            return Err(DriverError::Shutdown);
        }
        let run = AnimationRun::new(params, family, phase, extras, step_delay)?
            .lenient(!self.config.halt_on_non_finite);

        let id = RunId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let cancel = self.root.child_token();
        let (state_tx, state_rx) = watch::channel(RunState::Idle);

        tracing::debug!(
            run = %id,
            family = family.name(),
            phase = phase.name(),
            begin = params.begin_position,
            delta = params.variable_position,
            duration = params.duration,
            delay_ms = step_delay.as_millis() as u64,
            "tween.run.start"
        );

        self.active.fetch_add(1, Ordering::AcqRel);
        let guard = ActiveGuard(Arc::clone(&self.active));
        let slots = Arc::clone(&self.slots);
        let task_cancel = cancel.clone();
        let join = self.handle.spawn(async move {
            let _guard = guard;
            let outcome = drive(id, run, channel, slots, task_cancel, &state_tx).await;
            state_tx.send_replace(outcome.state());
            outcome
        });

        Ok(RunHandle::new(id, cancel, state_rx, join))
    }

    /// Start a run with the configured step delay and rules, and the default
    /// Elastic/Back extras.
    pub fn start_with_defaults<C>(
        &self,
        params: AnimationParameters,
        family: CurveFamily,
        phase: EasingPhase,
        channel: C,
    ) -> Result<RunHandle, DriverError>
    where
        C: DeliveryChannel,
    {
        let extras = self.config.default_extras();
        self.start(params, family, phase, extras, self.default_step_delay(), channel)
    }

    /// Stop a run at its next step boundary.
    pub fn stop(&self, run: &RunHandle) {
        tracing::debug!(run = %run.id(), state = run.state().name(), "tween.run.stop");
        run.stop();
    }

    /// Stop every run and refuse new ones.
    pub fn shutdown(&self) {
        tracing::debug!(active = self.active_runs(), "tween.driver.shutdown");
        self.root.cancel();
    }

    #[inline]
    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

struct ActiveGuard(Arc<AtomicUsize>);

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

async fn drive<C: DeliveryChannel>(
    id: RunId,
    mut run: AnimationRun,
    channel: C,
    slots: Arc<Semaphore>,
    cancel: CancellationToken,
    state: &watch::Sender<RunState>,
) -> RunOutcome {
    let _permit = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::debug!(run = %id, delivered = 0, "tween.run.cancelled");
            return RunOutcome::Cancelled { delivered: 0 };
        }
        permit = slots.acquire_owned() => match permit {
            Ok(permit) => permit,
            Err(_) => return RunOutcome::Cancelled { delivered: 0 },
        },
    };
    state.send_replace(RunState::Running);

    let mut delivered = 0u64;
    loop {
        if cancel.is_cancelled() {
            tracing::debug!(run = %id, delivered, "tween.run.cancelled");
            return RunOutcome::Cancelled { delivered };
        }
        let step = run.current_time();
        let Some(result) = run.step() else {
            break;
        };
        match result {
            Ok(position) => {
                tracing::trace!(run = %id, step, position, "tween.run.step");
                channel.post(position);
                delivered += 1;
            }
            Err(error) => {
                tracing::warn!(run = %id, delivered, error = %error, "tween.run.failed");
                channel.fail(&error);
                return RunOutcome::Failed { delivered, error };
            }
        }

        if run.is_finished() {
            break;
        }
        let delay = run.step_delay();
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(run = %id, delivered, "tween.run.cancelled");
                    return RunOutcome::Cancelled { delivered };
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    tracing::debug!(run = %id, delivered, "tween.run.complete");
    RunOutcome::Completed { delivered }
}
