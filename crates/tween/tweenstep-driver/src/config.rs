//! Driver configuration.

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tweenstep_core::{CurveExtras, ElasticRule, MidpointRule};

use crate::error::DriverError;

/// Sizing and policy for an [`AnimationDriver`](crate::AnimationDriver).
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Runs allowed to step at the same time; later runs wait idle for a slot.
    pub max_concurrent_runs: usize,
    /// Step delay of [`AnimationDriver::start_with_defaults`](crate::AnimationDriver::start_with_defaults).
    pub default_step_delay_ms: u64,
    /// End a run as failed on the first NaN/infinite/out-of-range position
    /// instead of delivering a saturated integer.
    pub halt_on_non_finite: bool,
    /// Worker threads of the fallback runtime, used only when the driver is
    /// created outside a Tokio runtime.
    pub worker_threads: usize,
    /// Amplitude/period selection for runs started through the per-family
    /// entry points and `start_with_defaults`. `start` uses the caller's extras.
    pub elastic_rule: ElasticRule,
    /// In-out halving for the same entry points as `elastic_rule`.
    pub midpoint: MidpointRule,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_concurrent_runs: 64,
            default_step_delay_ms: 16,
            halt_on_non_finite: true,
            worker_threads: 2,
            elastic_rule: ElasticRule::Corrected,
            midpoint: MidpointRule::Exact,
        }
    }
}

impl DriverConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, DriverError> {
        let cfg: Self = serde_json::from_str(json).map_err(|err| DriverError::InvalidConfig {
            reason: err.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), DriverError> {
        if self.max_concurrent_runs == 0 || self.max_concurrent_runs > Semaphore::MAX_PERMITS {
            return Err(DriverError::InvalidConfig {
                reason: format!(
                    "max_concurrent_runs must be in 1..={}, got {}",
                    Semaphore::MAX_PERMITS,
                    self.max_concurrent_runs
                ),
            });
        }
        if self.worker_threads == 0 {
            return Err(DriverError::InvalidConfig {
                reason: "worker_threads must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Curve extras carrying the configured rules and the default overshoot.
    pub fn default_extras(&self) -> CurveExtras {
        CurveExtras::default()
            .with_elastic_rule(self.elastic_rule)
            .with_midpoint(self.midpoint)
    }

    #[inline]
    pub fn default_step_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.default_step_delay_ms)
    }
}
