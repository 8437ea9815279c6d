//! Baking API: compute the full delivered sequence of a run up front.
//!
//! Baking walks the same loop as the stepping driver (start at
//! `current_time`, evaluate, truncate, advance by one while below `duration`)
//! without any delay between steps.

use serde::{Deserialize, Serialize};

use crate::dispatch::resolve;
use crate::error::EasingError;
use crate::params::{AnimationParameters, CurveExtras};
use crate::position::truncate_position;
use crate::types::{CurveFamily, EasingPhase};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakeConfig {
    /// Upper bound on steps a single bake may produce.
    pub max_steps: usize,
}

impl Default for BakeConfig {
    fn default() -> Self {
        Self { max_steps: 100_000 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedRun {
    pub family: CurveFamily,
    pub phase: EasingPhase,
    pub params: AnimationParameters,
    /// Delivered positions in step order.
    pub positions: Vec<i32>,
}

/// Bake the positions a driver run with these inputs would deliver.
pub fn bake_positions(
    params: &AnimationParameters,
    family: CurveFamily,
    phase: EasingPhase,
    extras: &CurveExtras,
    cfg: &BakeConfig,
) -> Result<BakedRun, EasingError> {
    params.validate()?;
    let steps = params.remaining_steps();
    if steps > cfg.max_steps as f64 {
        return Err(EasingError::StepLimitExceeded {
            steps,
            limit: cfg.max_steps,
        });
    }

    let evaluator = resolve(family, phase)?;
    let (b, c, d) = (params.begin(), params.delta(), params.duration);
    let steps = steps as usize;
    let mut positions = Vec::with_capacity(steps);
    for i in 0..steps {
        let t = params.current_time + i as f64;
        let raw = evaluator(t, b, c, d, extras);
        positions.push(truncate_position(t, raw)?);
    }

    Ok(BakedRun {
        family,
        phase,
        params: *params,
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_bake_matches_expected_sequence() {
        let params = AnimationParameters::new(0, 100, 5.0);
        let baked = bake_positions(
            &params,
            CurveFamily::Linear,
            EasingPhase::EaseIn,
            &CurveExtras::default(),
            &BakeConfig::default(),
        )
        .unwrap();
        assert_eq!(baked.positions, vec![0, 20, 40, 60, 80]);
    }

    #[test]
    fn bake_starts_from_current_time() {
        let params = AnimationParameters::new(0, 100, 5.0).starting_at(3.0);
        let baked = bake_positions(
            &params,
            CurveFamily::Linear,
            EasingPhase::EaseOut,
            &CurveExtras::default(),
            &BakeConfig::default(),
        )
        .unwrap();
        assert_eq!(baked.positions, vec![60, 80]);
    }

    #[test]
    fn bake_respects_step_limit() {
        let params = AnimationParameters::new(0, 100, 50.0);
        let err = bake_positions(
            &params,
            CurveFamily::Quad,
            EasingPhase::EaseIn,
            &CurveExtras::default(),
            &BakeConfig { max_steps: 10 },
        )
        .unwrap_err();
        assert!(matches!(err, EasingError::StepLimitExceeded { limit: 10, .. }));
    }

    #[test]
    fn counters_beyond_exact_float_range_are_rejected() {
        let params = AnimationParameters::new(0, 100, 1e17 + 64.0).starting_at(1e17);
        let err = bake_positions(
            &params,
            CurveFamily::Linear,
            EasingPhase::EaseIn,
            &CurveExtras::default(),
            &BakeConfig { max_steps: 1000 },
        )
        .unwrap_err();
        assert!(matches!(err, EasingError::InvalidParameters { .. }));
    }

    #[test]
    fn fractional_bounds_bake_one_step_per_unit() {
        let params = AnimationParameters::new(0, 100, 2.5).starting_at(0.5);
        let baked = bake_positions(
            &params,
            CurveFamily::Linear,
            EasingPhase::EaseIn,
            &CurveExtras::default(),
            &BakeConfig::default(),
        )
        .unwrap();
        assert_eq!(baked.positions, vec![20, 60]);
    }

    #[test]
    fn zero_duration_bakes_nothing() {
        let params = AnimationParameters::new(0, 100, 0.0);
        let baked = bake_positions(
            &params,
            CurveFamily::Quad,
            EasingPhase::EaseIn,
            &CurveExtras::default(),
            &BakeConfig::default(),
        )
        .unwrap();
        assert!(baked.positions.is_empty());
    }

    #[test]
    fn negative_start_with_zero_duration_is_non_finite() {
        let params = AnimationParameters::new(0, 100, 0.0).starting_at(-1.0);
        let err = bake_positions(
            &params,
            CurveFamily::Quad,
            EasingPhase::EaseIn,
            &CurveExtras::default(),
            &BakeConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EasingError::NonFinite { .. }));
    }
}
