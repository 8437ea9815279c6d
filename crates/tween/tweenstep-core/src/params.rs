//! Animation parameters and family-specific extras.

use serde::{Deserialize, Serialize};

use crate::error::EasingError;

/// Default overshoot for the Back family.
pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

/// Magnitude (2^53) from which adding one step no longer changes an `f64`.
pub const MAX_STEP_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

/// Inputs of a single stepped animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationParameters {
    /// Step the run starts at; advanced by one per step.
    #[serde(default)]
    pub current_time: f64,
    /// Start value.
    pub begin_position: i32,
    /// Signed delta, end minus start.
    pub variable_position: i32,
    /// Total step count.
    pub duration: f64,
}

impl AnimationParameters {
    pub fn new(begin_position: i32, variable_position: i32, duration: f64) -> Self {
        Self {
            current_time: 0.0,
            begin_position,
            variable_position,
            duration,
        }
    }

    /// Start stepping at `current_time` instead of 0.
    pub fn starting_at(mut self, current_time: f64) -> Self {
        self.current_time = current_time;
        self
    }

    /// Parse parameters from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, EasingError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject inputs for which the stepping loop would never terminate.
    ///
    /// Both bounds must be finite and below 2^53 in magnitude, where `t + 1.0`
    /// still advances the counter. A zero duration is accepted: it yields
    /// non-finite positions, which the consumer of the evaluator handles.
    pub fn validate(&self) -> Result<(), EasingError> {
        for (name, value) in [("current_time", self.current_time), ("duration", self.duration)] {
            if !value.is_finite() {
                return Err(EasingError::invalid_parameters(format!(
                    "{name} must be finite, got {value}"
                )));
            }
            if value.abs() >= MAX_STEP_MAGNITUDE {
                return Err(EasingError::invalid_parameters(format!(
                    "{name} must be below 2^53 in magnitude, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Number of steps the loop will take from `current_time` to `duration`.
    pub fn remaining_steps(&self) -> f64 {
        if self.current_time >= self.duration {
            0.0
        } else {
            (self.duration - self.current_time).ceil()
        }
    }

    #[inline]
    pub fn begin(&self) -> f64 {
        f64::from(self.begin_position)
    }

    #[inline]
    pub fn delta(&self) -> f64 {
        f64::from(self.variable_position)
    }
}

/// How the Elastic family derives its amplitude and period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElasticRule {
    /// A zero period takes the default; an amplitude is honoured once it
    /// reaches the magnitude of the delta.
    #[default]
    Corrected,
    /// Legacy selection: any non-zero period is replaced by the default and
    /// the amplitude is replaced by the delta unless both are zero.
    Verbatim,
}

/// How the in-out formulas halve the delta.
///
/// Applies to Quad, Cubic, Quart, Quint, Sine, Expo, Circ and Back, whose
/// in-out halves are scaled by `c / 2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidpointRule {
    /// `c / 2` in floating point.
    #[default]
    Exact,
    /// Legacy integer halving, truncated toward zero; an odd delta ends one
    /// short of `b + c`.
    Integer,
}

impl MidpointRule {
    /// The half-delta used by the in-out formulas.
    #[inline]
    pub fn half(self, c: f64) -> f64 {
        match self {
            Self::Exact => c / 2.0,
            Self::Integer => (c / 2.0).trunc(),
        }
    }

    /// The delta whose exact half equals [`half`](Self::half).
    #[inline]
    pub fn in_out_delta(self, c: f64) -> f64 {
        match self {
            Self::Exact => c,
            Self::Integer => self.half(c) * 2.0,
        }
    }
}

/// Family-specific extras. Families ignore the fields they do not use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveExtras {
    /// Elastic oscillation height; 0 selects the delta.
    pub amplitude: f64,
    /// Elastic wavelength in steps; 0 selects the default.
    pub period: f64,
    /// Back overshoot.
    pub overshoot: f64,
    pub elastic_rule: ElasticRule,
    pub midpoint: MidpointRule,
}

impl Default for CurveExtras {
    fn default() -> Self {
        Self {
            amplitude: 0.0,
            period: 0.0,
            overshoot: DEFAULT_OVERSHOOT,
            elastic_rule: ElasticRule::default(),
            midpoint: MidpointRule::default(),
        }
    }
}

impl CurveExtras {
    pub fn elastic(amplitude: f64, period: f64) -> Self {
        Self {
            amplitude,
            period,
            ..Self::default()
        }
    }

    pub fn back(overshoot: f64) -> Self {
        Self {
            overshoot,
            ..Self::default()
        }
    }

    pub fn with_elastic_rule(mut self, rule: ElasticRule) -> Self {
        self.elastic_rule = rule;
        self
    }

    pub fn with_midpoint(mut self, midpoint: MidpointRule) -> Self {
        self.midpoint = midpoint;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_non_finite_inputs() {
        let ok = AnimationParameters::new(0, 100, 0.0);
        assert!(ok.validate().is_ok());

        let nan = AnimationParameters::new(0, 100, f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(EasingError::InvalidParameters { .. })
        ));

        let start = AnimationParameters::new(0, 100, 10.0).starting_at(f64::NEG_INFINITY);
        assert!(start.validate().is_err());
    }

    #[test]
    fn validate_rejects_counters_that_cannot_advance() {
        let stuck = AnimationParameters::new(0, 100, 1e17 + 64.0).starting_at(1e17);
        assert_eq!(stuck.remaining_steps(), 64.0);
        let err = stuck.validate().unwrap_err();
        assert!(err.to_string().contains("current_time"));

        let far = AnimationParameters::new(0, 100, MAX_STEP_MAGNITUDE);
        assert!(far.validate().is_err());
        let below = AnimationParameters::new(0, 100, MAX_STEP_MAGNITUDE - 1.0)
            .starting_at(MAX_STEP_MAGNITUDE - 3.0);
        assert!(below.validate().is_ok());
        let negative = AnimationParameters::new(0, 100, 0.0).starting_at(-MAX_STEP_MAGNITUDE);
        assert!(negative.validate().is_err());
    }

    #[test]
    fn integer_midpoint_truncates_toward_zero() {
        assert_eq!(MidpointRule::Exact.half(101.0), 50.5);
        assert_eq!(MidpointRule::Integer.half(101.0), 50.0);
        assert_eq!(MidpointRule::Integer.half(-101.0), -50.0);
        assert_eq!(MidpointRule::Integer.in_out_delta(101.0), 100.0);
        assert_eq!(MidpointRule::Integer.in_out_delta(-7.0), -6.0);
        assert_eq!(MidpointRule::Exact.in_out_delta(101.0), 101.0);
    }

    #[test]
    fn remaining_steps_counts_partial_steps() {
        assert_eq!(AnimationParameters::new(0, 1, 5.0).remaining_steps(), 5.0);
        assert_eq!(AnimationParameters::new(0, 1, 5.5).remaining_steps(), 6.0);
        assert_eq!(
            AnimationParameters::new(0, 1, 5.0)
                .starting_at(7.0)
                .remaining_steps(),
            0.0
        );
    }

    #[test]
    fn parameters_parse_with_default_start() {
        let params = AnimationParameters::from_json_str(
            r#"{"begin_position": 10, "variable_position": -4, "duration": 8}"#,
        )
        .unwrap();
        assert_eq!(params.current_time, 0.0);
        assert_eq!(params.begin_position, 10);
        assert_eq!(params.variable_position, -4);
        assert_eq!(params.duration, 8.0);
    }

    #[test]
    fn extras_default_overshoot() {
        let extras: CurveExtras = serde_json::from_str(r#"{"amplitude": 2.0}"#).unwrap();
        assert_eq!(extras.overshoot, DEFAULT_OVERSHOOT);
        assert_eq!(extras.elastic_rule, ElasticRule::Corrected);
        assert_eq!(extras.midpoint, MidpointRule::Exact);

        let legacy: CurveExtras = serde_json::from_str(r#"{"midpoint": "integer"}"#).unwrap();
        assert_eq!(legacy.midpoint, MidpointRule::Integer);
    }
}
