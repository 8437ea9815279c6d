//! Error types for curve evaluation and stepping

use serde::{Deserialize, Serialize};

/// Errors raised by curve dispatch, parameter validation and position truncation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingError {
    /// Family or phase selector that does not name a known curve
    #[error("Invalid curve selector: {selector}")]
    InvalidCurveSelector { selector: String },

    /// Animation parameters that cannot drive a terminating run
    #[error("Invalid animation parameters: {reason}")]
    InvalidParameters { reason: String },

    /// Evaluator produced NaN or an infinity
    #[error("Non-finite position {value} at step {step}")]
    NonFinite { step: f64, value: f64 },

    /// Evaluator produced a finite value outside the deliverable integer range
    #[error("Position {value} at step {step} does not fit a 32-bit integer")]
    OutOfRange { step: f64, value: f64 },

    /// Baking would exceed the configured step budget
    #[error("Step limit exceeded: {steps} steps requested (limit: {limit})")]
    StepLimitExceeded { steps: f64, limit: usize },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl EasingError {
    /// Create a parameter validation error
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }

    /// True for errors produced by evaluating a curve, as opposed to
    /// rejecting the request before any step ran.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::NonFinite { .. } | Self::OutOfRange { .. })
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidCurveSelector { .. } => "selector",
            Self::InvalidParameters { .. } | Self::StepLimitExceeded { .. } => "validation",
            Self::NonFinite { .. } | Self::OutOfRange { .. } => "numeric",
            Self::SerializationError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for EasingError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
