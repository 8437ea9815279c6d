//! tweenstep core (engine-agnostic)
//!
//! Pure easing curves for step-based tweening of a scalar between a start and
//! end value. Eleven curve families each provide `ease_in`, `ease_out` and
//! `ease_in_out`; a dispatch table resolves `(family, phase)` to an evaluator;
//! positions are truncated to integers before delivery.
//!
//! Scheduling lives in `tweenstep-driver`; nothing in this crate sleeps or spawns.

pub mod baking;
pub mod curves;
pub mod dispatch;
pub mod error;
pub mod params;
pub mod position;
pub mod types;

// Re-exports for consumers (drivers, adapters)
pub use baking::{bake_positions, BakeConfig, BakedRun};
pub use curves::{curve_for, Curve};
pub use dispatch::{resolve, resolve_named, sample, CurveRegistry, Evaluator};
pub use error::EasingError;
pub use params::{
    AnimationParameters, CurveExtras, ElasticRule, MidpointRule, DEFAULT_OVERSHOOT,
    MAX_STEP_MAGNITUDE,
};
pub use position::{truncate_lossy, truncate_position};
pub use types::{CurveFamily, EasingPhase};

/// Result type for curve operations
pub type Result<T> = core::result::Result<T, EasingError>;
