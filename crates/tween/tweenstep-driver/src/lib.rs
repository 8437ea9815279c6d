//! tweenstep driver
//!
//! Runs easing curves from `tweenstep-core` as fixed-delay stepping loops on
//! Tokio tasks and posts each truncated position to a [`DeliveryChannel`].
//! Runs are bounded by a slot pool and individually stoppable.

pub mod channel;
pub mod config;
pub mod driver;
pub mod error;
mod families;
pub mod run;
mod runtime;

pub use channel::{CallbackChannel, Delivery, DeliveryChannel};
pub use config::DriverConfig;
pub use driver::AnimationDriver;
pub use error::DriverError;
pub use run::{AnimationRun, RunHandle, RunId, RunOutcome, RunState};
pub use tweenstep_core::{
    AnimationParameters, CurveExtras, CurveFamily, EasingPhase, ElasticRule, MidpointRule,
};

/// Result type for driver operations
pub type Result<T> = core::result::Result<T, DriverError>;
