//! Error types for the stepping driver

use tweenstep_core::EasingError;

use crate::run::RunId;

/// Errors raised when configuring the driver or starting and awaiting runs
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DriverError {
    /// Rejected parameters or curve selector
    #[error(transparent)]
    Easing(#[from] EasingError),

    /// Driver configuration that cannot be honoured
    #[error("Invalid driver configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The driver no longer accepts runs
    #[error("Driver has been shut down")]
    Shutdown,

    /// No runtime could be obtained for stepping tasks
    #[error("Runtime unavailable: {reason}")]
    Runtime { reason: String },

    /// A run task panicked or was aborted
    #[error("Run {id} terminated abnormally: {reason}")]
    Join { id: RunId, reason: String },
}

impl DriverError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Easing(err) => err.category(),
            Self::InvalidConfig { .. } => "config",
            Self::Shutdown => "lifecycle",
            Self::Runtime { .. } | Self::Join { .. } => "runtime",
        }
    }
}
