//! Conversion of evaluator output to delivered integer positions.
//!
//! Positions are truncated toward zero, never rounded: `49.99` delivers `49`
//! and `-0.5` delivers `0`.

use crate::error::EasingError;

/// Truncate `raw` to an integer position, rejecting values that cannot be
/// represented.
#[inline]
pub fn truncate_position(step: f64, raw: f64) -> Result<i32, EasingError> {
    if !raw.is_finite() {
        return Err(EasingError::NonFinite { step, value: raw });
    }
    let truncated = raw.trunc();
    if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
        return Err(EasingError::OutOfRange { step, value: raw });
    }
    Ok(truncated as i32)
}

/// Truncate without validation. NaN maps to 0 and infinities saturate.
#[inline]
pub fn truncate_lossy(raw: f64) -> i32 {
    raw as i32
}
