//! Sinusoidal easing.

use std::f64::consts::{FRAC_PI_2, PI};

#[inline]
pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c * (t / d * FRAC_PI_2).cos() + c + b
}

#[inline]
pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c * (t / d * FRAC_PI_2).sin() + b
}

#[inline]
pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}
