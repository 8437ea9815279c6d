//! Back easing: overshoots past the target before settling.

/// Scale applied to the overshoot for each half of the in-out curve.
const IN_OUT_OVERSHOOT_SCALE: f64 = 1.525;

#[inline]
pub fn ease_in(t: f64, b: f64, c: f64, d: f64, overshoot: f64) -> f64 {
    let t = t / d;
    c * t * t * ((overshoot + 1.0) * t - overshoot) + b
}

#[inline]
pub fn ease_out(t: f64, b: f64, c: f64, d: f64, overshoot: f64) -> f64 {
    let t = t / d - 1.0;
    c * (t * t * ((overshoot + 1.0) * t + overshoot) + 1.0) + b
}

#[inline]
pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64, overshoot: f64) -> f64 {
    let k = overshoot * IN_OUT_OVERSHOOT_SCALE;
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((k + 1.0) * t - k)) + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * ((k + 1.0) * t + k) + 2.0) + b
}
