//! Bounce easing: a four-segment decaying parabola.
//!
//! `ease_out` is the primary shape; `ease_in` mirrors it in time and value and
//! `ease_in_out` stitches the two at half scale.

const DECAY: f64 = 7.5625;
const SPAN: f64 = 2.75;

pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    if t < 1.0 / SPAN {
        c * (DECAY * t * t) + b
    } else if t < 2.0 / SPAN {
        let t = t - 1.5 / SPAN;
        c * (DECAY * t * t + 0.75) + b
    } else if t < 2.5 / SPAN {
        let t = t - 2.25 / SPAN;
        c * (DECAY * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / SPAN;
        c * (DECAY * t * t + 0.984375) + b
    }
}

pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    c - ease_out(d - t, 0.0, c, d) + b
}

pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t < d / 2.0 {
        ease_in(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        ease_out(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}
