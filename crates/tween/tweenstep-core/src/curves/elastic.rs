//! Elastic easing: an exponentially damped sine.
//!
//! `amplitude` and `period` are normalized by [`ElasticRule`] before use; the
//! defaults give a period of `0.3 * d` (`0.45 * d` for in-out) and an
//! amplitude equal to the delta.

use std::f64::consts::PI;

use crate::params::ElasticRule;

const PERIOD_FACTOR: f64 = 0.3;
const IN_OUT_PERIOD_FACTOR: f64 = 0.3 * 1.5;

/// Amplitude, period and phase offset actually used by the kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticShape {
    pub amplitude: f64,
    pub period: f64,
    pub offset: f64,
}

impl ElasticShape {
    pub fn resolve(c: f64, d: f64, amplitude: f64, period: f64, factor: f64, rule: ElasticRule) -> Self {
        let default_period = d * factor;
        let period = match rule {
            ElasticRule::Corrected if period == 0.0 => default_period,
            ElasticRule::Corrected => period,
            // legacy condition is inverted: an explicit period is discarded
            ElasticRule::Verbatim if period != 0.0 => default_period,
            ElasticRule::Verbatim => period,
        };
        let use_delta = match rule {
            ElasticRule::Corrected => amplitude == 0.0 || amplitude < c.abs(),
            ElasticRule::Verbatim => amplitude != 0.0 || amplitude < c.abs(),
        };
        if use_delta {
            Self {
                amplitude: c,
                period,
                offset: period / 4.0,
            }
        } else {
            Self {
                amplitude,
                period,
                offset: period / (2.0 * PI) * (c / amplitude).asin(),
            }
        }
    }

    #[inline]
    fn wave(&self, t: f64, d: f64) -> f64 {
        ((t * d - self.offset) * (2.0 * PI) / self.period).sin()
    }
}

pub fn ease_in(t: f64, b: f64, c: f64, d: f64, amplitude: f64, period: f64, rule: ElasticRule) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let shape = ElasticShape::resolve(c, d, amplitude, period, PERIOD_FACTOR, rule);
    let t = t - 1.0;
    -(shape.amplitude * 2f64.powf(10.0 * t) * shape.wave(t, d)) + b
}

pub fn ease_out(t: f64, b: f64, c: f64, d: f64, amplitude: f64, period: f64, rule: ElasticRule) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let shape = ElasticShape::resolve(c, d, amplitude, period, PERIOD_FACTOR, rule);
    shape.amplitude * 2f64.powf(-10.0 * t) * shape.wave(t, d) + c + b
}

pub fn ease_in_out(
    t: f64,
    b: f64,
    c: f64,
    d: f64,
    amplitude: f64,
    period: f64,
    rule: ElasticRule,
) -> f64 {
    if t == 0.0 {
        return b;
    }
    let t = t / (d / 2.0);
    if t == 2.0 {
        return b + c;
    }
    let shape = ElasticShape::resolve(c, d, amplitude, period, IN_OUT_PERIOD_FACTOR, rule);
    if t < 1.0 {
        let t = t - 1.0;
        return -0.5 * (shape.amplitude * 2f64.powf(10.0 * t) * shape.wave(t, d)) + b;
    }
    let t = t - 1.0;
    shape.amplitude * 2f64.powf(-10.0 * t) * shape.wave(t, d) * 0.5 + c + b
}
