//! Circular easing.

#[inline]
pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

#[inline]
pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

#[inline]
pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
    }
    let t = t - 2.0;
    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_the_unit_span_is_nan() {
        // sqrt of a negative radicand once t runs past d
        assert!(ease_in(11.0, 0.0, 100.0, 10.0).is_nan());
    }
}
