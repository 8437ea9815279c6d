//! Exponential easing.
//!
//! The exponential kernel never reaches exactly 0 or 1, so the endpoints are
//! special-cased: `ease_in` returns `b` at `t == 0`, `ease_out` returns `b + c`
//! at `t == d`, and `ease_in_out` does both.

#[inline]
pub fn ease_in(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    c * 2f64.powf(10.0 * (t / d - 1.0)) + b
}

#[inline]
pub fn ease_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if t == d {
        return b + c;
    }
    c * (-(2f64.powf(-10.0 * t / d)) + 1.0) + b
}

#[inline]
pub fn ease_in_out(t: f64, b: f64, c: f64, d: f64) -> f64 {
    ease_in_out_halved(t, b, c, d, c / 2.0)
}

/// In-out with an explicit half-delta. The `t == d` endpoint still lands on
/// `b + c`.
pub fn ease_in_out_halved(t: f64, b: f64, c: f64, d: f64, half: f64) -> f64 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return half * 2f64.powf(10.0 * (t - 1.0)) + b;
    }
    let t = t - 1.0;
    half * (-(2f64.powf(-10.0 * t)) + 2.0) + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease_in(0.0, 7.0, 100.0, 10.0), 7.0);
        assert_eq!(ease_out(10.0, 7.0, 100.0, 10.0), 107.0);
        assert_eq!(ease_in_out(0.0, 7.0, 100.0, 10.0), 7.0);
        assert_eq!(ease_in_out(10.0, 7.0, 100.0, 10.0), 107.0);
    }

    #[test]
    fn halved_in_out_keeps_the_exact_endpoint() {
        assert_eq!(ease_in_out_halved(10.0, 0.0, 101.0, 10.0, 50.0), 101.0);
        assert_eq!(ease_in_out_halved(5.0, 0.0, 101.0, 10.0, 50.0), 50.0);
        assert_eq!(ease_in_out(5.0, 0.0, 101.0, 10.0), 50.5);
    }

    #[test]
    fn special_cases_hold_even_for_zero_duration() {
        assert_eq!(ease_in(0.0, 3.0, 100.0, 0.0), 3.0);
        assert_eq!(ease_out(0.0, 3.0, 100.0, 0.0), 103.0);
    }
}
